use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable consulted when no path argument is given.
pub const DATA_ENV_VAR: &str = "LAUNCH_DASH_DATA";

/// Dataset looked up in the working directory by default.
pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";

// ---------------------------------------------------------------------------
// Startup configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DashConfig {
    /// Launch dataset loaded once at startup.
    pub data_path: PathBuf,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            window_size: [1200.0, 900.0],
            min_window_size: [700.0, 500.0],
        }
    }
}

impl DashConfig {
    /// Resolve from the process arguments and environment.
    pub fn from_env() -> Self {
        Self::resolve(std::env::args_os().skip(1), std::env::var_os(DATA_ENV_VAR))
    }

    /// Path precedence: first argument, then `LAUNCH_DASH_DATA`, then
    /// [`DEFAULT_DATA_FILE`].
    pub fn resolve(mut args: impl Iterator<Item = OsString>, env_path: Option<OsString>) -> Self {
        let data_path = args
            .next()
            .or(env_path)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        Self {
            data_path,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = OsString> {
        list.iter().map(OsString::from).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_argument_wins_over_env() {
        let cfg = DashConfig::resolve(args(&["cli.csv"]), Some("env.csv".into()));
        assert_eq!(cfg.data_path, PathBuf::from("cli.csv"));
    }

    #[test]
    fn test_env_used_without_argument() {
        let cfg = DashConfig::resolve(args(&[]), Some("env.parquet".into()));
        assert_eq!(cfg.data_path, PathBuf::from("env.parquet"));
    }

    #[test]
    fn test_default_path() {
        let cfg = DashConfig::resolve(args(&[]), None);
        assert_eq!(cfg, DashConfig::default());
        assert_eq!(cfg.data_path, PathBuf::from(DEFAULT_DATA_FILE));

        let cfg = DashConfig::resolve(args(&[]), Some(OsString::new()));
        assert_eq!(cfg.data_path, PathBuf::from(DEFAULT_DATA_FILE));
    }
}
