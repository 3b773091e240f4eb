mod app;
mod color;
mod config;
mod data;
mod export;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::LaunchDashApp;
use config::DashConfig;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashConfig::from_env();

    // The dashboard has nothing to show without its dataset.
    let dataset = data::loader::load_file(&config.data_path)
        .with_context(|| format!("loading launch records from {}", config.data_path.display()))
        .inspect_err(|e| log::error!("{e:#}"))?;
    log::info!(
        "Loaded {} launches from sites {:?}",
        dataset.len(),
        dataset.sites
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let state = AppState::new(dataset);
    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard window: {e}"))
}
