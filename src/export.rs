use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::aggregate::{PieChart, ScatterChart};
use crate::data::filter::PayloadRange;
use crate::data::model::SiteSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart payload export
// ---------------------------------------------------------------------------

/// Both chart payloads plus the inputs that produced them.
#[derive(Debug, Serialize)]
pub struct ChartExport<'a> {
    pub site: &'a SiteSelection,
    pub payload_range: PayloadRange,
    pub pie: &'a PieChart,
    pub scatter: &'a ScatterChart,
}

impl<'a> ChartExport<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        Self {
            site: &state.site,
            payload_range: state.payload_range,
            pie: &state.pie,
            scatter: &state.scatter,
        }
    }
}

pub fn to_json(export: &ChartExport<'_>) -> Result<String> {
    serde_json::to_string_pretty(export).context("serializing chart data")
}

/// Write the current chart payloads as pretty JSON.
pub fn write_json(path: &Path, state: &AppState) -> Result<()> {
    let json = to_json(&ChartExport::from_state(state))?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Exported chart data to {}", path.display());
    Ok(())
}
