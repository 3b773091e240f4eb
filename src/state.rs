use crate::color::ColorMap;
use crate::data::aggregate::{pie_chart, scatter_chart, PieChart, ScatterChart};
use crate::data::filter::PayloadRange;
use crate::data::model::{LaunchDataset, SiteSelection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, never mutated after load.
    pub dataset: LaunchDataset,

    /// Dropdown selection.
    pub site: SiteSelection,

    /// Slider selection.
    pub payload_range: PayloadRange,

    /// Pie payload for the current site (cached).
    pub pie: PieChart,

    /// Scatter payload for the current site and payload range (cached).
    pub scatter: ScatterChart,

    /// Booster category colours for the scatter series.
    pub booster_colors: ColorMap,

    /// Whether the records table is shown.
    pub show_table: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: LaunchDataset) -> Self {
        let mut state = Self {
            dataset: LaunchDataset::default(),
            site: SiteSelection::All,
            payload_range: PayloadRange::new(0.0, 0.0),
            pie: PieChart::default(),
            scatter: ScatterChart::default(),
            booster_colors: ColorMap::default(),
            show_table: false,
            status_message: None,
        };
        state.set_dataset(dataset);
        state
    }

    /// Ingest a newly loaded dataset, reset selections and recompute charts.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.booster_colors = ColorMap::new(&dataset.booster_categories);
        self.payload_range = PayloadRange::full(&dataset);
        self.site = SiteSelection::All;
        self.dataset = dataset;
        self.status_message = None;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Dropdown changed: both charts depend on the site.
    pub fn set_site(&mut self, site: SiteSelection) {
        if site == self.site {
            return;
        }
        self.site = site;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Slider changed: only the scatter depends on payload.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if range == self.payload_range {
            return;
        }
        self.payload_range = range;
        self.refresh_scatter();
    }

    pub fn reset_payload_range(&mut self) {
        self.set_payload_range(PayloadRange::full(&self.dataset));
    }

    /// Observed payload bounds used for the slider limits.
    pub fn payload_limits(&self) -> (f64, f64) {
        self.dataset.payload_bounds().unwrap_or((0.0, 0.0))
    }

    /// Top bar summary line.
    pub fn summary(&self) -> String {
        format!(
            "{} launches loaded, {} in payload range",
            self.dataset.len(),
            self.scatter.points.len()
        )
    }

    fn refresh_pie(&mut self) {
        self.pie = pie_chart(&self.dataset, &self.site);
        log::debug!(
            "Pie for {}: {} slices, total {}",
            self.site.value(),
            self.pie.slices.len(),
            self.pie.total()
        );
        if self.pie.slices.is_empty() && !self.dataset.is_empty() {
            log::warn!("No launches from site {}", self.site.value());
        }
    }

    fn refresh_scatter(&mut self) {
        self.scatter = scatter_chart(&self.dataset, &self.site, self.payload_range);
        log::debug!(
            "Scatter for {} in [{}, {}] kg: {} points",
            self.site.value(),
            self.payload_range.low,
            self.payload_range.high,
            self.scatter.points.len()
        );
        if let Some(reason) = self.empty_scatter_reason() {
            log::warn!("{reason}");
        }
    }

    /// Why the scatter is empty, or `None` when it has points or there is
    /// no data at all.
    pub fn empty_scatter_reason(&self) -> Option<String> {
        if !self.scatter.points.is_empty() || self.dataset.is_empty() {
            return None;
        }
        let reason = if self.payload_range.is_empty() {
            "Lower bound exceeds upper bound.".to_string()
        } else {
            format!(
                "No launches from site {} in [{}, {}] kg.",
                self.site.value(),
                self.payload_range.low,
                self.payload_range.high
            )
        };
        Some(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success, "v1"),
            LaunchRecord::new("A", 1500.0, Outcome::Failure, "v1"),
            LaunchRecord::new("B", 3000.0, Outcome::Success, "v2"),
        ])
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let state = AppState::new(dataset());
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::new(500.0, 3000.0));
        assert_eq!(state.pie.total(), 2);
        assert_eq!(state.scatter.points.len(), 3);
    }

    #[test]
    fn test_site_change_recomputes_both_charts() {
        let mut state = AppState::new(dataset());
        state.set_site(SiteSelection::Site("A".into()));

        assert_eq!(state.pie.title, "Total Success Launches for site A");
        assert_eq!(state.pie.total(), 2);
        assert_eq!(state.scatter.points.len(), 2);
    }

    #[test]
    fn test_payload_change_leaves_pie_untouched() {
        let mut state = AppState::new(dataset());
        let pie_before = state.pie.clone();

        state.set_payload_range(PayloadRange::new(0.0, 1000.0));
        assert_eq!(state.pie, pie_before);
        assert_eq!(state.scatter.points.len(), 1);

        state.reset_payload_range();
        assert_eq!(state.scatter.points.len(), 3);
    }

    #[test]
    fn test_unknown_site_degrades_to_empty() {
        let mut state = AppState::new(dataset());
        state.set_site(SiteSelection::Site("Z".into()));
        assert!(state.pie.slices.is_empty());
        assert!(state.scatter.points.is_empty());
    }

    #[test]
    fn test_set_dataset_resets_selection() {
        let mut state = AppState::new(dataset());
        state.set_site(SiteSelection::Site("B".into()));
        state.set_payload_range(PayloadRange::new(0.0, 10.0));
        state.status_message = Some("old error".into());

        state.set_dataset(LaunchDataset::from_records(vec![LaunchRecord::new(
            "C",
            42.0,
            Outcome::Failure,
            "FT",
        )]));

        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::new(42.0, 42.0));
        assert_eq!(state.scatter.points.len(), 1);
        assert!(state.status_message.is_none());
        assert_eq!(state.booster_colors.legend_entries().len(), 1);
    }

    #[test]
    fn test_empty_scatter_reason() {
        let mut state = AppState::new(dataset());
        assert_eq!(state.empty_scatter_reason(), None);

        state.set_payload_range(PayloadRange::new(2000.0, 1000.0));
        assert!(state.scatter.points.is_empty());
        assert_eq!(
            state.empty_scatter_reason().as_deref(),
            Some("Lower bound exceeds upper bound.")
        );

        state.set_payload_range(PayloadRange::new(5000.0, 9000.0));
        assert_eq!(
            state.empty_scatter_reason().as_deref(),
            Some("No launches from site ALL in [5000, 9000] kg.")
        );

        state.reset_payload_range();
        state.set_site(SiteSelection::Site("Z".into()));
        assert!(state.pie.slices.is_empty());
        assert_eq!(
            state.empty_scatter_reason().as_deref(),
            Some("No launches from site Z in [500, 3000] kg.")
        );

        assert_eq!(
            AppState::new(LaunchDataset::default()).empty_scatter_reason(),
            None
        );
    }

    #[test]
    fn test_summary_counts_scatter_rows() {
        let mut state = AppState::new(dataset());
        assert_eq!(state.summary(), "3 launches loaded, 3 in payload range");

        state.set_payload_range(PayloadRange::new(0.0, 1000.0));
        assert_eq!(state.summary(), "3 launches loaded, 1 in payload range");
    }

    #[test]
    fn test_empty_dataset() {
        let state = AppState::new(LaunchDataset::default());
        assert_eq!(state.payload_limits(), (0.0, 0.0));
        assert!(state.pie.slices.is_empty());
        assert!(state.scatter.points.is_empty());
    }
}
