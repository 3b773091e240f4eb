use serde::Serialize;

use super::model::{LaunchDataset, LaunchRecord, SiteSelection};

// ---------------------------------------------------------------------------
// Payload range: inclusive kilogram interval
// ---------------------------------------------------------------------------

/// Inclusive `[low, high]` payload interval in kilograms.
/// `low > high` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// The dataset's full observed range (`[0, 0]` when empty).
    pub fn full(dataset: &LaunchDataset) -> Self {
        let (low, high) = dataset.payload_bounds().unwrap_or((0.0, 0.0));
        Self { low, high }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Keep records launched from the selected site, in input order.
///
/// `SiteSelection::All` passes every record through. An unknown site name
/// yields an empty result rather than an error.
pub fn filter_by_site<'a, I>(records: I, site: &SiteSelection) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .filter(|rec| site.matches(&rec.launch_site))
        .collect()
}

/// Keep records whose payload lies within `range`, both ends inclusive.
pub fn filter_by_payload<'a, I>(records: I, range: PayloadRange) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .filter(|rec| range.contains(rec.payload_mass_kg))
        .collect()
}
