use serde::Serialize;

use super::filter::{filter_by_payload, filter_by_site, PayloadRange};
use super::model::{LaunchDataset, LaunchRecord, Outcome, SiteSelection};

// ---------------------------------------------------------------------------
// Chart payloads
// ---------------------------------------------------------------------------

/// One wedge of the outcome pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

/// Grouped counts for the proportion chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// One scatter point: (payload, outcome, booster category).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub class: u8,
    pub booster_version_category: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    /// Points grouped per booster category, categories in first-seen order.
    pub fn series(&self) -> Vec<(&str, Vec<[f64; 2]>)> {
        let mut series: Vec<(&str, Vec<[f64; 2]>)> = Vec::new();
        for p in &self.points {
            let xy = [p.payload_mass_kg, f64::from(p.class)];
            let slot = series
                .iter()
                .position(|(cat, _)| *cat == p.booster_version_category);
            match slot {
                Some(i) => series[i].1.push(xy),
                None => series.push((p.booster_version_category.as_str(), vec![xy])),
            }
        }
        series
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Successful launches per site, sites in first-seen order.
/// Sites without any success still get a zero entry.
pub fn success_counts_by_site<'a, I>(records: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for rec in records {
        let hit = usize::from(rec.outcome.is_success());
        let slot = counts.iter().position(|(site, _)| *site == rec.launch_site);
        match slot {
            Some(i) => counts[i].1 += hit,
            None => counts.push((rec.launch_site.clone(), hit)),
        }
    }
    counts
}

/// Occurrences of each outcome, outcomes in first-seen order.
pub fn outcome_counts<'a, I>(records: I) -> Vec<(Outcome, usize)>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    let mut counts: Vec<(Outcome, usize)> = Vec::new();
    for rec in records {
        let slot = counts.iter().position(|(o, _)| *o == rec.outcome);
        match slot {
            Some(i) => counts[i].1 += 1,
            None => counts.push((rec.outcome, 1)),
        }
    }
    counts
}

/// Project records to the scatter triple, preserving input order.
pub fn project<'a, I>(records: I) -> Vec<ScatterPoint>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .map(|rec| ScatterPoint {
            payload_mass_kg: rec.payload_mass_kg,
            class: rec.outcome.class(),
            booster_version_category: rec.booster_version_category.clone(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Full pipelines driven by the UI
// ---------------------------------------------------------------------------

/// dataset → site filter → outcome aggregation.
pub fn pie_chart(dataset: &LaunchDataset, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => PieChart {
            title: "Success Count for all launch sites".to_string(),
            slices: success_counts_by_site(&dataset.records)
                .into_iter()
                .map(|(label, value)| PieSlice { label, value })
                .collect(),
        },
        SiteSelection::Site(name) => {
            let filtered = filter_by_site(&dataset.records, site);
            PieChart {
                title: format!("Total Success Launches for site {name}"),
                slices: outcome_counts(filtered)
                    .into_iter()
                    .map(|(outcome, value)| PieSlice {
                        label: outcome.to_string(),
                        value,
                    })
                    .collect(),
            }
        }
    }
}

/// dataset → site filter → payload filter → projection.
pub fn scatter_chart(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let title = match site {
        SiteSelection::All => "Success count on Payload mass for all sites".to_string(),
        SiteSelection::Site(name) => format!("Success count on Payload mass for site {name}"),
    };
    let by_site = filter_by_site(&dataset.records, site);
    let in_range = filter_by_payload(by_site, range);
    ScatterChart {
        title,
        points: project(in_range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success, "v1"),
            LaunchRecord::new("A", 1500.0, Outcome::Failure, "v1"),
            LaunchRecord::new("B", 3000.0, Outcome::Success, "v2"),
        ])
    }

    #[test]
    fn test_three_row_scenario() {
        let ds = dataset();
        let site_a = SiteSelection::Site("A".into());

        let filtered = filter_by_site(&ds.records, &site_a);
        assert_eq!(filtered.len(), 2);

        let counts = outcome_counts(filtered);
        assert_eq!(counts, vec![(Outcome::Success, 1), (Outcome::Failure, 1)]);

        let light = filter_by_payload(&ds.records, PayloadRange::new(0.0, 1000.0));
        assert_eq!(light, vec![&ds.records[0]]);

        let points = project(light);
        assert_eq!(
            points,
            vec![ScatterPoint {
                payload_mass_kg: 500.0,
                class: 1,
                booster_version_category: "v1".into(),
            }]
        );
    }

    #[test]
    fn test_success_counts_by_site_include_zero_sites() {
        let mut records = dataset().records;
        records.push(LaunchRecord::new("C", 100.0, Outcome::Failure, "v3"));

        let counts = success_counts_by_site(&records);
        assert_eq!(
            counts,
            vec![("A".to_string(), 1), ("B".to_string(), 1), ("C".to_string(), 0)]
        );
    }

    #[test]
    fn test_pie_all_sites_sums_to_total_successes() {
        let ds = dataset();
        let pie = pie_chart(&ds, &SiteSelection::All);

        let successes = ds.records.iter().filter(|r| r.outcome.is_success()).count();
        assert_eq!(pie.total(), successes);
        assert_eq!(pie.title, "Success Count for all launch sites");
        assert_eq!(pie.slices[0], PieSlice { label: "A".into(), value: 1 });
    }

    #[test]
    fn test_pie_single_site_sums_to_filtered_len() {
        let ds = dataset();
        let site = SiteSelection::Site("A".into());
        let pie = pie_chart(&ds, &site);

        assert_eq!(pie.total(), filter_by_site(&ds.records, &site).len());
        assert_eq!(pie.title, "Total Success Launches for site A");
        let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "0"]);
    }

    #[test]
    fn test_pie_unknown_site_is_empty() {
        let pie = pie_chart(&dataset(), &SiteSelection::Site("Z".into()));
        assert!(pie.slices.is_empty());
        assert_eq!(pie.total(), 0);
    }

    #[test]
    fn test_scatter_combines_site_and_payload() {
        let ds = dataset();
        let chart = scatter_chart(
            &ds,
            &SiteSelection::Site("A".into()),
            PayloadRange::new(1000.0, 5000.0),
        );
        assert_eq!(chart.title, "Success count on Payload mass for site A");
        assert_eq!(chart.points.len(), 1);
        assert_eq!(chart.points[0].payload_mass_kg, 1500.0);
        assert_eq!(chart.points[0].class, 0);
    }

    #[test]
    fn test_scatter_series_grouped_by_booster() {
        let ds = dataset();
        let chart = scatter_chart(&ds, &SiteSelection::All, PayloadRange::full(&ds));
        let series = chart.series();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].0, "v1");
        assert_eq!(series[0].1, vec![[500.0, 1.0], [1500.0, 0.0]]);
        assert_eq!(series[1], ("v2", vec![[3000.0, 1.0]]));
    }

    #[test]
    fn test_empty_dataset_yields_empty_charts() {
        let ds = LaunchDataset::default();
        assert!(pie_chart(&ds, &SiteSelection::All).slices.is_empty());
        assert!(pie_chart(&ds, &SiteSelection::Site("A".into())).slices.is_empty());
        let scatter = scatter_chart(&ds, &SiteSelection::All, PayloadRange::full(&ds));
        assert!(scatter.points.is_empty());
        assert!(project(&ds.records).is_empty());
    }
}
