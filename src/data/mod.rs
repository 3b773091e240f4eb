/// Data layer: launch records, loading, filtering and chart aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, site / booster index
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site selection, payload range → &LaunchRecord subsequence
///   └──────────┘
///        │
///        ├────────────────────┐
///        ▼                    ▼
///   ┌───────────┐      ┌────────────┐
///   │ aggregate  │      │ aggregate   │
///   │ pie_chart  │      │ scatter     │
///   └───────────┘      └────────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
