/// Data layer: core types, loading, and chart-data aggregation.
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
///   │ LaunchDataset │  Vec<LaunchRecord>, site/booster index
///   └──────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  site selection + payload interval → pie slices, scatter points
///   └───────────┘
/// ```

pub mod aggregate;
pub mod loader;
pub mod model;
