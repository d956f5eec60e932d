mod animation_driver;
mod chart;
mod chart_config;
mod data_controller;
mod invalidation;
mod render_frame_builder;
mod snapshot;

pub use chart::BarChart;
pub use chart_config::BarChartConfig;
pub use invalidation::{InvalidationLevel, RecomputeStats};
pub use snapshot::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1};
