pub mod data_series;
pub mod layout;
pub mod scale;
pub mod text;
pub mod types;

pub use data_series::{DataEntry, DataSeries};
pub use layout::{
    AxisSegment, BarGeometry, BarSlot, CATEGORY_LABEL_ROTATION_DEG, CategoryLabel, ChartLayout,
    LayoutConfig, LayoutEngine, TickLabel, TitleMetrics, ValueMapping, Y_AXIS_TITLE_ROTATION_DEG,
    YAxisTitle,
};
pub use scale::{
    AxisScale, MIN_RENDERABLE_TICK_COUNT, ScaleComputer, TickValues, max_tick_count, tick_values,
};
pub use text::{FontSpec, FontWeight, HeuristicTextMeasurer, TextExtent, TextMeasurer};
pub use types::{Padding, Point, Rect, Viewport};
