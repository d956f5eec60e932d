//! bar-chart-rs: layout, scaling and animation engine for an animated bar chart.
//!
//! Scale and layout are pure functions of the series, the surface size and the
//! configuration. Rendering, font metrics and the frame clock are supplied by
//! the host through the [`render::Renderer`], [`core::TextMeasurer`] and
//! [`animation::FrameScheduler`] traits.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BarChart, BarChartConfig};
pub use error::{ChartError, ChartResult};
