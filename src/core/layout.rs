//! Pixel geometry for the bar chart.
//!
//! [`LayoutEngine::layout`] produces a [`ChartLayout`] that only changes when
//! the data, the surface or the configuration change. Animation frames call
//! [`ChartLayout::bars_at`], which re-derives the bar rectangles for the
//! current growth fraction from that cached layout.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::data_series::DataSeries;
use crate::core::scale::AxisScale;
use crate::core::types::{Padding, Point, Rect, Viewport};

/// Rotation applied to every category label.
pub const CATEGORY_LABEL_ROTATION_DEG: f64 = -45.0;

/// Rotation of the Y-axis title, which reads bottom to top.
pub const Y_AXIS_TITLE_ROTATION_DEG: f64 = -90.0;

/// Spacing and stroke inputs for layout, all in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub padding: Padding,
    pub x_axis_label_top_padding: f64,
    pub y_axis_label_right_padding: f64,
    pub y_axis_title_padding: f64,
    pub axis_stroke_width: f64,
    pub bar_padding: f64,
    pub border_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: Padding::default(),
            x_axis_label_top_padding: 0.0,
            y_axis_label_right_padding: 0.0,
            y_axis_title_padding: 0.0,
            axis_stroke_width: 1.0,
            bar_padding: 0.0,
            border_width: 0.0,
        }
    }
}

/// Measured Y-axis title. `height` becomes the width of the title column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleMetrics {
    pub text: String,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSegment {
    pub start: Point,
    pub end: Point,
}

/// Horizontal extent reserved for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSlot {
    pub index: usize,
    pub left: f64,
    pub right: f64,
    pub value: i64,
}

impl BarSlot {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLabel {
    pub index: usize,
    pub text: String,
    pub anchor: Point,
    pub rotation_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLabel {
    pub value: i64,
    pub text: String,
    pub anchor: Point,
}

/// Vertical title laid along the path from `path_start` up to `path_end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxisTitle {
    pub text: String,
    pub path_start: Point,
    pub path_end: Point,
    pub offset_along_path: f64,
    /// Baseline start of the text once placed on the path.
    pub anchor: Point,
    pub rotation_deg: f64,
}

/// Maps data values to y pixels over `[min, top]`, where `y(top) == 0` and
/// `y(min) == baseline`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueMapping {
    pub baseline: f64,
    pub min: f64,
    pub top: f64,
}

impl ValueMapping {
    /// Returns `None` when the domain or the baseline is degenerate.
    #[must_use]
    pub fn new(baseline: f64, scale: &AxisScale) -> Option<Self> {
        let min = scale.min as f64;
        let top = scale.max.max(0) as f64;
        if !baseline.is_finite() || baseline <= 0.0 || top <= min {
            return None;
        }
        Some(Self { baseline, min, top })
    }

    #[must_use]
    pub fn y_for(self, value: f64) -> f64 {
        self.baseline * (1.0 - (value - self.min) / (self.top - self.min))
    }

    #[must_use]
    pub fn zero_y(self) -> f64 {
        self.y_for(0.0)
    }
}

/// Border and fill rectangles of one bar at a given growth fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub border: Rect,
    pub fill: Rect,
}

/// Frame-independent chart geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub y_axis_x: f64,
    pub x_axis_y: f64,
    pub baseline: f64,
    pub y_axis: AxisSegment,
    pub x_axis: AxisSegment,
    pub slot_width: f64,
    pub slots: Vec<BarSlot>,
    pub category_labels: Vec<CategoryLabel>,
    pub tick_labels: Vec<TickLabel>,
    pub y_axis_title: Option<YAxisTitle>,
    pub value_mapping: Option<ValueMapping>,
    pub border_width: f64,
}

impl ChartLayout {
    /// Bar rectangles for `fraction` of each target value.
    ///
    /// Bars whose slot has no width, or every bar when the value mapping is
    /// degenerate, are skipped.
    #[must_use]
    pub fn bars_at(&self, fraction: f64) -> Vec<BarGeometry> {
        let Some(mapping) = self.value_mapping else {
            return Vec::new();
        };
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };

        self.slots
            .iter()
            .filter(|slot| slot.width() > 0.0)
            .map(|slot| bar_geometry(*slot, mapping, fraction, self.border_width))
            .collect()
    }
}

fn bar_geometry(slot: BarSlot, mapping: ValueMapping, fraction: f64, border_width: f64) -> BarGeometry {
    let zero_y = mapping.zero_y();
    let value_y = mapping.y_for(slot.value as f64 * fraction);
    let grows_up = value_y <= zero_y;
    let (top, bottom) = if grows_up {
        (value_y, zero_y)
    } else {
        (zero_y, value_y)
    };
    let border = Rect::new(slot.left, top, slot.right, bottom);

    let mut fill_left = slot.left + border_width;
    let mut fill_right = slot.right - border_width;
    if fill_left > fill_right {
        let center = border.center_x();
        fill_left = center;
        fill_right = center;
    }
    // The edge touching the zero line is shared with the border rectangle.
    let fill = if grows_up {
        Rect::new(fill_left, (top + border_width).min(bottom), fill_right, bottom)
    } else {
        Rect::new(fill_left, top, fill_right, (bottom - border_width).max(top))
    };

    BarGeometry {
        index: slot.index,
        border,
        fill,
    }
}

/// Stateless geometry builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine;

impl LayoutEngine {
    #[must_use]
    pub fn layout(
        series: &DataSeries,
        scale: &AxisScale,
        viewport: Viewport,
        config: &LayoutConfig,
        title: Option<&TitleMetrics>,
    ) -> ChartLayout {
        let width = viewport.width_px();
        let height = viewport.height_px();
        let padding = config.padding;
        let title_height = title.map_or(0.0, |title| title.height);
        let category_width = scale.max_category_label_width;

        let y_axis_x = scale.max_y_label_width
            + config.y_axis_label_right_padding
            + padding.left
            + title_height * 2.0
            + config.y_axis_title_padding;
        let x_axis_y = height - padding.bottom - category_width - config.x_axis_label_top_padding;
        let baseline = height
            - category_width
            - config.x_axis_label_top_padding
            - config.axis_stroke_width / 2.0
            - padding.bottom;

        let y_axis = AxisSegment {
            start: Point::new(y_axis_x, 0.0),
            end: Point::new(y_axis_x, x_axis_y),
        };
        let x_axis = AxisSegment {
            start: Point::new(y_axis_x, x_axis_y),
            end: Point::new(width - padding.right, x_axis_y),
        };

        let (slot_width, slots) = bar_slots(series, y_axis_x, width, config);
        let category_labels = slots
            .iter()
            .zip(series.entries())
            .map(|(slot, entry)| CategoryLabel {
                index: slot.index,
                text: entry.name.clone(),
                anchor: Point::new(
                    y_axis_x + slot.index as f64 * slot_width + slot_width / 2.0,
                    height - padding.bottom,
                ),
                rotation_deg: CATEGORY_LABEL_ROTATION_DEG,
            })
            .collect();

        let tick_labels = tick_labels(scale, height, title_height, config);
        let y_axis_title = title
            .filter(|title| !title.text.is_empty())
            .map(|title| y_axis_title(title, x_axis_y, padding.top));

        let value_mapping = ValueMapping::new(baseline, scale);
        if value_mapping.is_none() && !series.is_empty() {
            debug!(
                baseline,
                min = scale.min,
                max = scale.max,
                "degenerate value mapping; bars skipped"
            );
        }

        ChartLayout {
            viewport,
            y_axis_x,
            x_axis_y,
            baseline,
            y_axis,
            x_axis,
            slot_width,
            slots,
            category_labels,
            tick_labels,
            y_axis_title,
            value_mapping,
            border_width: config.border_width,
        }
    }
}

fn bar_slots(
    series: &DataSeries,
    y_axis_x: f64,
    width: f64,
    config: &LayoutConfig,
) -> (f64, Vec<BarSlot>) {
    if series.is_empty() {
        return (0.0, Vec::new());
    }
    let available_width = width - y_axis_x - config.padding.right - config.bar_padding;
    if !available_width.is_finite() || available_width <= 0.0 {
        debug!(available_width, "no horizontal room for bars");
        return (0.0, Vec::new());
    }

    let slot_width = available_width / series.len() as f64;
    let slots = series
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let left = y_axis_x + index as f64 * slot_width + config.bar_padding;
            BarSlot {
                index,
                left,
                right: left + slot_width - config.bar_padding,
                value: entry.value,
            }
        })
        .collect();
    (slot_width, slots)
}

fn tick_labels(
    scale: &AxisScale,
    height: f64,
    title_height: f64,
    config: &LayoutConfig,
) -> Vec<TickLabel> {
    if !scale.has_ticks() {
        return Vec::new();
    }

    let category_width = scale.max_category_label_width;
    let count = scale.tick_values.len() as f64;
    let spacing = (height - category_width) / count;
    let x = title_height * 2.0 + config.padding.left + config.y_axis_title_padding;

    scale
        .tick_values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let y = height
                - i as f64 * spacing
                - scale.label_line_height / 2.0
                - config.x_axis_label_top_padding
                - config.padding.bottom
                - category_width;
            TickLabel {
                value: *value,
                text: value.to_string(),
                anchor: Point::new(x, y),
            }
        })
        .collect()
}

fn y_axis_title(title: &TitleMetrics, x_axis_y: f64, padding_top: f64) -> YAxisTitle {
    let path_start = Point::new(title.height, x_axis_y);
    let path_end = Point::new(title.height, padding_top);
    let offset_along_path = (x_axis_y - padding_top) / 2.0 - title.width / 2.0;
    YAxisTitle {
        text: title.text.clone(),
        path_start,
        path_end,
        offset_along_path,
        anchor: Point::new(path_start.x, path_start.y - offset_along_path),
        rotation_deg: Y_AXIS_TITLE_ROTATION_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data_series::DataEntry;
    use crate::render::Color;

    fn scale(min: i64, max: i64) -> AxisScale {
        AxisScale {
            min,
            max,
            ..AxisScale::empty()
        }
    }

    fn slot(value: i64) -> BarSlot {
        BarSlot {
            index: 0,
            left: 10.0,
            right: 30.0,
            value,
        }
    }

    #[test]
    fn value_mapping_rejects_zero_span() {
        assert!(ValueMapping::new(100.0, &scale(0, 0)).is_none());
        assert!(ValueMapping::new(0.0, &scale(0, 10)).is_none());
    }

    #[test]
    fn fill_is_inset_except_on_zero_line() {
        let mapping = ValueMapping::new(100.0, &scale(0, 100)).expect("mapping");
        let bar = bar_geometry(slot(50), mapping, 1.0, 2.0);
        assert_eq!(bar.border, Rect::new(10.0, 50.0, 30.0, 100.0));
        assert_eq!(bar.fill, Rect::new(12.0, 52.0, 28.0, 100.0));
    }

    #[test]
    fn negative_bar_grows_down_from_zero_line() {
        let mapping = ValueMapping::new(100.0, &scale(-25, 75)).expect("mapping");
        let bar = bar_geometry(slot(-25), mapping, 1.0, 2.0);
        assert_eq!(bar.border.top, 75.0);
        assert_eq!(bar.border.bottom, 100.0);
        assert_eq!(bar.fill.top, 75.0);
        assert_eq!(bar.fill.bottom, 98.0);
    }

    #[test]
    fn fill_never_inverts_for_tiny_bars() {
        let mapping = ValueMapping::new(100.0, &scale(0, 100)).expect("mapping");
        let bar = bar_geometry(slot(50), mapping, 0.0, 4.0);
        assert!(bar.fill.height() >= 0.0);
        assert_eq!(bar.fill.top, bar.fill.bottom);

        let narrow = BarSlot {
            index: 0,
            left: 10.0,
            right: 12.0,
            value: 50,
        };
        let bar = bar_geometry(narrow, mapping, 1.0, 4.0);
        assert_eq!(bar.fill.width(), 0.0);
    }

    #[test]
    fn empty_series_lays_out_axes_without_bars() {
        let layout = LayoutEngine::layout(
            &DataSeries::new(),
            &AxisScale::empty(),
            Viewport::new(300, 200),
            &LayoutConfig::default(),
            None,
        );
        assert!(layout.slots.is_empty());
        assert!(layout.bars_at(1.0).is_empty());
        assert_eq!(layout.x_axis.end.x, 300.0);
    }

    #[test]
    fn blank_title_is_not_placed() {
        let series: DataSeries = [DataEntry::new("a", 1, Color::rgb(0.0, 0.0, 0.0))]
            .into_iter()
            .collect();
        let title = TitleMetrics {
            text: String::new(),
            width: 0.0,
            height: 0.0,
        };
        let layout = LayoutEngine::layout(
            &series,
            &scale(0, 1),
            Viewport::new(300, 200),
            &LayoutConfig::default(),
            Some(&title),
        );
        assert!(layout.y_axis_title.is_none());
    }
}
