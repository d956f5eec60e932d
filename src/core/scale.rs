use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::data_series::DataSeries;
use crate::core::text::{FontSpec, TextMeasurer};

/// Fewest ticks worth drawing. Smaller surfaces get no Y-axis labels at all.
pub const MIN_RENDERABLE_TICK_COUNT: usize = 3;

/// Sample used to derive the label line height from digit glyph bounds.
pub const LINE_HEIGHT_SAMPLE: &str = "888";

pub type TickValues = SmallVec<[i64; 16]>;

/// Y-axis domain, tick values and the label extents reserved around the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    pub min: i64,
    pub max: i64,
    pub tick_values: TickValues,
    pub max_y_label_width: f64,
    pub max_category_label_width: f64,
    pub label_line_height: f64,
}

impl AxisScale {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: 0,
            max: 0,
            tick_values: TickValues::new(),
            max_y_label_width: 0.0,
            max_category_label_width: 0.0,
            label_line_height: 0.0,
        }
    }

    #[must_use]
    pub fn has_ticks(&self) -> bool {
        self.tick_values.len() >= MIN_RENDERABLE_TICK_COUNT
    }

    pub fn tick_labels(&self) -> impl Iterator<Item = String> + '_ {
        self.tick_values.iter().map(i64::to_string)
    }
}

impl Default for AxisScale {
    fn default() -> Self {
        Self::empty()
    }
}

/// Number of ticks that fit vertically, two line heights per tick.
///
/// Returns zero for non-positive line heights and non-finite inputs.
#[must_use]
pub fn max_tick_count(
    available_height: f64,
    label_line_height: f64,
    x_axis_reserved_height: f64,
) -> usize {
    if !label_line_height.is_finite() || label_line_height <= 0.0 {
        return 0;
    }
    let raw = ((available_height - x_axis_reserved_height) / (2.0 * label_line_height) - 1.0).floor();
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    raw as usize
}

/// Builds `count` ticks: `min`, then `min + i * step`, with `max` forced last.
///
/// `step` is the floored integer step, so the last interval can be wider than
/// the others. Fewer than three requested ticks yields none.
#[must_use]
pub fn tick_values(min: i64, max: i64, count: usize) -> TickValues {
    if count < MIN_RENDERABLE_TICK_COUNT || max < min {
        return TickValues::new();
    }

    let intervals = (count - 1) as i128;
    let step = (i128::from(max) - i128::from(min)) / intervals;
    let mut ticks = TickValues::with_capacity(count);
    ticks.push(min);
    for i in 1..count - 1 {
        // Bounded by `max`, so the narrowing cast cannot wrap.
        ticks.push((i128::from(min) + i as i128 * step) as i64);
    }
    ticks.push(max);
    ticks
}

/// Derives [`AxisScale`] values from a series and the surface height.
///
/// Holds no state beyond the measurer and the label font.
#[derive(Debug, Clone, Copy)]
pub struct ScaleComputer<'a, M: TextMeasurer + ?Sized> {
    measurer: &'a M,
    label_font: FontSpec,
}

impl<'a, M: TextMeasurer + ?Sized> ScaleComputer<'a, M> {
    #[must_use]
    pub fn new(measurer: &'a M, label_font: FontSpec) -> Self {
        Self {
            measurer,
            label_font,
        }
    }

    #[must_use]
    pub fn label_line_height(&self) -> f64 {
        self.measurer
            .text_height(LINE_HEIGHT_SAMPLE, self.label_font)
    }

    /// Width of the category label with the most characters.
    ///
    /// Selection is by character count and the first such entry wins, so a
    /// shorter name with wider glyphs is not considered.
    #[must_use]
    pub fn max_category_label_width(&self, series: &DataSeries) -> f64 {
        let mut longest: Option<(usize, &str)> = None;
        for entry in series {
            let chars = entry.name.chars().count();
            if longest.is_none_or(|(best, _)| chars > best) {
                longest = Some((chars, entry.name.as_str()));
            }
        }
        longest.map_or(0.0, |(_, name)| {
            self.measurer.text_width(name, self.label_font)
        })
    }

    /// Computes the scale for an explicit line height and reserved X-axis height.
    #[must_use]
    pub fn compute(
        &self,
        series: &DataSeries,
        available_height: f64,
        label_line_height: f64,
        x_axis_reserved_height: f64,
    ) -> AxisScale {
        let category_width = self.max_category_label_width(series);
        self.compute_with_category_width(
            series,
            available_height,
            label_line_height,
            x_axis_reserved_height,
            category_width,
        )
    }

    /// Computes the scale for a surface, reserving the widest category label
    /// plus `reserved_below_labels` (top label padding and bottom padding).
    #[must_use]
    pub fn compute_for_surface(
        &self,
        series: &DataSeries,
        available_height: f64,
        reserved_below_labels: f64,
    ) -> AxisScale {
        let category_width = self.max_category_label_width(series);
        self.compute_with_category_width(
            series,
            available_height,
            self.label_line_height(),
            category_width + reserved_below_labels,
            category_width,
        )
    }

    fn compute_with_category_width(
        &self,
        series: &DataSeries,
        available_height: f64,
        label_line_height: f64,
        x_axis_reserved_height: f64,
        category_width: f64,
    ) -> AxisScale {
        let Some((min, max)) = series.value_range() else {
            return AxisScale::empty();
        };

        let max_y_label_width = self
            .measurer
            .text_width(&min.to_string(), self.label_font)
            .max(self.measurer.text_width(&max.to_string(), self.label_font));

        let count = max_tick_count(available_height, label_line_height, x_axis_reserved_height);
        let ticks = if count < MIN_RENDERABLE_TICK_COUNT {
            debug!(
                count,
                available_height, "surface too small for y-axis ticks; skipping labels"
            );
            TickValues::new()
        } else {
            tick_values(min, max, count)
        };

        debug!(
            entries = series.len(),
            min,
            max,
            ticks = ticks.len(),
            "computed axis scale"
        );

        AxisScale {
            min,
            max,
            tick_values: ticks,
            max_y_label_width,
            max_category_label_width: category_width,
            label_line_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_count_uses_two_line_heights_per_tick() {
        assert_eq!(max_tick_count(478.0, 35.0, 0.0), 5);
        assert_eq!(max_tick_count(500.0, 35.0, 22.0), 5);
    }

    #[test]
    fn tick_count_is_zero_for_degenerate_inputs() {
        assert_eq!(max_tick_count(10.0, 35.0, 0.0), 0);
        assert_eq!(max_tick_count(500.0, 0.0, 0.0), 0);
        assert_eq!(max_tick_count(f64::NAN, 10.0, 0.0), 0);
    }

    #[test]
    fn uneven_final_step_is_preserved() {
        assert_eq!(tick_values(0, 10, 4).as_slice(), &[0, 3, 6, 10]);
    }

    #[test]
    fn fewer_than_three_ticks_yields_none() {
        assert!(tick_values(0, 100, 2).is_empty());
    }

    #[test]
    fn extreme_domain_does_not_overflow() {
        let ticks = tick_values(i64::MIN, i64::MAX, 3);
        assert_eq!(ticks.first(), Some(&i64::MIN));
        assert_eq!(ticks.last(), Some(&i64::MAX));
        assert!(ticks.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
