use tracing::{debug, trace};

use crate::core::{DataEntry, TextMeasurer, TitleMetrics, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Renderer};

use super::{BarChart, InvalidationLevel};

impl<R: Renderer, M: TextMeasurer> BarChart<R, M> {
    /// Appends one bar whose border shares the fill color.
    pub fn add(&mut self, name: impl Into<String>, value: i64, fill_color: Color) -> ChartResult<()> {
        self.add_with_border(name, value, fill_color, fill_color)
    }

    /// Appends one bar and recomputes scale and layout.
    pub fn add_with_border(
        &mut self,
        name: impl Into<String>,
        value: i64,
        fill_color: Color,
        border_color: Color,
    ) -> ChartResult<()> {
        fill_color.validate()?;
        border_color.validate()?;
        self.series
            .add(DataEntry::new(name, value, fill_color).with_border_color(border_color));
        trace!(count = self.series.len(), value, "append bar entry");
        self.invalidate(InvalidationLevel::Scale);
        Ok(())
    }

    pub fn set_entry_value(&mut self, index: usize, value: i64) -> ChartResult<()> {
        self.entry_mut(index)?.value = value;
        trace!(index, value, "update bar value");
        self.invalidate(InvalidationLevel::Scale);
        Ok(())
    }

    pub fn set_entry_name(&mut self, index: usize, name: impl Into<String>) -> ChartResult<()> {
        self.entry_mut(index)?.name = name.into();
        self.invalidate(InvalidationLevel::Scale);
        Ok(())
    }

    /// Colors do not affect geometry, so only a redraw is requested.
    pub fn set_entry_colors(
        &mut self,
        index: usize,
        fill_color: Color,
        border_color: Color,
    ) -> ChartResult<()> {
        fill_color.validate()?;
        border_color.validate()?;
        let entry = self.entry_mut(index)?;
        entry.fill_color = fill_color;
        entry.border_color = border_color;
        self.pending = self.pending.max(InvalidationLevel::Bars);
        Ok(())
    }

    /// Sets or clears the vertical Y-axis title.
    ///
    /// An empty or `None` title removes the title column entirely.
    pub fn set_y_axis_title(&mut self, title: Option<&str>) {
        self.y_axis_title = title.filter(|text| !text.is_empty()).map(|text| {
            let extent = self.measurer.measure(text, self.config.title_font());
            TitleMetrics {
                text: text.to_owned(),
                width: extent.width,
                height: extent.height,
            }
        });
        debug!(
            has_title = self.y_axis_title.is_some(),
            "y-axis title updated"
        );
        self.invalidate(InvalidationLevel::Layout);
    }

    /// Applies a new surface size.
    ///
    /// Zero-sized surfaces are accepted; they lay out degenerate geometry and
    /// render nothing until a real size arrives.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.config.viewport {
            return;
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            "surface resized"
        );
        self.config.viewport = viewport;
        self.invalidate(InvalidationLevel::Scale);
    }

    fn entry_mut(&mut self, index: usize) -> ChartResult<&mut DataEntry> {
        let len = self.series.len();
        self.series
            .get_mut(index)
            .ok_or(ChartError::EntryIndexOutOfRange { index, len })
    }
}
