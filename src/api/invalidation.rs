use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{LayoutEngine, ScaleComputer, TextMeasurer};
use crate::render::Renderer;

use super::BarChart;

/// Ordered recompute levels. Each level implies every level below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    /// Only bar rectangles changed (animation frames).
    Bars,
    /// Static geometry changed but the scale did not (title changes).
    Layout,
    /// Data or surface height changed; ticks and label widths are stale.
    Scale,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

/// Counters of recompute passes, useful to assert that animation frames stay
/// on the cheap path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecomputeStats {
    pub scale_passes: u64,
    pub layout_passes: u64,
    pub bar_passes: u64,
    pub frames_rendered: u64,
}

impl<R: Renderer, M: TextMeasurer> BarChart<R, M> {
    pub(super) fn invalidate(&mut self, level: InvalidationLevel) {
        if level >= InvalidationLevel::Scale {
            self.recompute_scale();
        }
        if level >= InvalidationLevel::Layout {
            self.recompute_layout();
        }
        if level >= InvalidationLevel::Bars {
            self.recompute_bars();
        }
        self.pending = self.pending.max(level);
    }

    fn recompute_scale(&mut self) {
        let computer = ScaleComputer::new(&self.measurer, self.config.label_font());
        self.scale = computer.compute_for_surface(
            &self.series,
            self.config.viewport.height_px(),
            self.config.reserved_below_labels(),
        );
        self.stats.scale_passes += 1;
    }

    fn recompute_layout(&mut self) {
        self.layout = LayoutEngine::layout(
            &self.series,
            &self.scale,
            self.config.viewport,
            &self.config.layout_config(),
            self.y_axis_title.as_ref(),
        );
        self.stats.layout_passes += 1;
    }

    fn recompute_bars(&mut self) {
        self.bars = self.layout.bars_at(self.animation.current_fraction());
        self.stats.bar_passes += 1;
        trace!(
            bars = self.bars.len(),
            fraction = self.animation.current_fraction(),
            "recomputed bar geometry"
        );
    }
}
