use tracing::debug;

use crate::animation::{AnimationController, AnimationState};
use crate::core::{
    AxisScale, BarGeometry, ChartLayout, DataSeries, LayoutEngine, TextMeasurer, TitleMetrics,
    Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{BarChartConfig, InvalidationLevel, RecomputeStats};

/// Animated bar chart widget.
///
/// Owns the series, the derived scale and layout, the animation state and the
/// renderer. Everything runs on the thread that owns the value; hosts drive it
/// with mutations, resizes and frame callbacks.
pub struct BarChart<R: Renderer, M: TextMeasurer> {
    pub(super) renderer: R,
    pub(super) measurer: M,
    pub(super) config: BarChartConfig,
    pub(super) series: DataSeries,
    pub(super) y_axis_title: Option<TitleMetrics>,
    pub(super) scale: AxisScale,
    pub(super) layout: ChartLayout,
    pub(super) bars: Vec<BarGeometry>,
    pub(super) animation: AnimationController,
    pub(super) pending: InvalidationLevel,
    pub(super) stats: RecomputeStats,
}

impl<R: Renderer, M: TextMeasurer> BarChart<R, M> {
    pub fn new(renderer: R, measurer: M, config: BarChartConfig) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        let config = config.sanitized()?;
        let scale = AxisScale::empty();
        let layout = LayoutEngine::layout(
            &DataSeries::new(),
            &scale,
            config.viewport,
            &config.layout_config(),
            None,
        );
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            duration_ms = config.animation_duration_ms,
            "bar chart created"
        );

        Ok(Self {
            renderer,
            measurer,
            animation: AnimationController::new(config.animation_duration(), config.easing),
            config,
            series: DataSeries::new(),
            y_axis_title: None,
            scale,
            layout,
            bars: Vec::new(),
            pending: InvalidationLevel::Scale,
            stats: RecomputeStats::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn series(&self) -> &DataSeries {
        &self.series
    }

    #[must_use]
    pub fn scale(&self) -> &AxisScale {
        &self.scale
    }

    #[must_use]
    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Bar rectangles at the current growth fraction.
    #[must_use]
    pub fn bars(&self) -> &[BarGeometry] {
        &self.bars
    }

    #[must_use]
    pub fn y_axis_title(&self) -> Option<&str> {
        self.y_axis_title.as_ref().map(|title| title.text.as_str())
    }

    #[must_use]
    pub fn current_fraction(&self) -> f64 {
        self.animation.current_fraction()
    }

    #[must_use]
    pub fn animation_state(&self) -> AnimationState {
        self.animation.state()
    }

    /// Highest invalidation level requested since the last render.
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationLevel {
        self.pending
    }

    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.pending != InvalidationLevel::None
    }

    #[must_use]
    pub fn recompute_stats(&self) -> RecomputeStats {
        self.stats
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Builds the frame and hands it to the renderer.
    ///
    /// A zero-sized surface is skipped without drawing.
    pub fn render(&mut self) -> ChartResult<()> {
        if !self.config.viewport.is_valid() {
            debug!(
                width = self.config.viewport.width,
                height = self.config.viewport.height,
                "skipping render for empty surface"
            );
            self.pending = InvalidationLevel::None;
            return Ok(());
        }
        let frame = self.build_render_frame();
        self.renderer.render(&frame)?;
        self.stats.frames_rendered += 1;
        self.pending = InvalidationLevel::None;
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
