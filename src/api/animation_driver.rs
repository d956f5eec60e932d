use std::time::Duration;

use tracing::{debug, trace};

use crate::animation::{AnimationFrame, AnimationGeneration, FrameScheduler};
use crate::core::TextMeasurer;
use crate::render::Renderer;

use super::{BarChart, InvalidationLevel};

impl<R: Renderer, M: TextMeasurer> BarChart<R, M> {
    /// Grows every bar from zero to its value, starting at `now`.
    ///
    /// Supersedes any running animation; frame callbacks still queued for the
    /// previous run become no-ops.
    pub fn animate_graph<S>(&mut self, now: Duration, scheduler: &mut S) -> AnimationGeneration
    where
        S: FrameScheduler + ?Sized,
    {
        let superseded = self.animation.is_running();
        let generation = self.animation.start(now);
        debug!(
            generation = generation.0,
            superseded,
            duration_ms = self.config.animation_duration_ms,
            "bar animation started"
        );
        self.invalidate(InvalidationLevel::Bars);
        scheduler.request_frame(generation);
        generation
    }

    /// Frame-clock callback for a run started by [`Self::animate_graph`].
    ///
    /// Only bar rectangles are recomputed; the scale is never touched here.
    pub fn on_frame<S>(
        &mut self,
        generation: AnimationGeneration,
        now: Duration,
        scheduler: &mut S,
    ) -> AnimationFrame
    where
        S: FrameScheduler + ?Sized,
    {
        let frame = self.animation.on_frame(generation, now);
        match frame {
            AnimationFrame::Advanced { fraction, finished } => {
                trace!(generation = generation.0, fraction, finished, "animation frame");
                self.invalidate(InvalidationLevel::Bars);
                if !finished {
                    scheduler.request_frame(generation);
                }
            }
            AnimationFrame::Stale => {
                trace!(generation = generation.0, "ignoring stale animation frame");
            }
            AnimationFrame::Idle => {}
        }
        frame
    }

    /// Sets the growth fraction directly, clamped to `[0, 1]`.
    pub fn set_current_fraction(&mut self, fraction: f64) {
        self.animation.set_fraction(fraction);
        self.invalidate(InvalidationLevel::Bars);
    }
}
