use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Factor of the default decelerating curve.
pub const DEFAULT_DECELERATE_FACTOR: f64 = 1.2;

/// Maps normalized time to a growth fraction. Every curve decelerates or is
/// linear, starts at 0 and ends at exactly 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Easing {
    /// `1 - (1 - t)^(2 * factor)`.
    Decelerate { factor: f64 },
    /// `1 - (1 - t)^3`.
    CubicOut,
    Linear,
}

impl Default for Easing {
    fn default() -> Self {
        Self::Decelerate {
            factor: DEFAULT_DECELERATE_FACTOR,
        }
    }
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let eased = match self {
            Self::Decelerate { factor } => 1.0 - (1.0 - t).powf(2.0 * factor),
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::Linear => t,
        };
        eased.clamp(0.0, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        if let Self::Decelerate { factor } = self {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(ChartError::InvalidData(
                    "decelerate factor must be finite and > 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Identifies one animation run. Frame callbacks carry the generation they
/// were requested for, so callbacks from a superseded run are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct AnimationGeneration(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationPhase {
    Idle,
    Running {
        started_at: Duration,
        generation: AnimationGeneration,
    },
}

/// Result of feeding one frame callback to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationFrame {
    /// The callback belongs to a superseded run; nothing changed.
    Stale,
    /// No animation is running; nothing changed.
    Idle,
    Advanced { fraction: f64, finished: bool },
}

impl AnimationFrame {
    /// Whether the host should schedule another frame for the same generation.
    #[must_use]
    pub fn wants_next_frame(self) -> bool {
        matches!(
            self,
            Self::Advanced {
                finished: false,
                ..
            }
        )
    }
}

/// Public animation state exposed to hosts and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub running: bool,
    pub generation: AnimationGeneration,
    pub current_fraction: f64,
    pub duration: Duration,
}

/// Idle/Running state machine driving the bar growth fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationController {
    duration: Duration,
    easing: Easing,
    phase: AnimationPhase,
    current_fraction: f64,
    generation: AnimationGeneration,
}

impl AnimationController {
    #[must_use]
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            phase: AnimationPhase::Idle,
            current_fraction: 0.0,
            generation: AnimationGeneration::default(),
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, AnimationPhase::Running { .. })
    }

    #[must_use]
    pub fn current_fraction(&self) -> f64 {
        self.current_fraction
    }

    #[must_use]
    pub fn generation(&self) -> AnimationGeneration {
        self.generation
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        AnimationState {
            running: self.is_running(),
            generation: self.generation,
            current_fraction: self.current_fraction,
            duration: self.duration,
        }
    }

    /// Starts a run at `now`, superseding any run in flight.
    pub fn start(&mut self, now: Duration) -> AnimationGeneration {
        self.generation = AnimationGeneration(self.generation.0.wrapping_add(1));
        self.current_fraction = 0.0;
        self.phase = AnimationPhase::Running {
            started_at: now,
            generation: self.generation,
        };
        self.generation
    }

    /// Advances the running animation to `now`.
    pub fn on_frame(&mut self, generation: AnimationGeneration, now: Duration) -> AnimationFrame {
        let AnimationPhase::Running {
            started_at,
            generation: running,
        } = self.phase
        else {
            return if generation == self.generation {
                AnimationFrame::Idle
            } else {
                AnimationFrame::Stale
            };
        };
        if generation != running {
            return AnimationFrame::Stale;
        }

        let elapsed = now.saturating_sub(started_at);
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        };

        let finished = t >= 1.0;
        let fraction = if finished {
            1.0
        } else {
            // Monotone even if the curve rounds down between frames.
            self.easing.apply(t).max(self.current_fraction)
        };
        self.current_fraction = fraction;
        if finished {
            self.phase = AnimationPhase::Idle;
        }
        AnimationFrame::Advanced { fraction, finished }
    }

    /// Sets the fraction directly. A running animation is superseded.
    pub fn set_fraction(&mut self, fraction: f64) {
        if self.is_running() {
            self.generation = AnimationGeneration(self.generation.0.wrapping_add(1));
        }
        self.phase = AnimationPhase::Idle;
        self.current_fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }
}

/// Host hook asked to call back on the next frame for `generation`.
pub trait FrameScheduler {
    fn request_frame(&mut self, generation: AnimationGeneration);
}

impl<F: FnMut(AnimationGeneration)> FrameScheduler for F {
    fn request_frame(&mut self, generation: AnimationGeneration) {
        self(generation);
    }
}

/// Records frame requests for hosts that pump frames themselves.
#[derive(Debug, Default)]
pub struct QueuedFrameScheduler {
    pending: VecDeque<AnimationGeneration>,
}

impl QueuedFrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn take_next(&mut self) -> Option<AnimationGeneration> {
        self.pending.pop_front()
    }
}

impl FrameScheduler for QueuedFrameScheduler {
    fn request_frame(&mut self, generation: AnimationGeneration) {
        self.pending.push_back(generation);
    }
}
