//! Checked-state flip animation
//!
//! The widget squeezes horizontally to nothing, flips its logical checked
//! state, then grows back. The animation only drives a horizontal scale; the
//! checked flag itself changes at exactly one point, when the squeeze
//! completes, so a transition can be cancelled without leaving the widget
//! half-flipped.

use std::time::{Duration, Instant};

/// Duration of each half (squeeze and grow)
pub const HALF_DURATION: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    /// Squeezing towards zero width; `target` is applied when it completes
    AnimatingOut {
        target: bool,
        from: f32,
        started: Instant,
    },
    /// Growing back to full width with the new state visible
    AnimatingIn { from: f32, started: Instant },
}

/// State machine driving the flip, advanced by host frame ticks
#[derive(Debug, Clone)]
pub struct CheckTransition {
    phase: Phase,
    half_duration: Duration,
}

impl Default for CheckTransition {
    fn default() -> Self {
        Self::new(HALF_DURATION)
    }
}

/// Decelerating ease, fast start and gentle landing
fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}

impl CheckTransition {
    pub fn new(half_duration: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            half_duration,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// The state the widget will settle in, given its current logical state
    pub fn settled_state(&self, current: bool) -> bool {
        match self.phase {
            Phase::AnimatingOut { target, .. } => target,
            _ => current,
        }
    }

    fn fraction(&self, started: Instant, now: Instant) -> f32 {
        if self.half_duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started).as_secs_f32();
        (elapsed / self.half_duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Horizontal scale to apply about the widget center
    pub fn scale_x(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Idle => 1.0,
            Phase::AnimatingOut { from, started, .. } => {
                from * (1.0 - ease_out(self.fraction(started, now)))
            }
            Phase::AnimatingIn { from, started } => {
                from + (1.0 - from) * ease_out(self.fraction(started, now))
            }
        }
    }

    /// Ask for the widget to end up in `target` while it currently shows `current`.
    /// Returns whether the phase changed.
    pub fn request(&mut self, current: bool, target: bool, now: Instant) -> bool {
        let scale = self.scale_x(now);
        let before = self.phase;
        self.phase = match self.phase {
            Phase::Idle if target == current => Phase::Idle,
            Phase::Idle => Phase::AnimatingOut {
                target,
                from: 1.0,
                started: now,
            },
            Phase::AnimatingOut { target: pending, .. } if pending == target => self.phase,
            // Pending flip abandoned before it happened: grow back unchanged
            Phase::AnimatingOut { .. } => Phase::AnimatingIn {
                from: scale,
                started: now,
            },
            Phase::AnimatingIn { .. } if target == current => self.phase,
            Phase::AnimatingIn { .. } => Phase::AnimatingOut {
                target,
                from: scale,
                started: now,
            },
        };
        self.phase != before
    }

    /// Advance to `now`. Returns the new logical state when the flip point was crossed.
    pub fn tick(&mut self, now: Instant) -> Option<bool> {
        let mut flipped = None;

        if let Phase::AnimatingOut {
            target, started, ..
        } = self.phase
        {
            if self.fraction(started, now) >= 1.0 {
                flipped = Some(target);
                self.phase = Phase::AnimatingIn {
                    from: 0.0,
                    started: started + self.half_duration,
                };
            }
        }

        if let Phase::AnimatingIn { started, .. } = self.phase {
            if self.fraction(started, now) >= 1.0 {
                self.phase = Phase::Idle;
            }
        }

        flipped
    }

    /// Stop immediately. Returns the pending state if the flip had not happened yet.
    pub fn cancel(&mut self) -> Option<bool> {
        let pending = match self.phase {
            Phase::AnimatingOut { target, .. } => Some(target),
            _ => None,
        };
        self.phase = Phase::Idle;
        pending
    }
}
