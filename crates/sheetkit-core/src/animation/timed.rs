#![forbid(unsafe_code)]

//! Fixed-duration eased interpolation.
//!
//! [`Timed`] drives a value from `from` to `to` over an exact wall-clock
//! duration, which makes it the right primitive wherever a deterministic
//! finish time is required: backdrop fades and the programmatic close
//! slide. Springs are for motion that may be interrupted by the user;
//! `Timed` is for motion the caller must be able to schedule around.
//!
//! # Invariants
//!
//! 1. `position()` equals `from` at elapsed 0 and exactly `to` once
//!    elapsed ≥ duration (no easing overshoot is used here).
//! 2. A complete interpolation holds `to` on further ticks.
//!
//! # Failure Modes
//!
//! - Zero duration: completes on the first tick, emitting `to` immediately.

use std::time::Duration;

use super::Animation;

/// Easing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Straight interpolation. Used for backdrop fades.
    Linear,
    /// Accelerating cubic. Good for exits.
    EaseIn,
    /// Decelerating cubic. Good for entrances.
    EaseOut,
    /// Cubic S-curve. Default for general transitions.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the curve to a progress value clamped to [0.0, 1.0].
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// A value interpolated from `from` to `to` over a fixed duration.
#[derive(Debug, Clone)]
pub struct Timed {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Timed {
    /// Create an interpolation from `from` to `to` over `duration`.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Current interpolated position.
    #[must_use]
    pub fn position(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Terminal value.
    #[inline]
    #[must_use]
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Configured duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Animation for Timed {
    fn tick(&mut self, dt: Duration) {
        if self.is_complete() {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);
    const MS_220: Duration = Duration::from_millis(220);

    #[test]
    fn linear_midpoint() {
        let mut t = Timed::new(0.0, 1.0, Duration::from_millis(200), Easing::Linear);
        t.tick(MS_100);
        assert!((t.position() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn completes_at_exact_duration() {
        let mut t = Timed::new(1.0, 0.0, MS_220, Easing::Linear);
        t.tick(MS_220);
        assert!(t.is_complete());
        assert!((t.position() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn holds_terminal_value_after_completion() {
        let mut t = Timed::new(0.0, 640.0, MS_100, Easing::EaseInOut);
        t.tick(Duration::from_secs(10));
        assert!(t.is_complete());
        t.tick(MS_100);
        assert!((t.position() - 640.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut t = Timed::new(0.0, 1.0, Duration::ZERO, Easing::Linear);
        assert!(t.is_complete());
        t.tick(Duration::from_nanos(1));
        assert!((t.position() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ease_out_leads_linear() {
        // Decelerating curve covers more ground in the first half.
        let mut eased = Timed::new(0.0, 1.0, MS_220, Easing::EaseOut);
        let mut linear = Timed::new(0.0, 1.0, MS_220, Easing::Linear);
        eased.tick(MS_100);
        linear.tick(MS_100);
        assert!(eased.position() > linear.position());
    }

    #[test]
    fn ease_in_out_endpoints() {
        assert!((Easing::EaseInOut.apply(0.0) - 0.0).abs() < f64::EPSILON);
        assert!((Easing::EaseInOut.apply(1.0) - 1.0).abs() < f64::EPSILON);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn easing_clamps_out_of_range_input() {
        assert!((Easing::EaseIn.apply(-1.0) - 0.0).abs() < f64::EPSILON);
        assert!((Easing::EaseIn.apply(2.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reset_rewinds_elapsed() {
        let mut t = Timed::new(0.0, 1.0, MS_220, Easing::Linear);
        t.tick(MS_100);
        t.reset();
        assert!((t.position() - 0.0).abs() < f64::EPSILON);
        assert!(!t.is_complete());
    }

    #[test]
    fn descending_interpolation() {
        let mut t = Timed::new(1.0, 0.0, Duration::from_millis(200), Easing::Linear);
        t.tick(MS_100);
        assert!((t.position() - 0.5).abs() < 1e-9);
    }
}
