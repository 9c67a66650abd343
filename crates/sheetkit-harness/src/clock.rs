#![forbid(unsafe_code)]

//! Fixed-step test clock.
//!
//! Scenarios advance time explicitly, one frame at a time, so a failing
//! sequence replays identically on every run. The default step is 16ms
//! (roughly 60fps); dropped-frame scenarios use a larger step.

use std::time::Duration;

use web_time::Instant;

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct FrameClock {
    now: Instant,
    step: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(16))
    }
}

impl FrameClock {
    /// Create a clock with the given frame step.
    #[must_use]
    pub fn new(step: Duration) -> Self {
        Self {
            now: Instant::now(),
            step,
        }
    }

    /// Current instant. Stable between advances.
    #[inline]
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// The configured frame step.
    #[inline]
    #[must_use]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Advance one frame and return the new instant.
    pub fn advance(&mut self) -> Instant {
        self.now += self.step;
        self.now
    }

    /// Advance by an arbitrary duration (dropped frames, long holds).
    pub fn advance_by(&mut self, dt: Duration) -> Instant {
        self.now += dt;
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_fixed_step() {
        let mut clock = FrameClock::new(Duration::from_millis(16));
        let start = clock.now();
        clock.advance();
        clock.advance();
        assert_eq!(clock.now().duration_since(start), Duration::from_millis(32));
    }

    #[test]
    fn now_is_stable_between_advances() {
        let clock = FrameClock::default();
        assert_eq!(clock.now(), clock.now());
    }
}
