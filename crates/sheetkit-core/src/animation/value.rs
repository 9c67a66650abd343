#![forbid(unsafe_code)]

//! A single animated numeric cell.
//!
//! [`AnimatedValue`] holds one f64 (a pixel offset, an opacity) that is
//! either at rest or driven by exactly one animation. This is the
//! enforcement point for the "no two animations target the same visual
//! property" rule: installing a new driver replaces the old one, and a
//! direct [`set`](AnimatedValue::set) replaces any driver outright, which
//! is how gesture input takes precedence over a concurrently ticking frame.
//!
//! Retargeting reads the cell's live value first, so interrupted motion
//! resumes from where it is on screen, never from a stale endpoint.
//!
//! # Invariants
//!
//! 1. At most one driver at a time.
//! 2. `spring_to`/`timed_to` start from the current live value.
//! 3. Once a driver completes the cell collapses to rest at the driver's
//!    target; `value()` is then exact.

use std::time::Duration;

use super::spring::{Spring, SpringParams};
use super::timed::{Easing, Timed};
use super::Animation;

#[derive(Debug, Clone)]
enum Driver {
    Rest(f64),
    Spring(Spring),
    Timed(Timed),
}

/// One numeric cell, at rest or driven by a single animation.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    driver: Driver,
}

impl AnimatedValue {
    /// Create a cell at rest at `value`.
    #[must_use]
    pub fn resting(value: f64) -> Self {
        Self {
            driver: Driver::Rest(value),
        }
    }

    /// Current live value.
    #[must_use]
    pub fn value(&self) -> f64 {
        match &self.driver {
            Driver::Rest(v) => *v,
            Driver::Spring(s) => s.position(),
            Driver::Timed(t) => t.position(),
        }
    }

    /// The value this cell is heading toward (its own value when at rest).
    #[must_use]
    pub fn target(&self) -> f64 {
        match &self.driver {
            Driver::Rest(v) => *v,
            Driver::Spring(s) => s.target(),
            Driver::Timed(t) => t.to(),
        }
    }

    /// Whether the cell is at rest (no in-flight animation).
    #[must_use]
    pub fn is_settled(&self) -> bool {
        match &self.driver {
            Driver::Rest(_) => true,
            Driver::Spring(s) => s.is_at_rest(),
            Driver::Timed(t) => t.is_complete(),
        }
    }

    /// Write the cell directly, halting any in-flight animation.
    ///
    /// This is the gesture-input path: a pointer-move write always wins
    /// over a concurrently ticking driver.
    pub fn set(&mut self, value: f64) {
        self.driver = Driver::Rest(value);
    }

    /// Halt any in-flight animation, freezing the cell at its live value.
    pub fn halt(&mut self) {
        let live = self.value();
        self.driver = Driver::Rest(live);
    }

    /// Drive the cell to `target` on a spring, starting from the live value.
    pub fn spring_to(&mut self, target: f64, params: SpringParams) {
        let live = self.value();
        self.driver = Driver::Spring(Spring::new(live, target, params));
    }

    /// Drive the cell to `target` over a fixed duration, starting from the
    /// live value.
    pub fn timed_to(&mut self, target: f64, duration: Duration, easing: Easing) {
        let live = self.value();
        self.driver = Driver::Timed(Timed::new(live, target, duration, easing));
    }

    /// Advance any in-flight animation. Collapses to rest on completion so
    /// the terminal value is held exactly.
    pub fn tick(&mut self, dt: Duration) {
        match &mut self.driver {
            Driver::Rest(_) => {}
            Driver::Spring(s) => {
                s.tick(dt);
                if s.is_at_rest() {
                    self.driver = Driver::Rest(s.target());
                }
            }
            Driver::Timed(t) => {
                t.tick(dt);
                if t.is_complete() {
                    self.driver = Driver::Rest(t.to());
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
