#![forbid(unsafe_code)]

//! Tick-driven animation primitives.
//!
//! Everything here advances by explicit [`Duration`] deltas supplied by the
//! host's frame callback; there is no internal clock and no thread. That
//! keeps the motion layer deterministic: the same sequence of ticks always
//! produces the same sequence of values.
//!
//! Three building blocks:
//!
//! - [`Spring`]: damped harmonic oscillator for physical motion (sheet
//!   entrance, snapback).
//! - [`Timed`]: fixed-duration eased interpolation for deterministic
//!   transitions (backdrop fades, programmatic close).
//! - [`AnimatedValue`]: a single numeric cell that is either at rest or
//!   driven by exactly one of the above. Retargeting an in-flight cell
//!   always resumes from its current live value, never a stale target.

use std::time::Duration;

pub mod spring;
pub mod timed;
pub mod value;

pub use spring::{Spring, SpringParams};
pub use timed::{Easing, Timed};
pub use value::AnimatedValue;

/// A value that evolves over time when ticked.
///
/// Implementors advance internal state in [`tick`](Animation::tick) and
/// report a normalized progress in [`value`](Animation::value). A complete
/// animation must hold its final value on further ticks.
pub trait Animation {
    /// Advance by `dt`. Ticking a complete animation is a no-op.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its terminal state.
    fn is_complete(&self) -> bool;

    /// Normalized progress in `[0.0, 1.0]`.
    fn value(&self) -> f32;

    /// Return to the initial state.
    fn reset(&mut self);
}
