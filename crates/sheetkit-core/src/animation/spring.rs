#![forbid(unsafe_code)]

//! Damped harmonic oscillator for physically-based sheet motion.
//!
//! The spring integrates the classical equation
//!
//!   m·a = -stiffness × (position - target) - damping × velocity
//!
//! with semi-implicit Euler steps. Positions are in pixels, velocities in
//! pixels/second; the host supplies wall-clock deltas per frame.
//!
//! # Invariants
//!
//! 1. A spring at rest (`is_at_rest() == true`) holds its target exactly
//!    and does not resume until retargeted.
//! 2. `retarget()` preserves the live position and velocity, so an
//!    interrupted spring continues from where it is, never from where it
//!    was originally headed.
//! 3. Stiffness and mass are clamped to positive minimums on construction.
//!
//! # Failure Modes
//!
//! - Large dt (dropped frames): subdivided into ≤4ms steps so high
//!   stiffness values stay numerically stable.
//! - Zero damping: oscillates forever; `is_at_rest()` may never be true.

use std::time::Duration;

use super::Animation;

/// Maximum dt per integration step. Larger deltas are subdivided.
const MAX_STEP_SECS: f64 = 0.004;

/// Position delta (px) below which the spring can come to rest.
const REST_DISTANCE_PX: f64 = 0.05;

/// Velocity magnitude (px/s) below which the spring can come to rest.
const REST_VELOCITY_PX_S: f64 = 0.5;

const MIN_STIFFNESS: f64 = 0.1;
const MIN_MASS: f64 = 0.01;

/// Spring tuning: stiffness, damping, and mass.
///
/// The two presets match the motion constants of the sheet: a soft spring
/// for the entrance slide and a tighter one for snapback after a released
/// drag.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringParams {
    /// Restoring force strength (higher = faster response).
    pub stiffness: f64,
    /// Velocity drag (higher = less oscillation).
    pub damping: f64,
    /// Inertia (higher = slower to accelerate and to stop).
    pub mass: f64,
}

impl SpringParams {
    /// Entrance slide: gentle, slightly underdamped.
    pub const SHEET_OPEN: Self = Self {
        stiffness: 220.0,
        damping: 24.0,
        mass: 0.8,
    };

    /// Snapback after a released drag: tighter and lighter.
    pub const SNAPBACK: Self = Self {
        stiffness: 260.0,
        damping: 20.0,
        mass: 0.6,
    };

    /// Create params, clamping stiffness and mass to positive minimums and
    /// damping to ≥ 0.
    #[must_use]
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness: stiffness.max(MIN_STIFFNESS),
            damping: damping.max(0.0),
            mass: mass.max(MIN_MASS),
        }
    }

    /// The damping coefficient at which this spring converges as fast as
    /// possible without oscillating.
    #[must_use]
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::SHEET_OPEN
    }
}

/// A damped spring interpolating a pixel position toward a target.
#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    initial: f64,
    params: SpringParams,
    at_rest: bool,
}

impl Spring {
    /// Create a spring starting at `initial` px and heading to `target` px.
    #[must_use]
    pub fn new(initial: f64, target: f64, params: SpringParams) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target,
            initial,
            params: SpringParams::new(params.stiffness, params.damping, params.mass),
            at_rest: false,
        }
    }

    /// Current position in pixels.
    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current velocity in pixels/second.
    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Current target in pixels.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Spring tuning.
    #[inline]
    #[must_use]
    pub fn params(&self) -> SpringParams {
        self.params
    }

    /// Whether the spring has settled at the target.
    #[inline]
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Change the target, keeping the live position and velocity.
    ///
    /// Wakes the spring if it was at rest and the new target differs.
    pub fn retarget(&mut self, target: f64) {
        if (self.target - target).abs() > REST_DISTANCE_PX {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Inject velocity (px/s), e.g. to carry momentum from a gesture.
    /// Wakes the spring.
    pub fn add_velocity(&mut self, delta: f64) {
        self.velocity += delta;
        self.at_rest = false;
    }

    fn step(&mut self, dt: f64) {
        // Semi-implicit Euler: acceleration from current position, then
        // velocity, then position from the new velocity.
        let displacement = self.position - self.target;
        let spring_force = -self.params.stiffness * displacement;
        let damping_force = -self.params.damping * self.velocity;
        let acceleration = (spring_force + damping_force) / self.params.mass;

        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Advance the spring by `dt`, subdividing for stability.
    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }

        let total_secs = dt.as_secs_f64();
        if total_secs <= 0.0 {
            return;
        }

        let mut remaining = total_secs;
        while remaining > 0.0 {
            let step_dt = remaining.min(MAX_STEP_SECS);
            self.step(step_dt);
            remaining -= step_dt;
        }

        if (self.position - self.target).abs() < REST_DISTANCE_PX
            && self.velocity.abs() < REST_VELOCITY_PX_S
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

impl Animation for Spring {
    fn tick(&mut self, dt: Duration) {
        self.advance(dt);
    }

    fn is_complete(&self) -> bool {
        self.at_rest
    }

    /// Progress from initial toward target, clamped to [0.0, 1.0].
    ///
    /// For raw pixel positions use [`position()`](Spring::position).
    fn value(&self) -> f32 {
        let span = self.target - self.initial;
        if span.abs() < f64::EPSILON {
            return 1.0;
        }
        let t = (self.position - self.initial) / span;
        (t as f32).clamp(0.0, 1.0)
    }

    fn reset(&mut self) {
        self.position = self.initial;
        self.velocity = 0.0;
        self.at_rest = false;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MS_16: Duration = Duration::from_millis(16);

    fn simulate(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.tick(MS_16);
        }
    }

    #[test]
    fn reaches_target() {
        let mut spring = Spring::new(800.0, 0.0, SpringParams::SHEET_OPEN);
        simulate(&mut spring, 300);
        assert!(
            spring.position().abs() < 0.1,
            "position: {}",
            spring.position()
        );
        assert!(spring.is_complete());
    }

    #[test]
    fn starts_at_initial() {
        let spring = Spring::new(800.0, 0.0, SpringParams::default());
        assert!((spring.position() - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn retarget_keeps_live_position() {
        let mut spring = Spring::new(0.0, 100.0, SpringParams::default());
        simulate(&mut spring, 5);
        let live = spring.position();
        assert!(live > 0.0 && live < 100.0);

        spring.retarget(0.0);
        assert!(
            (spring.position() - live).abs() < f64::EPSILON,
            "retarget must not snap the position"
        );
    }

    #[test]
    fn retarget_wakes_resting_spring() {
        let mut spring = Spring::new(0.0, 100.0, SpringParams::default());
        simulate(&mut spring, 400);
        assert!(spring.is_complete());

        spring.retarget(200.0);
        assert!(!spring.is_complete());
    }

    #[test]
    fn retarget_same_value_stays_at_rest() {
        let mut spring = Spring::new(0.0, 100.0, SpringParams::default());
        simulate(&mut spring, 400);
        assert!(spring.is_complete());

        spring.retarget(100.0);
        assert!(spring.is_complete());
    }

    #[test]
    fn at_rest_holds_exact_target() {
        let mut spring = Spring::new(640.0, 0.0, SpringParams::SNAPBACK);
        simulate(&mut spring, 400);
        assert!(spring.is_complete());
        assert!((spring.position() - 0.0).abs() < f64::EPSILON);

        spring.tick(MS_16);
        assert!((spring.position() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn large_dt_subdivided() {
        let mut spring = Spring::new(800.0, 0.0, SpringParams::SHEET_OPEN);
        spring.tick(Duration::from_secs(5));
        assert!(
            spring.position().abs() < 0.1,
            "position: {}",
            spring.position()
        );
    }

    #[test]
    fn zero_dt_noop() {
        let mut spring = Spring::new(800.0, 0.0, SpringParams::default());
        spring.tick(Duration::ZERO);
        assert!((spring.position() - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn heavier_mass_moves_slower() {
        let light = SpringParams::new(220.0, 24.0, 0.5);
        let heavy = SpringParams::new(220.0, 24.0, 2.0);
        let mut a = Spring::new(800.0, 0.0, light);
        let mut b = Spring::new(800.0, 0.0, heavy);

        for _ in 0..10 {
            a.tick(MS_16);
            b.tick(MS_16);
        }
        assert!(
            a.position() < b.position(),
            "light spring should lead (light: {}, heavy: {})",
            a.position(),
            b.position()
        );
    }

    #[test]
    fn params_clamped() {
        let p = SpringParams::new(0.0, -5.0, 0.0);
        assert!(p.stiffness >= MIN_STIFFNESS);
        assert!(p.damping >= 0.0);
        assert!(p.mass >= MIN_MASS);
    }

    #[test]
    fn critical_damping_accounts_for_mass() {
        let p = SpringParams::new(100.0, 0.0, 4.0);
        assert!((p.critical_damping() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn add_velocity_wakes_and_moves() {
        let mut spring = Spring::new(0.0, 0.0, SpringParams::default());
        simulate(&mut spring, 50);
        assert!(spring.is_complete());

        spring.add_velocity(500.0);
        assert!(!spring.is_complete());
        spring.tick(MS_16);
        assert!(spring.position() > 0.0);
    }

    #[test]
    fn snapback_preset_overshoots_slightly() {
        // SNAPBACK is underdamped; it should pass the target at least once.
        let mut spring = Spring::new(200.0, 0.0, SpringParams::SNAPBACK);
        let mut min_pos = f64::MAX;
        for _ in 0..400 {
            spring.tick(MS_16);
            min_pos = min_pos.min(spring.position());
        }
        assert!(min_pos < 0.0, "expected overshoot, min was {min_pos}");
        assert!(spring.is_complete());
    }

    #[test]
    fn value_is_normalized_progress() {
        let mut spring = Spring::new(800.0, 0.0, SpringParams::SHEET_OPEN);
        assert!((spring.value() - 0.0).abs() < f32::EPSILON);
        simulate(&mut spring, 400);
        assert!((spring.value() - 1.0).abs() < 0.01);
    }

    #[test]
    fn reset_restores_initial() {
        let mut spring = Spring::new(800.0, 0.0, SpringParams::default());
        simulate(&mut spring, 100);
        spring.reset();
        assert!((spring.position() - 800.0).abs() < f64::EPSILON);
        assert!((spring.velocity() - 0.0).abs() < f64::EPSILON);
        assert!(!spring.is_complete());
    }

    #[test]
    fn deterministic_across_runs() {
        let run = || {
            let mut spring = Spring::new(640.0, 0.0, SpringParams::SHEET_OPEN);
            let mut positions = Vec::new();
            for _ in 0..60 {
                spring.tick(MS_16);
                positions.push(spring.position());
            }
            positions
        };
        assert_eq!(run(), run());
    }
}
