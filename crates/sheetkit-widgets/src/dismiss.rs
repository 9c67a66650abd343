#![forbid(unsafe_code)]

//! Drag-to-dismiss state machine.
//!
//! Owns the drag offset cell: the extra downward displacement a gesture adds
//! on top of the transition's base offset. While a finger is down the cell
//! tracks the pointer directly; on release it is handed to an animation,
//! either a timed slide off screen (dismiss) or a spring back to zero
//! (snapback). The two-signal release rule matches what users read as a
//! fling: a long enough pull dismisses even when released slowly, and a
//! fast flick dismisses even from a short pull.
//!
//! # Invariants
//!
//! 1. The drag offset is never negative (upward drags are clamped upstream,
//!    and release targets are 0 or the viewport height).
//! 2. One release per drag: `release` transitions out of `Dragging` exactly
//!    once, and completion is reported exactly once per slide-out.
//! 3. Gesture accounting is cleared at release, not at animation end; the
//!    next drag starts fresh even if it lands mid-animation.

use std::time::Duration;

use sheetkit_core::animation::{AnimatedValue, Easing, SpringParams};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds and motion tuning for the release decision.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct DismissConfig {
    /// Drag distance past which a release dismisses, in px (default: 120).
    pub distance_threshold: f64,
    /// Downward release velocity past which a release dismisses, in px/ms
    /// (default: 0.5).
    pub velocity_threshold: f64,
    /// Duration of the dismissal slide off screen (default: 260ms).
    pub slide_out_duration: Duration,
    /// Spring returning the sheet to rest after a sub-threshold release.
    pub snapback_spring: SpringParams,
}

impl Default for DismissConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 120.0,
            velocity_threshold: 0.5,
            slide_out_duration: Duration::from_millis(260),
            snapback_spring: SpringParams::SNAPBACK,
        }
    }
}

impl DismissConfig {
    /// Set the distance threshold in px.
    #[must_use]
    pub fn distance_threshold(mut self, px: f64) -> Self {
        self.distance_threshold = px;
        self
    }

    /// Set the velocity threshold in px/ms.
    #[must_use]
    pub fn velocity_threshold(mut self, px_per_ms: f64) -> Self {
        self.velocity_threshold = px_per_ms;
        self
    }

    /// Set the snapback spring.
    #[must_use]
    pub fn snapback_spring(mut self, params: SpringParams) -> Self {
        self.snapback_spring = params;
        self
    }
}

// ---------------------------------------------------------------------------
// Release decision
// ---------------------------------------------------------------------------

/// What a released drag resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Past a threshold: slide off screen and close.
    Dismiss,
    /// Under both thresholds: spring back to rest.
    Snapback,
}

impl ReleaseOutcome {
    /// Apply the two-signal rule: dismiss when the drag offset exceeds the
    /// distance threshold or the release velocity exceeds the velocity
    /// threshold. Either signal alone suffices.
    #[must_use]
    pub fn decide(offset_px: f64, velocity_px_ms: f64, config: &DismissConfig) -> Self {
        if offset_px > config.distance_threshold || velocity_px_ms > config.velocity_threshold {
            Self::Dismiss
        } else {
            Self::Snapback
        }
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragPhase {
    #[default]
    Idle,
    Dragging,
    SlidingOut,
    SnappingBack,
}

/// Drag offset owner: tracks the pointer while down, animates on release.
#[derive(Debug)]
pub struct DragDismiss {
    config: DismissConfig,
    phase: DragPhase,
    /// Extra downward displacement in px, summed with the base offset.
    drag: AnimatedValue,
    /// Live drag value at gesture start; pointer deltas add to this.
    baseline: f64,
}

impl DragDismiss {
    /// Create an idle drag with zero offset.
    #[must_use]
    pub fn new(config: DismissConfig) -> Self {
        Self {
            config,
            phase: DragPhase::Idle,
            drag: AnimatedValue::resting(0.0),
            baseline: 0.0,
        }
    }

    /// Live drag offset in px.
    #[inline]
    #[must_use]
    pub fn offset_px(&self) -> f64 {
        self.drag.value()
    }

    /// Whether a finger is currently down.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Whether the dismissal slide is in flight.
    #[inline]
    #[must_use]
    pub fn is_sliding_out(&self) -> bool {
        self.phase == DragPhase::SlidingOut
    }

    /// Start a drag. Halts any in-flight release animation and captures the
    /// live value as the baseline, so grabbing a snapping-back sheet picks
    /// it up where it is.
    pub fn begin(&mut self) {
        self.drag.halt();
        self.baseline = self.drag.value();
        self.phase = DragPhase::Dragging;
    }

    /// Apply a pointer-move delta (already clamped to ≥ 0 by the
    /// recognizer). Returns the resulting drag offset.
    pub fn update(&mut self, delta_px: f64) -> f64 {
        if self.phase != DragPhase::Dragging {
            return self.drag.value();
        }
        let offset = (self.baseline + delta_px).max(0.0);
        self.drag.set(offset);
        offset
    }

    /// Resolve a release at the given velocity. Installs the matching
    /// animation and returns the decision.
    pub fn release(&mut self, velocity_px_ms: f64, viewport_height: f64) -> ReleaseOutcome {
        let outcome = ReleaseOutcome::decide(self.drag.value(), velocity_px_ms, &self.config);
        self.baseline = 0.0;
        match outcome {
            ReleaseOutcome::Dismiss => {
                self.drag.timed_to(
                    viewport_height,
                    self.config.slide_out_duration,
                    Easing::EaseInOut,
                );
                self.phase = DragPhase::SlidingOut;
            }
            ReleaseOutcome::Snapback => {
                self.drag.spring_to(0.0, self.config.snapback_spring);
                self.phase = DragPhase::SnappingBack;
            }
        }
        outcome
    }

    /// Begin the dismissal slide without a drag (backdrop tap). No-op if a
    /// slide is already in flight.
    pub fn slide_out(&mut self, viewport_height: f64) {
        if self.phase == DragPhase::SlidingOut {
            return;
        }
        self.baseline = 0.0;
        self.drag.timed_to(
            viewport_height,
            self.config.slide_out_duration,
            Easing::EaseInOut,
        );
        self.phase = DragPhase::SlidingOut;
    }

    /// Abort an active drag (pointer cancel). Snaps back as a sub-threshold
    /// release would.
    pub fn cancel(&mut self) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        self.baseline = 0.0;
        self.drag.spring_to(0.0, self.config.snapback_spring);
        self.phase = DragPhase::SnappingBack;
    }

    /// Zero the drag offset and return to idle (sheet reopened or closed
    /// programmatically).
    pub fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.baseline = 0.0;
        self.drag.set(0.0);
    }

    /// Advance any release animation. Returns `true` exactly once, on the
    /// tick where the dismissal slide completes.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.drag.tick(dt);
        match self.phase {
            DragPhase::SlidingOut if self.drag.is_settled() => {
                self.phase = DragPhase::Idle;
                true
            }
            DragPhase::SnappingBack if self.drag.is_settled() => {
                self.phase = DragPhase::Idle;
                false
            }
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
