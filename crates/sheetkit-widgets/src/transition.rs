#![forbid(unsafe_code)]

//! Visibility transition controller for the sheet.
//!
//! Drives the two visual properties the caller's visibility flag controls:
//! the sheet's base offset (viewport height = hidden, 0 = fully shown) and
//! the backdrop opacity. Opening uses a spring for the slide and a linear
//! fade for the backdrop; the programmatic close is time-bounded so its
//! duration is deterministic for the caller.
//!
//! # State Machine
//!
//! `Closed → Opening → Open → Closing → Closed`, with rapid toggles
//! allowed to jump between `Opening` and `Closing` at any point. Every
//! (re)start reads the live cell values, so an interrupted transition
//! resumes from where the sheet is on screen.
//!
//! # Invariants
//!
//! 1. The base offset and backdrop are each driven by at most one
//!    animation ([`AnimatedValue`] enforces this).
//! 2. The phase only reaches `Open`/`Closed` once both cells settle.
//! 3. Backdrop writes during an active drag go through
//!    [`set_backdrop_opacity`](SheetTransition::set_backdrop_opacity) and
//!    displace any in-flight fade.

use std::time::Duration;

use sheetkit_core::animation::{AnimatedValue, Easing, SpringParams};

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Lifecycle phase of the sheet's visibility transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetPhase {
    /// Fully hidden; nothing should be rendered.
    #[default]
    Closed,
    /// Sliding in.
    Opening,
    /// Fully shown at the resting position.
    Open,
    /// Sliding out after a programmatic close.
    Closing,
}

impl SheetPhase {
    /// Whether the sheet should be rendered at all.
    #[inline]
    #[must_use]
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Whether a transition is in flight.
    #[inline]
    #[must_use]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Timing and spring tuning for visibility transitions.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionConfig {
    /// Spring for the entrance slide.
    pub open_spring: SpringParams,
    /// Backdrop fade-in duration on open (default: 280ms).
    pub backdrop_fade_in: Duration,
    /// Backdrop fade-out duration on close or dismissal (default: 220ms).
    pub backdrop_fade_out: Duration,
    /// Slide-out duration for the programmatic close (default: 260ms).
    pub close_duration: Duration,
    /// Backdrop fade-in duration when a released drag snaps back
    /// (default: 180ms).
    pub snapback_fade_in: Duration,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            open_spring: SpringParams::SHEET_OPEN,
            backdrop_fade_in: Duration::from_millis(280),
            backdrop_fade_out: Duration::from_millis(220),
            close_duration: Duration::from_millis(260),
            snapback_fade_in: Duration::from_millis(180),
        }
    }
}

impl TransitionConfig {
    /// Set the entrance spring.
    #[must_use]
    pub fn open_spring(mut self, params: SpringParams) -> Self {
        self.open_spring = params;
        self
    }

    /// Set the programmatic close duration.
    #[must_use]
    pub fn close_duration(mut self, duration: Duration) -> Self {
        self.close_duration = duration;
        self
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Drives base offset and backdrop opacity from the caller's visibility flag.
#[derive(Debug, Clone)]
pub struct SheetTransition {
    config: TransitionConfig,
    phase: SheetPhase,
    viewport_height: f64,
    /// Base vertical offset in px: 0 = resting, viewport height = hidden.
    offset: AnimatedValue,
    /// Backdrop opacity in [0, 1].
    backdrop: AnimatedValue,
}

impl SheetTransition {
    /// Create a closed transition for the given viewport height.
    #[must_use]
    pub fn new(viewport_height: f64, config: TransitionConfig) -> Self {
        debug_assert!(viewport_height > 0.0, "viewport height must be positive");
        Self {
            config,
            phase: SheetPhase::Closed,
            viewport_height,
            offset: AnimatedValue::resting(viewport_height),
            backdrop: AnimatedValue::resting(0.0),
        }
    }

    /// Current phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    /// Live base offset in pixels.
    #[inline]
    #[must_use]
    pub fn offset_px(&self) -> f64 {
        self.offset.value()
    }

    /// Live backdrop opacity in [0, 1].
    #[inline]
    #[must_use]
    pub fn backdrop_opacity(&self) -> f64 {
        self.backdrop.value().clamp(0.0, 1.0)
    }

    /// Viewport height used as the hidden offset.
    #[inline]
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Update the viewport height (e.g. rotation). A closed sheet snaps its
    /// resting offset to the new height; an in-flight close retargets.
    pub fn set_viewport_height(&mut self, height: f64) {
        debug_assert!(height > 0.0, "viewport height must be positive");
        self.viewport_height = height;
        match self.phase {
            SheetPhase::Closed => self.offset.set(height),
            SheetPhase::Closing => {
                self.offset
                    .timed_to(height, self.config.close_duration, Easing::EaseInOut);
            }
            SheetPhase::Opening | SheetPhase::Open => {}
        }
    }

    /// Begin the open transition. No-op if already open or opening.
    ///
    /// Both drives start from the live cell values, so a close interrupted
    /// mid-flight reverses smoothly.
    pub fn open(&mut self) {
        if matches!(self.phase, SheetPhase::Open | SheetPhase::Opening) {
            return;
        }
        self.phase = SheetPhase::Opening;
        self.offset.spring_to(0.0, self.config.open_spring);
        self.backdrop
            .timed_to(1.0, self.config.backdrop_fade_in, Easing::Linear);
    }

    /// Begin the programmatic close. No-op if already closed or closing.
    pub fn close(&mut self) {
        if matches!(self.phase, SheetPhase::Closed | SheetPhase::Closing) {
            return;
        }
        self.phase = SheetPhase::Closing;
        self.offset.timed_to(
            self.viewport_height,
            self.config.close_duration,
            Easing::EaseInOut,
        );
        self.backdrop
            .timed_to(0.0, self.config.backdrop_fade_out, Easing::Linear);
    }

    /// Fade the backdrop out for a drag-release dismissal. The base offset
    /// is untouched; the drag cell carries the slide.
    pub fn dismiss_fade_out(&mut self) {
        self.backdrop
            .timed_to(0.0, self.config.backdrop_fade_out, Easing::Linear);
    }

    /// Restore the backdrop after a snapback.
    pub fn snapback_fade_in(&mut self) {
        self.backdrop
            .timed_to(1.0, self.config.snapback_fade_in, Easing::Linear);
    }

    /// Write the backdrop directly from gesture progress, displacing any
    /// in-flight fade. Clamped to [0, 1].
    pub fn set_backdrop_opacity(&mut self, opacity: f64) {
        self.backdrop.set(opacity.clamp(0.0, 1.0));
    }

    /// Jump to fully closed (used when a drag dismissal completes).
    pub fn force_closed(&mut self) {
        self.phase = SheetPhase::Closed;
        self.offset.set(self.viewport_height);
        self.backdrop.set(0.0);
    }

    /// Whether both cells have settled.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.offset.is_settled() && self.backdrop.is_settled()
    }

    /// Advance in-flight transitions. Returns `true` if the phase changed
    /// (Opening → Open or Closing → Closed).
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.offset.tick(dt);
        self.backdrop.tick(dt);

        match self.phase {
            SheetPhase::Opening if self.is_settled() => {
                self.phase = SheetPhase::Open;
                true
            }
            SheetPhase::Closing if self.is_settled() => {
                self.phase = SheetPhase::Closed;
                true
            }
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
