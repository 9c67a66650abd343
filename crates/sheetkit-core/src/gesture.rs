#![forbid(unsafe_code)]

//! Vertical drag recognition: transforms raw pointer events into drag events.
//!
//! [`VerticalDragRecognizer`] is a stateful processor that converts a raw
//! pointer stream (down, move, up, cancel) into high-level [`DragEvent`]s
//! for a downward drag gesture.
//!
//! # State Machine
//!
//! Pointer-down arms the recognizer; it stays *pending* until the pointer's
//! cumulative downward movement exceeds the activation distance AND the
//! vertical delta magnitude exceeds the horizontal one. Both conditions
//! must hold on the same sample, so a horizontal swipe through the
//! activation zone never starts a drag. Once started, every move emits
//! `DragEvent::Move` with the clamped downward delta and the tracked
//! velocity; pointer-up emits `DragEvent::End` with the release values.
//!
//! # Invariants
//!
//! 1. Emitted deltas are always ≥ 0 (an upward drag clamps to the rest
//!    position, it never produces a negative offset).
//! 2. `Start` is emitted at most once per pointer-down.
//! 3. `End` and `Cancel` are mutually exclusive for one gesture, and both
//!    return the recognizer to idle.
//! 4. Velocity is reported in px/ms, positive downward, measured over the
//!    configured trailing window.
//!
//! # Failure Modes
//!
//! - A release with fewer than two samples in the window reports zero
//!   velocity (distance alone can still dismiss).
//! - A release after a stationary hold reports zero velocity: samples
//!   older than the window relative to the release instant are stale and
//!   do not count, even when no move events arrived during the hold.
//! - A move without a prior down is ignored (stale events after cancel).

use std::collections::VecDeque;
use std::time::Duration;

use web_time::Instant;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds for drag recognition.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragConfig {
    /// Cumulative downward movement (px) before a drag starts (default: 4).
    pub activation_distance: f64,
    /// Trailing window over which release velocity is measured
    /// (default: 100ms).
    pub velocity_window: Duration,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: 4.0,
            velocity_window: Duration::from_millis(100),
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// A pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPoint {
    pub x: f64,
    pub y: f64,
}

impl PointerPoint {
    /// Create a point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A raw pointer event from the host platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer made contact.
    Down(PointerPoint),
    /// Pointer moved while down.
    Move(PointerPoint),
    /// Pointer released.
    Up(PointerPoint),
    /// Gesture taken over or aborted by the platform.
    Cancel,
}

/// A recognized drag event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Activation thresholds were met; a drag is now in progress.
    Start,
    /// Drag sample: clamped downward delta (px) and velocity (px/ms).
    Move { delta: f64, velocity: f64 },
    /// Pointer released: final delta (px) and release velocity (px/ms).
    End { delta: f64, velocity: f64 },
    /// Drag aborted without a release decision.
    Cancel,
}

/// Receiver for recognized drag events.
///
/// The widget layer implements this; [`drive`] dispatches a batch of
/// recognized events into it.
pub trait DragListener {
    /// A drag crossed the activation threshold.
    fn on_start(&mut self);
    /// A drag sample: clamped downward delta (px), velocity (px/ms).
    fn on_move(&mut self, delta: f64, velocity: f64);
    /// The pointer was released: final delta (px), velocity (px/ms).
    fn on_end(&mut self, delta: f64, velocity: f64);
    /// The gesture was aborted by the platform.
    fn on_cancel(&mut self) {}
}

/// Dispatch recognized events into a listener.
pub fn drive<L: DragListener>(events: &[DragEvent], listener: &mut L) {
    for event in events {
        match *event {
            DragEvent::Start => listener.on_start(),
            DragEvent::Move { delta, velocity } => listener.on_move(delta, velocity),
            DragEvent::End { delta, velocity } => listener.on_end(delta, velocity),
            DragEvent::Cancel => listener.on_cancel(),
        }
    }
}

// ---------------------------------------------------------------------------
// Recognizer
// ---------------------------------------------------------------------------

/// Tracks an armed or active drag.
#[derive(Debug, Clone)]
struct DragTracker {
    origin: PointerPoint,
    started: bool,
    /// Recent (downward delta, timestamp) samples for velocity tracking.
    samples: VecDeque<(f64, Instant)>,
}

/// Stateful recognizer that turns raw pointer events into drag events.
///
/// Call [`process`](VerticalDragRecognizer::process) for each incoming
/// pointer event with the host-supplied timestamp.
#[derive(Debug, Clone)]
pub struct VerticalDragRecognizer {
    config: DragConfig,
    tracker: Option<DragTracker>,
}

impl VerticalDragRecognizer {
    /// Create a recognizer with the given configuration.
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            tracker: None,
        }
    }

    /// Whether a drag is currently in progress (activation crossed).
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracker.as_ref().is_some_and(|t| t.started)
    }

    /// Current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Reset to idle without emitting anything.
    pub fn reset(&mut self) {
        self.tracker = None;
    }

    /// Process a raw pointer event, returning any drag events produced.
    pub fn process(&mut self, event: &PointerEvent, now: Instant) -> Vec<DragEvent> {
        let mut out = Vec::with_capacity(2);

        match *event {
            PointerEvent::Down(point) => {
                let mut samples = VecDeque::with_capacity(8);
                samples.push_back((0.0, now));
                self.tracker = Some(DragTracker {
                    origin: point,
                    started: false,
                    samples,
                });
            }
            PointerEvent::Move(point) => {
                let Some(ref mut tracker) = self.tracker else {
                    return out;
                };

                let dx = point.x - tracker.origin.x;
                let dy = point.y - tracker.origin.y;

                if !tracker.started {
                    // Activation: past the distance threshold AND
                    // predominantly vertical.
                    if dy > self.config.activation_distance && dy.abs() > dx.abs() {
                        tracker.started = true;
                        out.push(DragEvent::Start);
                    }
                }

                if tracker.started {
                    let delta = dy.max(0.0);
                    tracker.samples.push_back((delta, now));
                    prune_window(&mut tracker.samples, now, self.config.velocity_window);
                    let velocity = window_velocity(&tracker.samples);
                    out.push(DragEvent::Move { delta, velocity });
                }
            }
            PointerEvent::Up(point) => {
                let Some(tracker) = self.tracker.take() else {
                    return out;
                };
                if tracker.started {
                    let delta = (point.y - tracker.origin.y).max(0.0);
                    let velocity =
                        release_velocity(&tracker.samples, now, self.config.velocity_window);
                    out.push(DragEvent::End { delta, velocity });
                }
                // A release before activation is a tap; the host decides
                // what taps mean per region.
            }
            PointerEvent::Cancel => {
                if let Some(tracker) = self.tracker.take()
                    && tracker.started
                {
                    out.push(DragEvent::Cancel);
                }
            }
        }

        out
    }
}

/// Drop samples older than the trailing window, keeping at least the
/// newest two so a velocity is always computable mid-gesture.
fn prune_window(samples: &mut VecDeque<(f64, Instant)>, now: Instant, window: Duration) {
    while samples.len() > 2 {
        let Some(&(_, t)) = samples.front() else {
            return;
        };
        if now.duration_since(t) > window {
            samples.pop_front();
        } else {
            return;
        }
    }
}

/// Velocity at release, in px/ms, measured only over samples still inside
/// the trailing window relative to the release instant.
///
/// The mid-gesture deque keeps the newest two samples alive regardless of
/// age so a velocity is always computable while moving; at release that
/// rule would resurrect pre-hold motion. Platforms deliver no move events
/// while a finger rests, so a release whose newest sample predates the
/// window is a stationary release and reports zero.
fn release_velocity(samples: &VecDeque<(f64, Instant)>, now: Instant, window: Duration) -> f64 {
    let mut first: Option<(f64, Instant)> = None;
    let mut last: Option<(f64, Instant)> = None;
    for &(delta, t) in samples {
        if now.duration_since(t) > window {
            continue;
        }
        if first.is_none() {
            first = Some((delta, t));
        }
        last = Some((delta, t));
    }
    let (Some((first_delta, first_t)), Some((last_delta, last_t))) = (first, last) else {
        return 0.0;
    };
    let span_ms = last_t.duration_since(first_t).as_secs_f64() * 1000.0;
    if span_ms <= 0.0 {
        return 0.0;
    }
    (last_delta - first_delta) / span_ms
}

/// Velocity in px/ms over the retained sample window. Positive downward.
fn window_velocity(samples: &VecDeque<(f64, Instant)>) -> f64 {
    let (Some(&(first_delta, first_t)), Some(&(last_delta, last_t))) =
        (samples.front(), samples.back())
    else {
        return 0.0;
    };
    let span_ms = last_t.duration_since(first_t).as_secs_f64() * 1000.0;
    if span_ms <= 0.0 {
        return 0.0;
    }
    (last_delta - first_delta) / span_ms
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
