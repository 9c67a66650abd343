#![forbid(unsafe_code)]

//! The bottom sheet: host contract and coordination.
//!
//! [`BottomSheet`] wires the visibility transition, the drag-to-dismiss
//! state machine and the drag recognizer together behind a small host
//! contract:
//!
//! - the host routes pointer events, tagged with the [`SheetRegion`] they
//!   hit, into [`handle_pointer`](BottomSheet::handle_pointer);
//! - the host calls [`tick`](BottomSheet::tick) once per frame and renders
//!   the returned state via [`frame`](BottomSheet::frame);
//! - the sheet reports a user-initiated dismissal exactly once, through
//!   [`SheetEvent::Dismissed`] and the optional close callback, and the
//!   host responds by flipping its visibility flag.
//!
//! The sheet never owns the visibility flag. [`set_visible`] is the host
//! telling the sheet what the flag now says; a dismissal is the sheet
//! asking the host to change it.
//!
//! # Invariants
//!
//! 1. The rendered offset is the sum of the transition's base offset and
//!    the drag offset; each has exactly one owner.
//! 2. `SheetEvent::Dismissed` and the close callback fire at most once per
//!    open period, and never for a programmatic close.
//! 3. Pointer events on the content region are left to the host's own
//!    widgets; only the handle drags and only the backdrop taps to close.
//!
//! [`set_visible`]: BottomSheet::set_visible

use std::time::Duration;

use web_time::Instant;

use sheetkit_core::gesture::{
    drive, DragConfig, DragListener, PointerEvent, VerticalDragRecognizer,
};

use crate::dismiss::{DismissConfig, DragDismiss, ReleaseOutcome};
use crate::transition::{SheetPhase, SheetTransition, TransitionConfig};

// ---------------------------------------------------------------------------
// Host contract types
// ---------------------------------------------------------------------------

/// Which part of the sheet a pointer event landed on. Hit testing is the
/// host's job; the sheet only routes by region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetRegion {
    /// The grab handle strip at the top of the panel.
    Handle,
    /// The panel body. Events here belong to the host's content.
    Content,
    /// The dimmed area behind the panel.
    Backdrop,
}

/// Notifications the sheet emits toward the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetEvent {
    /// A handle drag crossed the activation threshold.
    DragStarted,
    /// A drag was released and resolved.
    Released(ReleaseOutcome),
    /// A user-initiated dismissal completed. Emitted exactly once per open
    /// period; the host should now set its visibility flag to false.
    Dismissed,
}

/// Per-frame render snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetFrame {
    /// Downward translation of the panel in px (0 = resting position).
    pub translate_y: f64,
    /// Backdrop opacity in [0, 1].
    pub backdrop_opacity: f64,
    /// Whether the grab handle should be drawn.
    pub handle_visible: bool,
    /// Height cap for the panel, if configured.
    pub max_height: Option<f64>,
    /// Whether anything should be rendered at all.
    pub visible: bool,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Sheet behavior and tuning.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetConfig {
    /// Cap on the panel height in px. `None` lets content size the panel.
    pub max_height: Option<f64>,
    /// Draw the grab handle. The handle is also the drag surface; without
    /// it the sheet is not draggable.
    pub show_handle: bool,
    /// Treat a backdrop tap as a dismissal.
    pub close_on_backdrop: bool,
    /// Visibility transition tuning.
    pub transition: TransitionConfig,
    /// Release thresholds and motion tuning.
    pub dismiss: DismissConfig,
    /// Drag activation tuning.
    pub drag: DragConfig,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetConfig {
    /// Defaults matching the stock sheet: handle shown, backdrop closes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_height: None,
            show_handle: true,
            close_on_backdrop: true,
            transition: TransitionConfig::default(),
            dismiss: DismissConfig::default(),
            drag: DragConfig::default(),
        }
    }

    /// Cap the panel height.
    #[must_use]
    pub fn max_height(mut self, px: f64) -> Self {
        self.max_height = Some(px);
        self
    }

    /// Show or hide the grab handle (hiding it disables dragging).
    #[must_use]
    pub fn show_handle(mut self, show: bool) -> Self {
        self.show_handle = show;
        self
    }

    /// Enable or disable backdrop-tap dismissal.
    #[must_use]
    pub fn close_on_backdrop(mut self, close: bool) -> Self {
        self.close_on_backdrop = close;
        self
    }

    /// Set the release thresholds.
    #[must_use]
    pub fn dismiss(mut self, config: DismissConfig) -> Self {
        self.dismiss = config;
        self
    }

    /// Set the transition tuning.
    #[must_use]
    pub fn transition(mut self, config: TransitionConfig) -> Self {
        self.transition = config;
        self
    }
}

// ---------------------------------------------------------------------------
// Sheet
// ---------------------------------------------------------------------------

type CloseCallback = Box<dyn FnMut()>;

/// A modal bottom sheet: animated in and out, dismissible by handle drag,
/// backdrop tap, or the host's visibility flag.
pub struct BottomSheet {
    config: SheetConfig,
    transition: SheetTransition,
    dismiss: DragDismiss,
    recognizer: VerticalDragRecognizer,
    viewport_height: f64,
    close_emitted: bool,
    on_close: Option<CloseCallback>,
    /// Events produced while dispatching a recognized drag batch.
    pending: Vec<SheetEvent>,
}

impl std::fmt::Debug for BottomSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BottomSheet")
            .field("phase", &self.transition.phase())
            .field("viewport_height", &self.viewport_height)
            .field("close_emitted", &self.close_emitted)
            .field("has_on_close", &self.on_close.is_some())
            .finish_non_exhaustive()
    }
}

impl BottomSheet {
    /// Create a closed sheet for the given viewport height.
    #[must_use]
    pub fn new(viewport_height: f64, config: SheetConfig) -> Self {
        Self {
            transition: SheetTransition::new(viewport_height, config.transition.clone()),
            dismiss: DragDismiss::new(config.dismiss.clone()),
            recognizer: VerticalDragRecognizer::new(config.drag.clone()),
            viewport_height,
            config,
            close_emitted: false,
            on_close: None,
            pending: Vec::new(),
        }
    }

    /// Register a callback invoked once per user-initiated dismissal, at
    /// the same moment [`SheetEvent::Dismissed`] is emitted.
    #[must_use]
    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    /// Current transition phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> SheetPhase {
        self.transition.phase()
    }

    /// Update the viewport height (rotation, resize).
    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
        self.transition.set_viewport_height(height);
    }

    /// Apply the host's visibility flag.
    ///
    /// `true` opens the sheet and re-arms the dismissal notification.
    /// `false` is the programmatic close: it animates out without invoking
    /// the close callback, since the host already knows. Re-applying the
    /// value the sheet is already heading toward is a no-op.
    pub fn set_visible(&mut self, visible: bool) {
        // Re-applying an unchanged flag must not disturb a live gesture or
        // an in-flight release animation.
        if visible {
            if matches!(
                self.transition.phase(),
                SheetPhase::Open | SheetPhase::Opening
            ) {
                return;
            }
            self.close_emitted = false;
            self.dismiss.reset();
            self.recognizer.reset();
            self.transition.open();
        } else {
            if matches!(
                self.transition.phase(),
                SheetPhase::Closed | SheetPhase::Closing
            ) {
                return;
            }
            self.dismiss.reset();
            self.recognizer.reset();
            self.transition.close();
        }
    }

    /// Route a pointer event by the region it hit. Returns any events the
    /// drag machinery produced (drag start, release decision).
    pub fn handle_pointer(
        &mut self,
        region: SheetRegion,
        event: &PointerEvent,
        now: Instant,
    ) -> Vec<SheetEvent> {
        match region {
            SheetRegion::Handle if self.config.show_handle => {
                let recognized = self.recognizer.process(event, now);
                drive(&recognized, self);
                std::mem::take(&mut self.pending)
            }
            SheetRegion::Handle | SheetRegion::Content => Vec::new(),
            SheetRegion::Backdrop => {
                if matches!(event, PointerEvent::Up(_)) {
                    self.backdrop_tap();
                }
                Vec::new()
            }
        }
    }

    /// Treat a backdrop tap as a dismissal request. Idempotent while the
    /// slide-out is in flight.
    pub fn backdrop_tap(&mut self) {
        if !self.config.close_on_backdrop {
            return;
        }
        if !self.transition.phase().is_visible() || self.transition.phase() == SheetPhase::Closing {
            return;
        }
        // A live handle drag owns the sheet; a concurrent backdrop tap
        // (second finger) must not hijack it.
        if self.dismiss.is_dragging() || self.dismiss.is_sliding_out() {
            return;
        }
        self.dismiss.slide_out(self.viewport_height);
        self.transition.dismiss_fade_out();
    }

    /// Advance all animations by one frame. Returns events for the host,
    /// including the exactly-once [`SheetEvent::Dismissed`].
    pub fn tick(&mut self, dt: Duration) -> Vec<SheetEvent> {
        let mut out = Vec::new();
        self.transition.tick(dt);
        if self.dismiss.tick(dt) {
            self.transition.force_closed();
            self.dismiss.reset();
            if !self.close_emitted {
                self.close_emitted = true;
                #[cfg(feature = "tracing")]
                tracing::debug!(target: "sheetkit::sheet", "dismissal completed");
                if let Some(callback) = self.on_close.as_mut() {
                    callback();
                }
                out.push(SheetEvent::Dismissed);
            }
        }
        out
    }

    /// Snapshot the current render state.
    #[must_use]
    pub fn frame(&self) -> SheetFrame {
        let visible = self.transition.phase().is_visible();
        SheetFrame {
            translate_y: self.transition.offset_px() + self.dismiss.offset_px(),
            backdrop_opacity: self.transition.backdrop_opacity(),
            handle_visible: visible && self.config.show_handle,
            max_height: self.config.max_height,
            visible,
        }
    }
}

impl DragListener for BottomSheet {
    fn on_start(&mut self) {
        // A closed or closing sheet has nothing to grab.
        if matches!(
            self.transition.phase(),
            SheetPhase::Closed | SheetPhase::Closing
        ) {
            return;
        }
        self.dismiss.begin();
        self.pending.push(SheetEvent::DragStarted);
    }

    fn on_move(&mut self, delta: f64, _velocity: f64) {
        if !self.dismiss.is_dragging() {
            return;
        }
        let offset = self.dismiss.update(delta);
        self.transition
            .set_backdrop_opacity(1.0 - offset / self.viewport_height);
    }

    fn on_end(&mut self, _delta: f64, velocity: f64) {
        if !self.dismiss.is_dragging() {
            return;
        }
        let outcome = self.dismiss.release(velocity, self.viewport_height);
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "sheetkit::sheet", ?outcome, velocity, "drag released");
        match outcome {
            ReleaseOutcome::Dismiss => self.transition.dismiss_fade_out(),
            ReleaseOutcome::Snapback => self.transition.snapback_fade_in(),
        }
        self.pending.push(SheetEvent::Released(outcome));
    }

    fn on_cancel(&mut self) {
        if !self.dismiss.is_dragging() {
            return;
        }
        self.dismiss.cancel();
        self.transition.snapback_fade_in();
        self.pending.push(SheetEvent::Released(ReleaseOutcome::Snapback));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
