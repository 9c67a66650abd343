#![forbid(unsafe_code)]

//! Scripted sheet driver.
//!
//! [`SheetDriver`] owns a [`BottomSheet`] and a [`FrameClock`] and exposes
//! gesture-level verbs (drag, flick, tap) that expand into the raw pointer
//! sequences a host platform would deliver. Every pointer event also ticks
//! one frame, matching a host that processes input and renders in the same
//! loop. All emitted [`SheetEvent`]s are accumulated for assertion.
//!
//! # Invariants
//!
//! 1. The clock advances monotonically; no scenario can deliver two events
//!    at the same instant.
//! 2. `events` preserves emission order across pointer handling and ticks.

use std::time::Duration;

use sheetkit_core::gesture::{PointerEvent, PointerPoint};
use sheetkit_widgets::sheet::{BottomSheet, SheetEvent, SheetFrame, SheetRegion};
use sheetkit_widgets::transition::SheetPhase;

use crate::clock::FrameClock;

/// Drives a sheet through scripted gestures on a deterministic clock.
#[derive(Debug)]
pub struct SheetDriver {
    sheet: BottomSheet,
    clock: FrameClock,
    /// Every event the sheet has emitted, in order.
    pub events: Vec<SheetEvent>,
}

impl SheetDriver {
    /// Wrap a sheet with the default 16ms clock.
    #[must_use]
    pub fn new(sheet: BottomSheet) -> Self {
        Self::with_clock(sheet, FrameClock::default())
    }

    /// Wrap a sheet with an explicit clock.
    #[must_use]
    pub fn with_clock(sheet: BottomSheet, clock: FrameClock) -> Self {
        Self {
            sheet,
            clock,
            events: Vec::new(),
        }
    }

    /// The driven sheet.
    #[inline]
    pub fn sheet(&mut self) -> &mut BottomSheet {
        &mut self.sheet
    }

    /// Current render snapshot.
    #[must_use]
    pub fn frame(&self) -> SheetFrame {
        self.sheet.frame()
    }

    /// Current transition phase.
    #[must_use]
    pub fn phase(&self) -> SheetPhase {
        self.sheet.phase()
    }

    /// Deliver one pointer event and tick one frame.
    pub fn pointer(&mut self, region: SheetRegion, event: PointerEvent) {
        let now = self.clock.advance();
        let emitted = self.sheet.handle_pointer(region, &event, now);
        self.events.extend(emitted);
        self.events.extend(self.sheet.tick(self.clock.step()));
    }

    /// Tick `frames` frames without input.
    pub fn run(&mut self, frames: usize) {
        for _ in 0..frames {
            self.clock.advance();
            self.events.extend(self.sheet.tick(self.clock.step()));
        }
    }

    /// Tick one oversized frame (a dropped-frame stall).
    pub fn stall(&mut self, dt: Duration) {
        self.clock.advance_by(dt);
        self.events.extend(self.sheet.tick(dt));
    }

    /// Tick until all animations settle, up to `max_frames`. Settled means
    /// the phase is terminal and two consecutive frames render identically.
    /// Panics if the sheet never settles, which is itself a bug worth
    /// failing on.
    pub fn settle(&mut self, max_frames: usize) {
        let mut prev = self.sheet.frame();
        for _ in 0..max_frames {
            self.clock.advance();
            self.events.extend(self.sheet.tick(self.clock.step()));
            let frame = self.sheet.frame();
            if !self.phase().is_animating() && frame == prev {
                return;
            }
            prev = frame;
        }
        panic!(
            "sheet did not settle in {max_frames} frames (phase: {:?})",
            self.phase()
        );
    }

    /// Open via the host flag and settle.
    pub fn open(&mut self) {
        self.sheet.set_visible(true);
        self.settle(600);
        assert_eq!(self.phase(), SheetPhase::Open, "open did not complete");
    }

    /// Drag the handle straight down by `distance` px across `steps` moves,
    /// then release. More steps means a slower drag.
    pub fn drag_handle(&mut self, distance: f64, steps: usize) {
        self.pointer(SheetRegion::Handle, PointerEvent::Down(point(0.0, 0.0)));
        for i in 1..=steps {
            let y = distance * (i as f64) / (steps as f64);
            self.pointer(SheetRegion::Handle, PointerEvent::Move(point(0.0, y)));
        }
        self.pointer(SheetRegion::Handle, PointerEvent::Up(point(0.0, distance)));
    }

    /// Start a drag and leave the finger down at `distance` px.
    pub fn drag_handle_hold(&mut self, distance: f64, steps: usize) {
        self.pointer(SheetRegion::Handle, PointerEvent::Down(point(0.0, 0.0)));
        for i in 1..=steps {
            let y = distance * (i as f64) / (steps as f64);
            self.pointer(SheetRegion::Handle, PointerEvent::Move(point(0.0, y)));
        }
    }

    /// Release a held drag at `distance` px.
    pub fn release_at(&mut self, distance: f64) {
        self.pointer(SheetRegion::Handle, PointerEvent::Up(point(0.0, distance)));
    }

    /// Tap the backdrop (down then up, no movement).
    pub fn tap_backdrop(&mut self) {
        self.pointer(SheetRegion::Backdrop, PointerEvent::Down(point(5.0, 5.0)));
        self.pointer(SheetRegion::Backdrop, PointerEvent::Up(point(5.0, 5.0)));
    }

    /// Count of dismissal notifications observed so far.
    #[must_use]
    pub fn dismissed_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| **e == SheetEvent::Dismissed)
            .count()
    }
}

fn point(x: f64, y: f64) -> PointerPoint {
    PointerPoint::new(x, y)
}
