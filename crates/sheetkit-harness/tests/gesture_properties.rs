//! Property tests over randomized gestures.
//!
//! Whatever the pointer does, the sheet must hold three promises: the
//! rendered offset never goes above the resting position, the backdrop
//! opacity stays in range, and a dismissal is reported at most once per
//! open period with the terminal phase matching the report.

use proptest::prelude::*;

use sheetkit_harness::SheetDriver;
use sheetkit_widgets::sheet::{BottomSheet, SheetConfig, SheetRegion};
use sheetkit_widgets::transition::SheetPhase;
use sheetkit_core::gesture::{PointerEvent, PointerPoint};

const VIEWPORT: f64 = 640.0;

fn open_driver() -> SheetDriver {
    let mut d = SheetDriver::new(BottomSheet::new(VIEWPORT, SheetConfig::new()));
    d.open();
    d
}

proptest! {
    #[test]
    fn any_single_drag_dismisses_at_most_once(
        distance in 0.0f64..400.0,
        steps in 1usize..40,
    ) {
        let mut d = open_driver();
        d.drag_handle(distance, steps);
        d.settle(600);

        let dismissed = d.dismissed_count();
        prop_assert!(dismissed <= 1);
        match dismissed {
            1 => prop_assert_eq!(d.phase(), SheetPhase::Closed),
            _ => prop_assert_eq!(d.phase(), SheetPhase::Open),
        }
    }

    #[test]
    fn frame_invariants_hold_throughout_a_drag(
        ys in proptest::collection::vec(-100.0f64..500.0, 1..30),
    ) {
        let mut d = open_driver();
        d.pointer(SheetRegion::Handle, PointerEvent::Down(PointerPoint::new(0.0, 0.0)));
        for y in &ys {
            d.pointer(SheetRegion::Handle, PointerEvent::Move(PointerPoint::new(0.0, *y)));
            let frame = d.frame();
            prop_assert!(frame.translate_y >= 0.0);
            prop_assert!((0.0..=1.0).contains(&frame.backdrop_opacity));
        }
        d.pointer(SheetRegion::Handle, PointerEvent::Up(PointerPoint::new(0.0, *ys.last().unwrap())));
        d.settle(600);

        let frame = d.frame();
        prop_assert!(frame.translate_y >= 0.0);
        prop_assert!((0.0..=1.0).contains(&frame.backdrop_opacity));
        prop_assert!(d.dismissed_count() <= 1);
    }

    #[test]
    fn deeper_holds_never_brighten_the_backdrop(
        depths in proptest::collection::vec(1.0f64..500.0, 2..20),
    ) {
        // Feed strictly increasing drag depths; opacity must be
        // non-increasing sample over sample.
        let mut sorted = depths;
        sorted.sort_by(|a, b| a.total_cmp(b));

        let mut d = open_driver();
        d.pointer(SheetRegion::Handle, PointerEvent::Down(PointerPoint::new(0.0, 0.0)));
        let mut prev = f64::INFINITY;
        for y in sorted {
            d.pointer(SheetRegion::Handle, PointerEvent::Move(PointerPoint::new(0.0, y)));
            let opacity = d.frame().backdrop_opacity;
            prop_assert!(opacity <= prev + 1e-12);
            prev = opacity;
        }
    }

    #[test]
    fn interleaved_taps_and_drags_dismiss_at_most_once(
        tap_first in any::<bool>(),
        distance in 0.0f64..300.0,
    ) {
        let mut d = open_driver();
        if tap_first {
            d.tap_backdrop();
        }
        d.drag_handle(distance, 5);
        if !tap_first {
            d.tap_backdrop();
        }
        d.settle(600);

        prop_assert!(d.dismissed_count() <= 1);
    }
}
