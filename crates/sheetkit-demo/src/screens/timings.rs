#![forbid(unsafe_code)]

//! Restaurant opening-hours sheet.
//!
//! The classic "Timings" modal: a week of opening hours, today highlighted,
//! closed days dimmed. Content sizes the panel, the handle drags it away,
//! and a backdrop tap closes it. The host keeps the visibility flag; the
//! screen relays the sheet's dismissal back into that flag.

use std::time::Duration;

use web_time::Instant;

use sheetkit_core::gesture::PointerEvent;
use sheetkit_widgets::sheet::{BottomSheet, SheetConfig, SheetEvent, SheetRegion};

/// One row of the weekly schedule.
#[derive(Debug, Clone)]
pub struct TimingRow {
    pub day: &'static str,
    pub hours: &'static str,
    pub is_today: bool,
    pub is_closed: bool,
}

impl TimingRow {
    fn open(day: &'static str, hours: &'static str) -> Self {
        Self {
            day,
            hours,
            is_today: false,
            is_closed: false,
        }
    }
}

/// A week of sample hours with `today` highlighted (0 = Monday).
#[must_use]
pub fn sample_week(today: usize) -> Vec<TimingRow> {
    let mut rows = vec![
        TimingRow::open("Monday", "9:00 AM - 10:00 PM"),
        TimingRow::open("Tuesday", "9:00 AM - 10:00 PM"),
        TimingRow::open("Wednesday", "9:00 AM - 10:00 PM"),
        TimingRow::open("Thursday", "9:00 AM - 10:00 PM"),
        TimingRow::open("Friday", "9:00 AM - 11:00 PM"),
        TimingRow::open("Saturday", "10:00 AM - 11:00 PM"),
        TimingRow {
            day: "Sunday",
            hours: "Closed",
            is_today: false,
            is_closed: true,
        },
    ];
    if let Some(row) = rows.get_mut(today) {
        row.is_today = true;
    }
    rows
}

/// The timings screen: schedule rows behind a draggable sheet.
#[derive(Debug)]
pub struct TimingsSheet {
    sheet: BottomSheet,
    timings: Vec<TimingRow>,
    /// The host-side visibility flag the sheet reacts to.
    visible: bool,
}

impl TimingsSheet {
    #[must_use]
    pub fn new(viewport_height: f64, timings: Vec<TimingRow>) -> Self {
        Self {
            sheet: BottomSheet::new(viewport_height, SheetConfig::new()),
            timings,
            visible: false,
        }
    }

    /// Whether the host flag currently says "shown".
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip the host flag, relaying it into the sheet.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.sheet.set_visible(visible);
    }

    /// Route a pointer event. A dismissal flips the host flag, mirroring
    /// what an `onClose` handler does in an app.
    pub fn handle_pointer(&mut self, region: SheetRegion, event: &PointerEvent, now: Instant) {
        let events = self.sheet.handle_pointer(region, event, now);
        self.apply(&events);
    }

    /// Advance animations one frame.
    pub fn tick(&mut self, dt: Duration) {
        let events = self.sheet.tick(dt);
        self.apply(&events);
    }

    fn apply(&mut self, events: &[SheetEvent]) {
        if events.contains(&SheetEvent::Dismissed) {
            self.visible = false;
        }
    }

    /// Direct access to the underlying sheet (tests, host integration).
    #[inline]
    pub fn sheet(&mut self) -> &mut BottomSheet {
        &mut self.sheet
    }

    /// Render the screen as plain text lines.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        let frame = self.sheet.frame();
        if !frame.visible {
            return Vec::new();
        }

        let mut lines = Vec::with_capacity(self.timings.len() + 2);
        if frame.handle_visible {
            lines.push("────".to_string());
        }
        lines.push("Timings".to_string());
        for row in &self.timings {
            let marker = if row.is_today { "▸ " } else { "  " };
            let hours = if row.is_closed { "Closed" } else { row.hours };
            lines.push(format!("{marker}{day}: {hours}", day = row.day));
        }
        lines
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use sheetkit_core::gesture::PointerPoint;

    const MS_16: Duration = Duration::from_millis(16);

    fn open_screen() -> TimingsSheet {
        let mut screen = TimingsSheet::new(640.0, sample_week(4));
        screen.set_visible(true);
        for _ in 0..600 {
            screen.tick(MS_16);
        }
        screen
    }

    #[test]
    fn hidden_screen_renders_nothing() {
        let screen = TimingsSheet::new(640.0, sample_week(0));
        assert!(screen.render().is_empty());
    }

    #[test]
    fn renders_handle_title_and_week() {
        let screen = open_screen();
        let lines = screen.render();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[1], "Timings");
        assert!(lines[6].starts_with("▸ Friday"));
        assert!(lines[8].ends_with("Closed"));
    }

    #[test]
    fn drag_dismissal_flips_the_host_flag() {
        let mut screen = open_screen();
        let mut now = Instant::now();
        let mut feed = |screen: &mut TimingsSheet, event| {
            now += MS_16;
            screen.handle_pointer(SheetRegion::Handle, &event, now);
            screen.tick(MS_16);
        };

        feed(&mut screen, PointerEvent::Down(PointerPoint::new(0.0, 0.0)));
        for i in 1..=10 {
            feed(
                &mut screen,
                PointerEvent::Move(PointerPoint::new(0.0, f64::from(i) * 20.0)),
            );
        }
        feed(&mut screen, PointerEvent::Up(PointerPoint::new(0.0, 200.0)));

        for _ in 0..600 {
            screen.tick(MS_16);
        }
        assert!(!screen.is_visible());
        assert!(screen.render().is_empty());
    }

    #[test]
    fn backdrop_tap_flips_the_host_flag() {
        let mut screen = open_screen();
        let now = Instant::now();
        screen.handle_pointer(
            SheetRegion::Backdrop,
            &PointerEvent::Up(PointerPoint::new(5.0, 5.0)),
            now,
        );
        for _ in 0..600 {
            screen.tick(MS_16);
        }
        assert!(!screen.is_visible());
    }

    #[test]
    fn sample_week_marks_today() {
        let week = sample_week(2);
        assert!(week[2].is_today);
        assert_eq!(week.iter().filter(|r| r.is_today).count(), 1);
    }
}
