//! Benchmarks for the animation primitives: per-frame tick cost for the
//! spring integrator (including large-dt subdivision) and the drag
//! recognizer's per-sample processing.

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sheetkit_core::animation::{Animation, Spring, SpringParams};
use sheetkit_core::gesture::{DragConfig, PointerEvent, PointerPoint, VerticalDragRecognizer};
use web_time::Instant;

fn spring_tick(c: &mut Criterion) {
    c.bench_function("spring_tick_16ms", |b| {
        b.iter(|| {
            let mut spring = Spring::new(800.0, 0.0, SpringParams::SHEET_OPEN);
            for _ in 0..120 {
                spring.tick(black_box(Duration::from_millis(16)));
            }
            black_box(spring.position())
        });
    });

    c.bench_function("spring_tick_dropped_frame", |b| {
        b.iter(|| {
            let mut spring = Spring::new(800.0, 0.0, SpringParams::SNAPBACK);
            // 250ms deltas force internal subdivision.
            for _ in 0..8 {
                spring.tick(black_box(Duration::from_millis(250)));
            }
            black_box(spring.position())
        });
    });
}

fn recognizer_process(c: &mut Criterion) {
    c.bench_function("drag_recognizer_120_samples", |b| {
        b.iter(|| {
            let mut recognizer = VerticalDragRecognizer::new(DragConfig::default());
            let mut now = Instant::now();
            recognizer.process(&PointerEvent::Down(PointerPoint::new(0.0, 0.0)), now);
            for i in 1..=120 {
                now += Duration::from_millis(8);
                let point = PointerPoint::new(0.0, f64::from(i) * 2.0);
                black_box(recognizer.process(&PointerEvent::Move(point), now));
            }
            now += Duration::from_millis(8);
            black_box(recognizer.process(&PointerEvent::Up(PointerPoint::new(0.0, 240.0)), now))
        });
    });
}

criterion_group!(benches, spring_tick, recognizer_process);
criterion_main!(benches);
