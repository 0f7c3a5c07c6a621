//! Benchmarks for wheel rendering and winner selection.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fridgewheel_core::wheel::render::paint;
use fridgewheel_core::{winner_index, RecordingCanvas, Size, WheelStyle};

fn bench_winner_index(c: &mut Criterion) {
    c.bench_function("winner_index_12", |b| {
        b.iter(|| winner_index(black_box(1234.567), black_box(12)))
    });
}

fn bench_paint_8_segments(c: &mut Criterion) {
    let labels: Vec<String> = (0..8).map(|i| format!("Meal idea number {i}")).collect();
    let style = WheelStyle::default();
    let mut canvas = RecordingCanvas::new();

    c.bench_function("paint_8_segments", |b| {
        b.iter(|| {
            paint(
                &mut canvas,
                Size::square(320.0),
                black_box(&labels),
                black_box(2.5),
                &style,
            );
        })
    });
}

fn bench_paint_empty(c: &mut Criterion) {
    let style = WheelStyle::default();
    let mut canvas = RecordingCanvas::new();

    c.bench_function("paint_empty", |b| {
        b.iter(|| paint(&mut canvas, Size::square(320.0), &[], 0.0, &style))
    });
}

criterion_group!(
    benches,
    bench_winner_index,
    bench_paint_8_segments,
    bench_paint_empty,
);
criterion_main!(benches);
