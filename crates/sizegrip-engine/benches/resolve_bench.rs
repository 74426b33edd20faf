//! Benchmarks for the per-frame resize pipeline.
//!
//! Run with: cargo bench -p sizegrip-engine

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use sizegrip_core::{Dimension, Direction, Point, Rect, Viewport};
use sizegrip_engine::constraints::{effective_windows, resolve};
use sizegrip_engine::{AspectLock, BoundarySnapshot, Bounds, ResizeConfig, calculator::raw_size};

fn snapshot() -> BoundarySnapshot {
    BoundarySnapshot {
        target: Rect::new(40.0, 30.0, 320.0, 200.0),
        parent: Some(Rect::new(0.0, 0.0, 1280.0, 720.0)),
        parent_content_width: Some(1240.0),
        bounds_rect: None,
        viewport: Viewport::new(1920.0, 1080.0),
        flex_axis: None,
    }
}

fn full_config() -> ResizeConfig {
    ResizeConfig {
        min_width: Some(Dimension::Px(80.0)),
        max_width: Some(Dimension::Percent(90.0)),
        min_height: Some(Dimension::Px(60.0)),
        max_height: Some(Dimension::Vh(80.0)),
        bounds: Bounds::Parent,
        ..Default::default()
    }
}

fn bench_raw_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/raw_size");
    let start = Point::new(360.0, 230.0);
    let end = Point::new(455.0, 310.0);
    let lock = AspectLock::checked(1.6, 0.0, 0.0);

    for direction in [Direction::Right, Direction::BottomRight] {
        group.bench_with_input(
            BenchmarkId::new("unlocked", format!("{direction:?}")),
            &direction,
            |b, &direction| {
                b.iter(|| {
                    black_box(raw_size(
                        direction,
                        black_box(start),
                        black_box(end),
                        (320.0, 200.0),
                        1.0,
                        1.0,
                        None,
                    ))
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("locked", format!("{direction:?}")),
            &direction,
            |b, &direction| {
                b.iter(|| {
                    black_box(raw_size(
                        direction,
                        black_box(start),
                        black_box(end),
                        (320.0, 200.0),
                        1.0,
                        1.0,
                        lock,
                    ))
                })
            },
        );
    }

    group.finish();
}

fn bench_effective_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/effective_windows");
    let snap = snapshot();
    let config = full_config();
    let lock = AspectLock::checked(1.6, 0.0, 0.0);

    group.bench_function("declared_plus_boundary", |b| {
        b.iter(|| {
            black_box(effective_windows(
                Direction::BottomRight,
                black_box(&config),
                black_box(&snap),
                None,
            ))
        })
    });

    group.bench_function("ratio_linked", |b| {
        b.iter(|| {
            black_box(effective_windows(
                Direction::BottomRight,
                black_box(&config),
                black_box(&snap),
                lock,
            ))
        })
    });

    group.finish();
}

/// One full frame: delta to raw size, windows, clamp, re-derivation.
fn bench_frame_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/frame_pipeline");
    let snap = snapshot();
    let config = full_config();
    let start = Point::new(360.0, 230.0);
    let lock = AspectLock::checked(1.6, 0.0, 0.0);

    for direction in Direction::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{direction:?}")),
            &direction,
            |b, &direction| {
                let mut step = 0u32;
                b.iter(|| {
                    // Vary the pointer a little so the input is not constant.
                    step = step.wrapping_add(1);
                    let end = Point::new(360.0 + f64::from(step % 97), 230.0 + f64::from(step % 53));
                    let raw = raw_size(direction, start, end, (320.0, 200.0), 1.0, 1.0, lock);
                    black_box(resolve(direction, raw, &config, &snap, lock))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_raw_size,
    bench_effective_windows,
    bench_frame_pipeline,
);

criterion_main!(benches);
