// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Vec2;
use understory_geometry::{BoundingBox, NumericRange, Point, SizeBounds};
use understory_interaction::handle::ResizeHandle;
use understory_interaction::resize::{ResizeConstraints, resolve};

fn constraint_sets() -> [(&'static str, ResizeConstraints); 3] {
    let bounded = ResizeConstraints::new()
        .with_size_bounds(SizeBounds::uniform(NumericRange::new(20.0, 400.0)))
        .with_outer_box(BoundingBox::by_deltas(0.0, 0.0, 800.0, 600.0));
    [
        ("free", ResizeConstraints::new()),
        ("bounded", bounded),
        ("aspect_locked", bounded.with_aspect_ratio(Some(16.0 / 9.0))),
    ]
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize/resolve");
    let source = BoundingBox::by_deltas(100.0, 100.0, 160.0, 90.0);
    let proposed = BoundingBox::by_deltas(100.0, 100.0, 310.0, 120.0);

    for (name, constraints) in constraint_sets() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &constraints, |b, constraints| {
            b.iter(|| {
                black_box(resolve(
                    black_box(proposed),
                    black_box(source),
                    Point::ZERO,
                    constraints,
                ))
            });
        });
    }

    group.finish();
}

fn bench_handle_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize/handle_drag");
    let source = BoundingBox::by_deltas(100.0, 100.0, 160.0, 90.0);

    // One pointer-move event per step of a 256-step drag on every handle.
    let deltas: Vec<Vec2> = (0..256)
        .map(|i| {
            let t = f64::from(i);
            Vec2::new(t * 1.5, t * -0.75)
        })
        .collect();

    for (name, constraints) in constraint_sets() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &constraints, |b, constraints| {
            b.iter(|| {
                for handle in ResizeHandle::HANDLES {
                    for delta in &deltas {
                        black_box(handle.resize(source, *delta, constraints));
                    }
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_handle_drag);
criterion_main!(benches);
