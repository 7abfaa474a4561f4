// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_geometry::NumericRange;
use understory_interaction::inertial::{InertialScrollState, ScrollConstraints};

fn bench_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("inertial/settle");
    let constraints = ScrollConstraints::with_overflow(NumericRange::new(0.0, 10_000.0), 120.0);

    // Fling velocities; larger ones coast into the extrusion zone and back.
    for impulse in [5.0_f64, 40.0, 400.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(impulse),
            &impulse,
            |b, &impulse| {
                b.iter(|| {
                    let mut state = InertialScrollState::new(9_500.0, constraints, impulse);
                    let mut ticks = 0_u32;
                    while state.is_active() {
                        state = state.do_inertial_move(black_box(1.0));
                        ticks += 1;
                    }
                    black_box((state, ticks))
                });
            },
        );
    }

    group.finish();
}

fn bench_overscroll_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("inertial/overscroll_drag");
    let constraints = ScrollConstraints::with_overflow(NumericRange::new(0.0, 1_000.0), 120.0);
    let steps = 1_024_u64;
    group.throughput(Throughput::Elements(steps));

    group.bench_function("drag_by", |b| {
        b.iter(|| {
            let mut state = InertialScrollState::new(990.0, constraints, 0.0);
            for _ in 0..steps {
                state = state.drag_by(black_box(3.0));
            }
            black_box(state)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_settle, bench_overscroll_drag);
criterion_main!(benches);
