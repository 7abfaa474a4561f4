// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_geometry::{BoundingBox, Point};
use understory_interaction::sortable::{SortableContainer, SortableItem, SortableLayoutState};

fn layout(len: usize) -> SortableLayoutState {
    SortableLayoutState::new((0..len).map(|i| {
        let height = 16.0 + (i % 5) as f64 * 4.0;
        SortableItem::new(format!("row{i:05}"), BoundingBox::by_deltas(0.0, 0.0, 240.0, height))
    }))
    .align()
}

fn bench_drag_through(c: &mut Criterion) {
    let mut group = c.benchmark_group("sortable/drag_through");

    // Drag the first row from top to bottom in 64 pointer moves.
    for len in [16_usize, 128, 1_024] {
        let layout = layout(len);
        let total = layout.total_height();
        let first = layout.items()[0].clone();
        let container = SortableContainer::new(
            BoundingBox::by_deltas(0.0, 0.0, 240.0, total * 2.0),
            layout,
        );
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &container, |b, container| {
            b.iter_batched(
                || container.clone(),
                |mut container| {
                    for step in 0..64 {
                        let y = total * f64::from(step) / 64.0;
                        let dragged =
                            SortableItem::new(first.key.clone(), first.bbox.move_to(Point::new(0.0, y)));
                        black_box(container.drag_move(&dragged));
                    }
                    container
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_rendered_items(c: &mut Criterion) {
    let mut group = c.benchmark_group("sortable/rendered_items");

    for len in [16_usize, 128, 1_024] {
        let layout = layout(len).place_to_bottom_by_key("row00000");
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &layout, |b, layout| {
            b.iter(|| black_box(layout.sorted_by_key().len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag_through, bench_rendered_items);
criterion_main!(benches);
