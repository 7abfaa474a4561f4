// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end gesture sessions driven through the public API.
//!
//! Each test replays the event sequence a host would produce for one gesture
//! and checks the state it would render after every step.

use understory_geometry::{BoundingBox, BoxSide, Direction, NumericRange, Point, SizeBounds};
use understory_interaction::handle::ResizeHandle;
use understory_interaction::inertial::{InertialScrollState, ScrollConstraints, ScrollPhase};
use understory_interaction::resize::ResizeConstraints;
use understory_interaction::slider::Slider;
use understory_interaction::sortable::{
    DragPlacement, SortableContainer, SortableItem, SortableLayoutState,
};
use understory_interaction::stateful::Stateful;

fn item(key: &str, y: f64) -> SortableItem {
    SortableItem::new(key, BoundingBox::by_deltas(0.0, y, 80.0, 10.0))
}

fn keys(container: &SortableContainer) -> Vec<&str> {
    container
        .layout()
        .items()
        .iter()
        .map(|item| item.key.as_str())
        .collect()
}

#[test]
fn moving_an_item_between_containers() {
    let mut source = SortableContainer::new(
        BoundingBox::by_deltas(0.0, 0.0, 80.0, 100.0),
        SortableLayoutState::new([item("a", 0.0), item("b", 0.0), item("c", 0.0)]),
    );
    let mut target = SortableContainer::new(
        BoundingBox::by_deltas(200.0, 0.0, 80.0, 25.0),
        SortableLayoutState::new([item("x", 0.0)]),
    );

    // "a" leaves the source container: the others close the gap.
    let outside = SortableItem::new("a", BoundingBox::by_deltas(150.0, 0.0, 80.0, 10.0));
    let feedback = source.drag_move(&outside);
    assert_eq!(feedback.placement, DragPlacement::Outside);
    assert_eq!(keys(&source), ["b", "c", "a"]);

    // It enters the target below "x" and is dropped there.
    assert!(target.third_party_enter(&item("a", 12.0)));
    assert_eq!(keys(&target), ["x", "a"]);
    assert!(target.third_party_drop(&item("a", 12.0)));
    source.drop_item(&outside, true);

    assert_eq!(keys(&source), ["b", "c"]);
    assert_eq!(source.layout().total_height(), 20.0);
    assert_eq!(target.layout().total_height(), 20.0);

    // The target is now too full for "b", which snaps back.
    assert!(!target.third_party_enter(&item("b", 0.0)));
    assert_eq!(keys(&target), ["x", "a"]);
    source.drop_item(&item("b", 0.0), false);
    assert_eq!(keys(&source), ["b", "c"]);
    let items = source.layout().items();
    assert_eq!(items[0].bbox.y2, items[1].bbox.y1);
}

#[test]
fn reordering_within_one_container_keeps_render_order() {
    let mut container = SortableContainer::new(
        BoundingBox::by_deltas(0.0, 0.0, 80.0, 100.0),
        SortableLayoutState::new([item("c", 0.0), item("a", 0.0), item("b", 0.0)]),
    );
    let rendered_before: Vec<_> = container
        .rendered_items()
        .iter()
        .map(|item| item.key.clone())
        .collect();

    for y in [3.0, 9.0, 16.0, 27.0] {
        let feedback = container.drag_move(&item("c", y));
        assert_eq!(feedback.placement, DragPlacement::Inside);
        assert!(feedback.can_drop);
    }
    container.drop_item(&item("c", 27.0), false);
    assert_eq!(keys(&container), ["a", "b", "c"]);

    let rendered_after: Vec<_> = container
        .rendered_items()
        .iter()
        .map(|item| item.key.clone())
        .collect();
    assert_eq!(rendered_before, rendered_after);
}

#[test]
fn corner_drag_session_against_a_container() {
    let start = BoundingBox::by_deltas(50.0, 50.0, 100.0, 50.0);
    let constraints = ResizeConstraints::new()
        .with_aspect_ratio(Some(2.0))
        .with_size_bounds(SizeBounds::uniform(NumericRange::new(10.0, 1000.0)))
        .with_outer_box(BoundingBox::by_deltas(0.0, 0.0, 250.0, 250.0));

    // Gestures resize from the box at pointer-down, with the accumulated delta.
    let mut shown = start;
    for step in 1..=10 {
        let total = Point::new(10.0 * f64::from(step), 5.0 * f64::from(step));
        shown = ResizeHandle::BOTTOM_RIGHT.resize(start, total, &constraints);
        assert!((shown.aspect_ratio() - 2.0).abs() < 1e-9);
        assert_eq!(shown.origin(), start.origin());
    }
    assert_eq!(shown, BoundingBox::by_deltas(50.0, 50.0, 200.0, 100.0));

    // Past the container edge the ratio cannot be kept, so the box stays at
    // the size it had when the drag started.
    let blocked = ResizeHandle::BOTTOM_RIGHT.resize(start, Point::new(200.0, 100.0), &constraints);
    assert_eq!(blocked, start);
}

#[test]
fn fling_into_overscroll_and_back() {
    let constraints = ScrollConstraints::with_overflow(NumericRange::new(0.0, 300.0), 60.0);
    let mut state = InertialScrollState::new(250.0, constraints, 0.0);

    // Drag towards the end; resistance grows once past the bounds.
    for _ in 0..20 {
        state = state.drag_by(8.0);
        assert!(constraints.overflow_bounds.includes(state.coordinate()));
    }
    assert_eq!(state.phase(), ScrollPhase::InExtrusion);

    let mut deepest = state.coordinate();
    let mut ticks = 0;
    while state.is_active() {
        state = state.do_inertial_move(1.0);
        deepest = deepest.max(state.coordinate());
        assert!(constraints.overflow_bounds.includes(state.coordinate()));
        ticks += 1;
        assert!(ticks < 10_000, "scroll never settled");
    }
    assert!(deepest <= constraints.overflow_bounds.end);
    assert_eq!(state.coordinate(), 300.0);
    assert_eq!(state.phase(), ScrollPhase::Settled);
}

#[test]
fn slider_value_held_in_stateful() {
    let slider = Slider::new(Direction::VERTICAL_REVERSED)
        .with_size_limits(NumericRange::new(0.1, 0.5));
    let outer = slider.outer_box(400.0, 16.0);
    let mut renders = Vec::new();
    let mut value = Stateful::new(NumericRange::new(0.0, 0.25), |v: &NumericRange| {
        renders.push(*v);
    });

    // The logical start is at the bottom edge.
    let bbox = slider.value_box(*value.get(), outer);
    assert_eq!(bbox, BoundingBox::new(0.0, 16.0, 300.0, 400.0));

    // Dragging the top handle up grows the value's logical end.
    value.update(|v| slider.drag_handle(*v, BoxSide::Top, -100.0, 400.0));
    assert_eq!(*value.get(), NumericRange::new(0.0, 0.5));

    // Further growth is capped by the size limits.
    value.update(|v| slider.drag_handle(*v, BoxSide::Top, -100.0, 400.0));
    assert_eq!(*value.get(), NumericRange::new(0.0, 0.5));

    value.update(|v| slider.drag_body(*v, -1000.0, 400.0));
    assert_eq!(*value.get(), NumericRange::new(0.5, 1.0));
    drop(value);
    assert_eq!(renders.len(), 2);
}
