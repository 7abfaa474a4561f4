// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-reorder vertical stacks.
//!
//! [`SortableLayoutState`] keeps an ordered list of keyed boxes. The order is
//! the placement order (top to bottom); it changes as an item is dragged
//! through the stack, and [`SortableLayoutState::align`] re-packs the boxes
//! into a contiguous column. Every transition returns a new value.
//!
//! [`SortableContainer`] wires the state to the events of a drag session: drag
//! moves over or outside the container, the drop, and items arriving from
//! another container.
//!
//! ```rust
//! use understory_geometry::BoundingBox;
//! use understory_interaction::sortable::{SortableItem, SortableLayoutState};
//!
//! let items = ["a", "b", "c"]
//!     .map(|key| SortableItem::new(key, BoundingBox::by_deltas(0.0, 0.0, 50.0, 10.0)));
//! let layout = SortableLayoutState::new(items).align();
//!
//! // Drag "a" below the middle of "c".
//! let dragged = SortableItem::new("a", BoundingBox::by_deltas(0.0, 22.0, 50.0, 10.0));
//! let layout = layout.move_index_according_to_position(&dragged).align();
//! let order: Vec<_> = layout.items().iter().map(|item| item.key.as_str()).collect();
//! assert_eq!(order, ["b", "c", "a"]);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use understory_geometry::BoundingBox;

/// A keyed box taking part in a sortable stack.
#[derive(Clone, Debug, PartialEq)]
pub struct SortableItem {
    /// Identity of the item, unique within a layout.
    pub key: String,
    /// Current box of the item.
    pub bbox: BoundingBox,
}

impl SortableItem {
    /// Creates an item.
    #[must_use]
    pub fn new(key: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            key: key.into(),
            bbox,
        }
    }

    /// Height of the item's box.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bbox.height()
    }

    fn vertical_midpoint(&self) -> f64 {
        self.bbox.center().y
    }
}

/// Ordered, keyed boxes of a vertical stack.
///
/// Keys are unique: [`SortableLayoutState::new`] keeps the first item of each
/// key. Operations naming a key that is not present return the state
/// unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SortableLayoutState {
    items: Vec<SortableItem>,
}

impl SortableLayoutState {
    /// Creates a layout from items in placement order.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = SortableItem>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| seen.insert(item.key.clone()))
            .collect();
        Self { items }
    }

    /// Items in placement order.
    #[must_use]
    pub fn items(&self) -> &[SortableItem] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the layout has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks an item up by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SortableItem> {
        self.items.iter().find(|item| item.key == key)
    }

    /// Placement index of `key`.
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| item.key == key)
    }

    /// Whether an item with `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }

    /// Sum of the item heights.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.items.iter().map(SortableItem::height).sum()
    }

    /// Re-inserts `dragged` according to its vertical position.
    ///
    /// The dragged item goes before the first other item whose midpoint lies
    /// below the dragged item's midpoint, or last if there is none. Its box is
    /// replaced by the dragged box. An item with a new key is inserted.
    #[must_use]
    pub fn move_index_according_to_position(&self, dragged: &SortableItem) -> Self {
        let mut items: Vec<_> = self
            .items
            .iter()
            .filter(|item| item.key != dragged.key)
            .cloned()
            .collect();
        let y = dragged.vertical_midpoint();
        let index = items
            .iter()
            .position(|item| y < item.vertical_midpoint())
            .unwrap_or(items.len());
        items.insert(index, dragged.clone());
        Self { items }
    }

    /// Packs the boxes into a contiguous column starting at `(0, 0)`.
    ///
    /// Each box keeps its width and height; there are no gaps or overlaps.
    #[must_use]
    pub fn align(&self) -> Self {
        let mut y = 0.0;
        let items = self
            .items
            .iter()
            .map(|item| {
                let bbox = BoundingBox::by_deltas(0.0, y, item.bbox.width(), item.height());
                y += item.height();
                SortableItem::new(item.key.clone(), bbox)
            })
            .collect();
        Self { items }
    }

    /// Moves the item with `key` to the end of the placement order.
    #[must_use]
    pub fn place_to_bottom_by_key(&self, key: &str) -> Self {
        let Some(index) = self.index_of(key) else {
            return self.unknown_key(key);
        };
        let mut items = self.items.clone();
        let item = items.remove(index);
        items.push(item);
        Self { items }
    }

    /// Removes the item with `key`.
    #[must_use]
    pub fn remove_by_key(&self, key: &str) -> Self {
        if !self.contains_key(key) {
            return self.unknown_key(key);
        }
        let items = self
            .items
            .iter()
            .filter(|item| item.key != key)
            .cloned()
            .collect();
        Self { items }
    }

    /// Whether `item` fits in a container of `container_height` next to the
    /// other items.
    ///
    /// An item already in the layout is not counted twice.
    #[must_use]
    pub fn can_drop(&self, item: &SortableItem, container_height: f64) -> bool {
        let others: f64 = self
            .items
            .iter()
            .filter(|other| other.key != item.key)
            .map(SortableItem::height)
            .sum();
        others + item.height() <= container_height
    }

    /// Items in key order, independent of placement.
    #[must_use]
    pub fn sorted_by_key(&self) -> Vec<&SortableItem> {
        let mut items: Vec<_> = self.items.iter().collect();
        items.sort_by(|a, b| a.key.cmp(&b.key));
        items
    }

    fn unknown_key(&self, key: &str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(key, "sortable operation on unknown key ignored");
        let _ = key;
        self.clone()
    }
}

/// Where a dragged item is relative to a [`SortableContainer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPlacement {
    /// The item overlaps the container.
    Inside,
    /// The item does not overlap the container.
    Outside,
}

/// Result of a drag move, for the host's visual feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragFeedback {
    /// Where the item is.
    pub placement: DragPlacement,
    /// Whether the container has room for the item.
    pub can_drop: bool,
}

/// A container box holding a sortable stack, driven by drag events.
///
/// The container box is kept at the origin; item boxes passed to the event
/// methods are in the container's local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SortableContainer {
    bbox: BoundingBox,
    layout: SortableLayoutState,
}

impl SortableContainer {
    /// Creates a container of the size of `bbox` and aligns `layout` in it.
    #[must_use]
    pub fn new(bbox: BoundingBox, layout: SortableLayoutState) -> Self {
        Self {
            bbox: bbox.reset_origin(),
            layout: layout.align(),
        }
    }

    /// The container box, at the origin.
    #[must_use]
    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// The current layout.
    #[must_use]
    pub fn layout(&self) -> &SortableLayoutState {
        &self.layout
    }

    /// Whether `item` overlaps the container.
    #[must_use]
    pub fn placement(&self, item: &SortableItem) -> DragPlacement {
        if self.bbox.is_intersect(&item.bbox) {
            DragPlacement::Inside
        } else {
            DragPlacement::Outside
        }
    }

    /// Whether the container has room for `item`.
    #[must_use]
    pub fn can_drop(&self, item: &SortableItem) -> bool {
        self.layout.can_drop(item, self.bbox.height())
    }

    /// Handles one move of an item dragged out of this container.
    ///
    /// Over the container the item takes the slot under it; outside it, the
    /// item moves to the bottom so the remaining items close the gap.
    pub fn drag_move(&mut self, item: &SortableItem) -> DragFeedback {
        let placement = self.placement(item);
        self.layout = match placement {
            DragPlacement::Inside => self.layout.move_index_according_to_position(item),
            DragPlacement::Outside => self.layout.place_to_bottom_by_key(&item.key),
        }
        .align();
        DragFeedback {
            placement,
            can_drop: self.can_drop(item),
        }
    }

    /// Ends a drag of an item from this container.
    ///
    /// If another container accepted the item it leaves this one; otherwise
    /// it snaps into the slot under its drop position.
    pub fn drop_item(&mut self, item: &SortableItem, accepted_elsewhere: bool) {
        self.layout = if accepted_elsewhere {
            self.layout.remove_by_key(&item.key)
        } else {
            self.layout.move_index_according_to_position(item)
        }
        .align();
    }

    /// A foreign item is dragged into the container.
    ///
    /// Returns `false`, leaving the layout unchanged, when there is no room.
    pub fn third_party_enter(&mut self, item: &SortableItem) -> bool {
        self.admit(item)
    }

    /// A foreign item left the container before being dropped.
    pub fn third_party_exit(&mut self, key: &str) {
        self.layout = self.layout.remove_by_key(key).align();
    }

    /// A foreign item is dropped into the container.
    ///
    /// Returns whether the container accepted it.
    pub fn third_party_drop(&mut self, item: &SortableItem) -> bool {
        self.admit(item)
    }

    /// Items in stable key order for rendering.
    #[must_use]
    pub fn rendered_items(&self) -> Vec<&SortableItem> {
        self.layout.sorted_by_key()
    }

    fn admit(&mut self, item: &SortableItem) -> bool {
        if !self.can_drop(item) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                key = item.key.as_str(),
                height = item.height(),
                capacity = self.bbox.height(),
                "sortable drop rejected: container full"
            );
            return false;
        }
        self.layout = self.layout.move_index_according_to_position(item).align();
        true
    }
}
