// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orientation adapters.
//!
//! A [`Direction`] projects boxes, points, and sizes onto a `(parallel,
//! normal)` coordinate pair and back. Algorithms written against the projected
//! coordinates (a slider, a stack, a splitter) then work unchanged for
//! horizontal, vertical, and reversed layouts:
//!
//! ```rust
//! use understory_geometry::{BoundingBox, Direction};
//!
//! fn grow_along(direction: Direction, bbox: BoundingBox, amount: f64) -> BoundingBox {
//!     let (parallel, normal) = direction.ranges_of_box(bbox);
//!     direction.box_from_ranges(parallel.shift_end(amount), normal)
//! }
//!
//! let bbox = BoundingBox::by_deltas(0.0, 0.0, 10.0, 20.0);
//! assert_eq!(grow_along(Direction::HORIZONTAL, bbox, 5.0).width(), 15.0);
//! assert_eq!(grow_along(Direction::VERTICAL, bbox, 5.0).height(), 25.0);
//! ```

use kurbo::Size;

use crate::bounding_box::{BoundingBox, BoxSide};
use crate::point::Point;
use crate::range::NumericRange;
use crate::size_bounds::SizeBounds;

/// The axis a [`Direction`] runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Along the `x` axis.
    #[default]
    Horizontal,
    /// Along the `y` axis.
    Vertical,
}

impl Orientation {
    /// The other axis.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// An orientation plus a polarity.
///
/// There are exactly four directions, available as associated constants and
/// through [`Direction::ALL`]. They form a closed set under
/// [`Direction::opposite`], [`Direction::reversed`] and [`Direction::regular`].
///
/// Reversed directions project boxes and points exactly like their regular
/// counterparts; only the physical side considered the "start" changes (see
/// [`Direction::start_side`]). Callers use this to mirror a control's visual
/// polarity without branching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
    orientation: Orientation,
    is_reversed: bool,
}

impl Direction {
    /// Left to right.
    pub const HORIZONTAL: Self = Self::new(Orientation::Horizontal, false);
    /// Top to bottom.
    pub const VERTICAL: Self = Self::new(Orientation::Vertical, false);
    /// Right to left.
    pub const HORIZONTAL_REVERSED: Self = Self::new(Orientation::Horizontal, true);
    /// Bottom to top.
    pub const VERTICAL_REVERSED: Self = Self::new(Orientation::Vertical, true);

    /// All four directions, indexed by [`Direction::index`].
    pub const ALL: [Self; 4] = [
        Self::HORIZONTAL,
        Self::VERTICAL,
        Self::HORIZONTAL_REVERSED,
        Self::VERTICAL_REVERSED,
    ];

    /// Looks up the direction for an orientation and polarity.
    #[must_use]
    pub const fn new(orientation: Orientation, is_reversed: bool) -> Self {
        Self {
            orientation,
            is_reversed,
        }
    }

    /// Position of this direction in [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        let axis = match self.orientation {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
        };
        if self.is_reversed { axis + 2 } else { axis }
    }

    /// The axis this direction runs along.
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        self.orientation
    }

    /// Whether the physical start is at the far side of the axis.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        self.is_reversed
    }

    /// Same axis, no reversal.
    #[must_use]
    pub const fn regular(self) -> Self {
        Self::new(self.orientation, false)
    }

    /// The other axis, same polarity.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::new(self.orientation.flip(), self.is_reversed)
    }

    /// Same axis, flipped polarity.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.orientation, !self.is_reversed)
    }

    /// Extent of `size` along the axis.
    #[must_use]
    pub fn length(self, size: Size) -> f64 {
        match self.orientation {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// Extent of `size` across the axis.
    #[must_use]
    pub fn thickness(self, size: Size) -> f64 {
        self.opposite().length(size)
    }

    /// Splits `bbox` into its `(parallel, normal)` ranges.
    #[must_use]
    pub fn ranges_of_box(self, bbox: BoundingBox) -> (NumericRange, NumericRange) {
        match self.orientation {
            Orientation::Horizontal => (bbox.xs_range(), bbox.ys_range()),
            Orientation::Vertical => (bbox.ys_range(), bbox.xs_range()),
        }
    }

    /// Builds a box from `(parallel, normal)` ranges.
    #[must_use]
    pub fn box_from_ranges(self, parallel: NumericRange, normal: NumericRange) -> BoundingBox {
        match self.orientation {
            Orientation::Horizontal => BoundingBox::by_ranges(parallel, normal),
            Orientation::Vertical => BoundingBox::by_ranges(normal, parallel),
        }
    }

    /// Splits `point` into its `(parallel, normal)` coordinates.
    #[must_use]
    pub fn coordinates_of_point(self, point: Point) -> (f64, f64) {
        match self.orientation {
            Orientation::Horizontal => (point.x, point.y),
            Orientation::Vertical => (point.y, point.x),
        }
    }

    /// Builds a point from `(parallel, normal)` coordinates.
    #[must_use]
    pub fn point_of_coordinates(self, parallel: f64, normal: f64) -> Point {
        match self.orientation {
            Orientation::Horizontal => Point::new(parallel, normal),
            Orientation::Vertical => Point::new(normal, parallel),
        }
    }

    /// The box sides perpendicular to the axis, in coordinate order.
    #[must_use]
    pub const fn sides(self) -> [BoxSide; 2] {
        match self.orientation {
            Orientation::Horizontal => [BoxSide::Left, BoxSide::Right],
            Orientation::Vertical => [BoxSide::Top, BoxSide::Bottom],
        }
    }

    /// The side the direction starts from.
    #[must_use]
    pub const fn start_side(self) -> BoxSide {
        let [first, last] = self.sides();
        if self.is_reversed { last } else { first }
    }

    /// The side the direction runs towards.
    #[must_use]
    pub const fn end_side(self) -> BoxSide {
        self.reversed().start_side()
    }

    /// Converts a normalized `[0, 1]` range between logical and physical
    /// polarity.
    ///
    /// Regular directions return `range` untouched. Reversed directions mirror
    /// it about `0.5` and swap its endpoints, so `start` stays the endpoint
    /// closest to [`Direction::start_side`]. The mapping is its own inverse.
    #[must_use]
    pub fn direct_normalized_range(self, range: NumericRange) -> NumericRange {
        if self.is_reversed {
            range.map(|t| 1.0 - t).invert()
        } else {
            range
        }
    }

    /// Size bounds that limit only the extent along the axis.
    #[must_use]
    pub fn size_bounds(self, limits: NumericRange) -> SizeBounds {
        let bounds = self.box_from_ranges(limits, NumericRange::infinite());
        SizeBounds::new(bounds.xs_range(), bounds.ys_range())
    }
}
