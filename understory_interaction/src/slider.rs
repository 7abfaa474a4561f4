// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-dimensional range sliders along any [`Direction`].
//!
//! A slider value is a normalized range in `[0, 1]` in *logical* polarity:
//! `start` is the end closest to the direction's start side. The slider maps it
//! to a box inside its outer box and back, and turns pointer deltas on a handle
//! or on the body into a new value.
//!
//! Pointer deltas are physical (positive towards increasing `x` or `y`), so the
//! same host code drives reversed sliders.

use understory_geometry::{BoundingBox, BoxSide, Direction, NumericRange, SizeBounds};

/// Range slider configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slider {
    /// Axis and polarity.
    pub direction: Direction,
    /// Allowed normalized length of the value.
    pub size_limits: NumericRange,
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(Direction::HORIZONTAL)
    }
}

impl Slider {
    /// A slider along `direction` with unrestricted value length.
    #[must_use]
    pub const fn new(direction: Direction) -> Self {
        Self {
            direction,
            size_limits: NumericRange::normalization_bounds(),
        }
    }

    /// Sets the allowed normalized length of the value.
    #[must_use]
    pub const fn with_size_limits(mut self, size_limits: NumericRange) -> Self {
        self.size_limits = size_limits;
        self
    }

    /// The slider's box at the origin: `length` along the axis, `thickness`
    /// across it.
    #[must_use]
    pub fn outer_box(&self, length: f64, thickness: f64) -> BoundingBox {
        self.direction.box_from_ranges(
            NumericRange::by_only_delta(length),
            NumericRange::by_only_delta(thickness),
        )
    }

    /// Normalized size bounds of the value box.
    #[must_use]
    pub fn size_bounds(&self) -> SizeBounds {
        self.direction.size_bounds(self.size_limits)
    }

    /// Box covered by `value` inside `outer`, spanning its full thickness.
    #[must_use]
    pub fn value_box(&self, value: NumericRange, outer: BoundingBox) -> BoundingBox {
        let normalized = self.direction.box_from_ranges(
            self.direction.direct_normalized_range(value),
            NumericRange::normalization_bounds(),
        );
        outer.denormalize_inner(normalized)
    }

    /// Inverse of [`Slider::value_box`].
    #[must_use]
    pub fn value_of_box(&self, bbox: BoundingBox, outer: BoundingBox) -> NumericRange {
        let (parallel, _) = self.direction.ranges_of_box(outer.normalize_inner(bbox));
        self.direction.direct_normalized_range(parallel)
    }

    /// Drags the handle on `side` of the value box by `delta` pixels.
    ///
    /// The opposite handle stays put unless the size limits or the slider ends
    /// force it to move. `length` is the slider's extent along the axis; a
    /// side not perpendicular to the axis leaves `value` unchanged.
    #[must_use]
    pub fn drag_handle(
        &self,
        value: NumericRange,
        side: BoxSide,
        delta: f64,
        length: f64,
    ) -> NumericRange {
        let [low_side, high_side] = self.direction.sides();
        let physical = self.direction.direct_normalized_range(value);
        let t = normalized_delta(delta, length);
        let unit = NumericRange::normalization_bounds();

        let moved = if side == low_side {
            let start = unit.clamp_number(physical.start + t).min(physical.end);
            edit_range_start(physical, start, self.size_limits)
        } else if side == high_side {
            let end = unit.clamp_number(physical.end + t).max(physical.start);
            edit_range_end(physical, end, self.size_limits)
        } else {
            return value;
        };
        self.direction
            .direct_normalized_range(unit.clamp_inner(moved))
    }

    /// Drags the whole value box by `delta` pixels, keeping its length.
    #[must_use]
    pub fn drag_body(&self, value: NumericRange, delta: f64, length: f64) -> NumericRange {
        let physical = self.direction.direct_normalized_range(value);
        let moved = physical.shift(normalized_delta(delta, length));
        self.direction
            .direct_normalized_range(NumericRange::normalization_bounds().clamp_inner(moved))
    }
}

fn normalized_delta(delta: f64, length: f64) -> f64 {
    if length > 0.0 { delta / length } else { 0.0 }
}

/// Sets `range.start` to `value`, then restores the length into `limits`
/// keeping `range.end` fixed.
#[must_use]
pub fn edit_range_start(range: NumericRange, value: f64, limits: NumericRange) -> NumericRange {
    range
        .set_start(value)
        .constrain_size(limits)
        .move_to(range.end, 1.0)
}

/// Sets `range.end` to `value`, then restores the length into `limits`
/// keeping `range.start` fixed.
#[must_use]
pub fn edit_range_end(range: NumericRange, value: f64, limits: NumericRange) -> NumericRange {
    range
        .set_end(value)
        .constrain_size(limits)
        .move_to(range.start, 0.0)
}
