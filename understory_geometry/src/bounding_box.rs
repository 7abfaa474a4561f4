// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::point::Point;
use crate::range::NumericRange;

/// One of the four sides of a [`BoundingBox`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoxSide {
    /// The side at `x1`.
    Left,
    /// The side at `x2`.
    Right,
    /// The side at `y1`.
    Top,
    /// The side at `y2`.
    Bottom,
}

/// Axis-aligned rectangle made of two independent [`NumericRange`]s.
///
/// `x1`/`y1` are not required to be the minimum coordinates: a box may be
/// "flipped" along either axis. [`BoundingBox::dx`] and [`BoundingBox::dy`] are
/// signed accordingly, while [`BoundingBox::width`] and
/// [`BoundingBox::height`] are always non-negative.
///
/// Boxes are plain values. Every transform returns a new box.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// Horizontal start.
    pub x1: f64,
    /// Horizontal end.
    pub x2: f64,
    /// Vertical start.
    pub y1: f64,
    /// Vertical end.
    pub y2: f64,
}

impl BoundingBox {
    /// The collapsed box at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a box from its horizontal and vertical endpoints.
    #[must_use]
    pub const fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self { x1, x2, y1, y2 }
    }

    /// Creates a box from an origin and signed deltas.
    #[must_use]
    pub fn by_deltas(x0: f64, y0: f64, dx: f64, dy: f64) -> Self {
        Self::new(x0, x0 + dx, y0, y0 + dy)
    }

    /// Creates a box from its horizontal and vertical ranges.
    #[must_use]
    pub const fn by_ranges(xs: NumericRange, ys: NumericRange) -> Self {
        Self::new(xs.start, xs.end, ys.start, ys.end)
    }

    /// The unbounded box, used as "no containment".
    #[must_use]
    pub const fn infinite() -> Self {
        Self::by_ranges(NumericRange::infinite(), NumericRange::infinite())
    }

    /// The `(x1, y1)` corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Signed horizontal extent.
    #[must_use]
    pub fn dx(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Signed vertical extent.
    #[must_use]
    pub fn dy(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Unsigned horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.dx().abs()
    }

    /// Unsigned vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.dy().abs()
    }

    /// Unsigned size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// The horizontal range `[x1, x2]`.
    #[must_use]
    pub const fn xs_range(&self) -> NumericRange {
        NumericRange::new(self.x1, self.x2)
    }

    /// The vertical range `[y1, y2]`.
    #[must_use]
    pub const fn ys_range(&self) -> NumericRange {
        NumericRange::new(self.y1, self.y2)
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Width over height, signed.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.dx() / self.dy()
    }

    /// Returns a copy with `x1` replaced.
    #[must_use]
    pub const fn set_x1(&self, value: f64) -> Self {
        Self::new(value, self.x2, self.y1, self.y2)
    }

    /// Returns a copy with `x2` replaced.
    #[must_use]
    pub const fn set_x2(&self, value: f64) -> Self {
        Self::new(self.x1, value, self.y1, self.y2)
    }

    /// Returns a copy with `y1` replaced.
    #[must_use]
    pub const fn set_y1(&self, value: f64) -> Self {
        Self::new(self.x1, self.x2, value, self.y2)
    }

    /// Returns a copy with `y2` replaced.
    #[must_use]
    pub const fn set_y2(&self, value: f64) -> Self {
        Self::new(self.x1, self.x2, self.y1, value)
    }

    /// Clamps each of `inner`'s four coordinates into this box.
    ///
    /// This may distort `inner`'s aspect ratio; see
    /// [`BoundingBox::clamp_inner`] for the size-preserving variant.
    #[must_use]
    pub fn clip_inner(&self, inner: Self) -> Self {
        let xs = self.xs_range();
        let ys = self.ys_range();
        inner.map_ranges(|r| xs.clamp_number(r), |r| ys.clamp_number(r))
    }

    /// Clamps `inner`'s ranges as whole intervals into this box.
    ///
    /// `inner` keeps its size whenever it fits.
    #[must_use]
    pub fn clamp_inner(&self, inner: Self) -> Self {
        Self::by_ranges(
            self.xs_range().clamp_inner(inner.xs_range()),
            self.ys_range().clamp_inner(inner.ys_range()),
        )
    }

    /// Translates the origin by `offset`.
    #[must_use]
    pub fn shift(&self, offset: Point) -> Self {
        self.move_to(self.origin() + offset)
    }

    /// Places the origin at `origin`, keeping the deltas.
    #[must_use]
    pub fn move_to(&self, origin: Point) -> Self {
        Self::by_deltas(origin.x, origin.y, self.dx(), self.dy())
    }

    /// Translates the box so its origin is `(0, 0)`.
    #[must_use]
    pub fn reset_origin(&self) -> Self {
        self.move_to(Point::ZERO)
    }

    /// Expresses the box relative to `origin`.
    #[must_use]
    pub fn place_relatively(&self, origin: Point) -> Self {
        self.move_to(self.origin() - origin)
    }

    /// Moves the box so that it keeps its position relative to `source` about
    /// the normalized `transform_origin`.
    ///
    /// The point of the result at normalized position `transform_origin`
    /// coincides with the point of `source` at the same normalized position.
    /// `(0, 0)` keeps the `(x1, y1)` corner fixed, `(1, 1)` keeps `(x2, y2)`
    /// fixed and `(0.5, 0.5)` scales about the center.
    #[must_use]
    pub fn place_in_same_origin(&self, source: Self, transform_origin: Point) -> Self {
        let anchor = source.denormalize_point(transform_origin);
        self.move_to(anchor - transform_origin.component_mul(self.deltas()))
    }

    /// Clamps the width into `bounds`, keeping `x1` and the orientation.
    #[must_use]
    pub fn constrain_dx(&self, bounds: NumericRange) -> Self {
        Self::by_ranges(self.xs_range().constrain_size(bounds), self.ys_range())
    }

    /// Clamps the height into `bounds`, keeping `y1` and the orientation.
    #[must_use]
    pub fn constrain_dy(&self, bounds: NumericRange) -> Self {
        Self::by_ranges(self.xs_range(), self.ys_range().constrain_size(bounds))
    }

    /// Clamps width and height independently.
    #[must_use]
    pub fn constrain_size(&self, width: NumericRange, height: NumericRange) -> Self {
        self.constrain_dx(width).constrain_dy(height)
    }

    /// Grows the signed deltas by the given offsets, keeping the origin.
    #[must_use]
    pub fn shift_deltas(&self, offset_x: f64, offset_y: f64) -> Self {
        Self::by_deltas(self.x1, self.y1, self.dx() + offset_x, self.dy() + offset_y)
    }

    /// Forces `dx / dy == ratio` while preserving `dx + dy` and the origin.
    #[must_use]
    pub fn set_aspect_ratio(&self, ratio: f64) -> Self {
        let dy = (self.dx() + self.dy()) / (ratio + 1.0);
        let dx = ratio * dy;
        Self::by_deltas(self.x1, self.y1, dx, dy)
    }

    /// Expresses `inner` in coordinates normalized to this box.
    #[must_use]
    pub fn normalize_inner(&self, inner: Self) -> Self {
        let xs = self.xs_range();
        let ys = self.ys_range();
        inner.map_ranges(|x| xs.normalize_number(x), |y| ys.normalize_number(y))
    }

    /// Inverse of [`BoundingBox::normalize_inner`].
    #[must_use]
    pub fn denormalize_inner(&self, inner: Self) -> Self {
        let xs = self.xs_range();
        let ys = self.ys_range();
        inner.map_ranges(|x| xs.denormalize_number(x), |y| ys.denormalize_number(y))
    }

    /// Normalized coordinates of `point` within this box.
    #[must_use]
    pub fn normalize_point(&self, point: Point) -> Point {
        (point - self.origin()).component_div(self.deltas())
    }

    /// Position of the normalized `point` within this box.
    #[must_use]
    pub fn denormalize_point(&self, point: Point) -> Point {
        self.origin() + point.component_mul(self.deltas())
    }

    /// Applies `f` to all four coordinates.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::new(f(self.x1), f(self.x2), f(self.y1), f(self.y2))
    }

    /// Returns `true` if the interiors of the two boxes overlap.
    ///
    /// Boxes that only touch along an edge do not intersect.
    #[must_use]
    pub fn is_intersect(&self, other: &Self) -> bool {
        let overlaps = |a: NumericRange, b: NumericRange| a.min() < b.max() && b.min() < a.max();
        overlaps(self.xs_range(), other.xs_range()) && overlaps(self.ys_range(), other.ys_range())
    }

    /// Converts to a [`kurbo::Rect`], keeping the coordinate order.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x1, self.y1, self.x2, self.y2)
    }

    fn deltas(&self) -> Point {
        Point::new(self.dx(), self.dy())
    }

    fn map_ranges(&self, mut fx: impl FnMut(f64) -> f64, mut fy: impl FnMut(f64) -> f64) -> Self {
        Self::new(fx(self.x1), fx(self.x2), fy(self.y1), fy(self.y2))
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x0, rect.x1, rect.y0, rect.y1)
    }
}

impl From<BoundingBox> for Rect {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_rect()
    }
}
