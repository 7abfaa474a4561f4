// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Add, Mul, Neg, Sub};

use kurbo::Vec2;

/// Immutable 2D vector.
///
/// `Point` doubles as a position and as an offset; interactive code constantly
/// converts between the two (drag deltas, box origins, normalized positions)
/// so the distinction is not encoded in the type. Conversions to and from
/// [`kurbo::Point`] and [`kurbo::Vec2`] are provided for hosts.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a point from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Applies `f` to both components.
    #[must_use]
    pub fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y))
    }

    /// Returns a copy with `x` replaced.
    #[must_use]
    pub const fn set_x(self, x: f64) -> Self {
        Self::new(x, self.y)
    }

    /// Returns a copy with `y` replaced.
    #[must_use]
    pub const fn set_y(self, y: f64) -> Self {
        Self::new(self.x, y)
    }

    /// Moves `x` by `offset`.
    #[must_use]
    pub fn shift_x(self, offset: f64) -> Self {
        self.set_x(self.x + offset)
    }

    /// Moves `y` by `offset`.
    #[must_use]
    pub fn shift_y(self, offset: f64) -> Self {
        self.set_y(self.y + offset)
    }

    /// Multiplies both components by `k`.
    #[must_use]
    pub fn mul_k(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// Componentwise product.
    #[must_use]
    pub fn component_mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Componentwise quotient.
    #[must_use]
    pub fn component_div(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        let Self { x, y } = self.component_mul(other);
        x + y
    }

    /// Clamps `x` into `[min, max]`.
    #[must_use]
    pub fn clamp_x(self, min: f64, max: f64) -> Self {
        self.set_x(self.x.max(min).min(max))
    }

    /// Clamps `y` into `[min, max]`.
    #[must_use]
    pub fn clamp_y(self, min: f64, max: f64) -> Self {
        self.set_y(self.y.max(min).min(max))
    }

    /// Point reflection of `self` through `center`.
    #[must_use]
    pub fn reflect_around_point(self, center: Self) -> Self {
        center - (self - center)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        Vec2::from(self - other).hypot()
    }

    /// Returns the same components negated.
    #[must_use]
    pub fn negate(self) -> Self {
        -self
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.mul_k(rhs)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -4.0);
        assert_eq!(a + b, Point::new(4.0, -2.0));
        assert_eq!(a - b, Point::new(-2.0, 6.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(a.component_mul(b), Point::new(3.0, -8.0));
        assert_eq!(b.component_div(Point::new(3.0, 2.0)), Point::new(1.0, -2.0));
        assert_eq!(a.negate(), Point::new(-1.0, -2.0));
    }

    #[test]
    fn dot_and_distance() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(Point::ZERO.distance(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn reflect_around_point() {
        let p = Point::new(2.0, 3.0);
        let center = Point::new(5.0, 5.0);
        assert_eq!(p.reflect_around_point(center), Point::new(8.0, 7.0));
        assert_eq!(
            p.reflect_around_point(center).reflect_around_point(center),
            p
        );
    }

    #[test]
    fn component_setters_and_clamps() {
        let p = Point::new(10.0, -10.0);
        assert_eq!(p.set_x(1.0), Point::new(1.0, -10.0));
        assert_eq!(p.shift_y(4.0), Point::new(10.0, -6.0));
        assert_eq!(p.clamp_x(0.0, 5.0), Point::new(5.0, -10.0));
        assert_eq!(p.clamp_y(-1.0, 1.0), Point::new(10.0, -1.0));
        assert_eq!(p.map(f64::abs), Point::new(10.0, 10.0));
    }

    #[test]
    fn kurbo_round_trip() {
        let p = Point::new(1.5, -2.5);
        let k: kurbo::Point = p.into();
        assert_eq!(Point::from(k), p);
        let v: kurbo::Vec2 = p.into();
        assert_eq!(Point::from(v), p);
    }
}
