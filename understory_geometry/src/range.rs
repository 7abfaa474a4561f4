// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// One-dimensional interval between two endpoints.
///
/// A `NumericRange` is directionless by default: `start` may be greater than
/// `end`, which models inverted or collapsed ranges. Every operation tolerates
/// that ordering, and every "mutator" returns a new value.
///
/// The [`NumericRange::infinite`] range is used as the "no constraint" sentinel
/// wherever bounds are optional.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericRange {
    /// First endpoint.
    pub start: f64,
    /// Second endpoint.
    pub end: f64,
}

impl NumericRange {
    /// Creates a range from its two endpoints.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Creates the range `[0, delta]`.
    #[must_use]
    pub const fn by_only_delta(delta: f64) -> Self {
        Self::new(0.0, delta)
    }

    /// The unbounded range `[-∞, +∞]`.
    #[must_use]
    pub const fn infinite() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// The unit range `[0, 1]` that normalized values live in.
    #[must_use]
    pub const fn normalization_bounds() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Signed distance from `start` to `end`.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.end - self.start
    }

    /// Unsigned length of the range.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.delta().abs()
    }

    /// The smaller endpoint.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.start.min(self.end)
    }

    /// The larger endpoint.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.start.max(self.end)
    }

    /// Returns `true` if `x` lies between the endpoints (inclusive).
    #[must_use]
    pub fn includes(&self, x: f64) -> bool {
        self.min() <= x && x <= self.max()
    }

    /// Clamps `x` into the range.
    ///
    /// Unlike [`f64::clamp`] this never panics on reversed endpoints.
    #[must_use]
    pub fn clamp_number(&self, x: f64) -> f64 {
        x.max(self.min()).min(self.max())
    }

    /// Maps `x` into the unit interval relative to this range.
    ///
    /// The result is not finite when the range has zero length; callers must
    /// avoid normalizing against a collapsed range.
    #[must_use]
    pub fn normalize_number(&self, x: f64) -> f64 {
        (x - self.start) / self.delta()
    }

    /// Inverse of [`NumericRange::normalize_number`].
    #[must_use]
    pub fn denormalize_number(&self, t: f64) -> f64 {
        self.start + t * self.delta()
    }

    /// Clamps `inner` into this range as a whole interval.
    ///
    /// When `inner` fits it is translated (its length is preserved); when it is
    /// longer than this range both endpoints are clamped individually. The
    /// orientation of `inner` is kept in both cases.
    #[must_use]
    pub fn clamp_inner(&self, inner: Self) -> Self {
        if inner.length() > self.length() {
            return inner.map(|x| self.clamp_number(x));
        }
        let offset = if inner.min() < self.min() {
            self.min() - inner.min()
        } else if inner.max() > self.max() {
            self.max() - inner.max()
        } else {
            0.0
        };
        inner.shift(offset)
    }

    /// Returns a copy with `start` replaced.
    #[must_use]
    pub const fn set_start(&self, start: f64) -> Self {
        Self::new(start, self.end)
    }

    /// Returns a copy with `end` replaced.
    #[must_use]
    pub const fn set_end(&self, end: f64) -> Self {
        Self::new(self.start, end)
    }

    /// Moves `start` by `offset`.
    #[must_use]
    pub fn shift_start(&self, offset: f64) -> Self {
        self.set_start(self.start + offset)
    }

    /// Moves `end` by `offset`.
    #[must_use]
    pub fn shift_end(&self, offset: f64) -> Self {
        self.set_end(self.end + offset)
    }

    /// Translates both endpoints by `offset`.
    #[must_use]
    pub fn shift(&self, offset: f64) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }

    /// Swaps `start` and `end`.
    #[must_use]
    pub const fn invert(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Applies `f` to both endpoints, preserving which one is `start`.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::new(f(self.start), f(self.end))
    }

    /// Clamps the length into `limits`, keeping `start` and the orientation.
    #[must_use]
    pub fn constrain_size(&self, limits: Self) -> Self {
        let length = limits.clamp_number(self.length());
        let delta = if self.delta() < 0.0 { -length } else { length };
        self.set_end(self.start + delta)
    }

    /// Translates the range so that the point at normalized position `anchor`
    /// lands on `value`.
    ///
    /// `anchor = 0.0` pins `start`, `anchor = 1.0` pins `end`.
    #[must_use]
    pub fn move_to(&self, value: f64, anchor: f64) -> Self {
        self.shift(value - self.denormalize_number(anchor))
    }
}
