// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::bounding_box::BoundingBox;
use crate::range::NumericRange;

/// Optional limits on a box's width and height.
///
/// A missing limit means the dimension is unconstrained, which is the same as
/// [`NumericRange::infinite`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeBounds {
    /// Allowed widths.
    pub width: Option<NumericRange>,
    /// Allowed heights.
    pub height: Option<NumericRange>,
}

impl SizeBounds {
    /// No limits on either dimension.
    #[must_use]
    pub const fn without() -> Self {
        Self {
            width: None,
            height: None,
        }
    }

    /// Limits on both dimensions.
    #[must_use]
    pub const fn new(width: NumericRange, height: NumericRange) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// The same limits for width and height.
    #[must_use]
    pub const fn uniform(limits: NumericRange) -> Self {
        Self::new(limits, limits)
    }

    /// Returns a copy with the width limit replaced.
    #[must_use]
    pub const fn with_width(mut self, width: Option<NumericRange>) -> Self {
        self.width = width;
        self
    }

    /// Returns a copy with the height limit replaced.
    #[must_use]
    pub const fn with_height(mut self, height: Option<NumericRange>) -> Self {
        self.height = height;
        self
    }

    /// Width limit, or the infinite range when unset.
    #[must_use]
    pub fn width_or_infinite(&self) -> NumericRange {
        self.width.unwrap_or(NumericRange::infinite())
    }

    /// Height limit, or the infinite range when unset.
    #[must_use]
    pub fn height_or_infinite(&self) -> NumericRange {
        self.height.unwrap_or(NumericRange::infinite())
    }

    /// Clamps `bbox`'s width and height independently into these limits.
    #[must_use]
    pub fn constrain(&self, bbox: BoundingBox) -> BoundingBox {
        bbox.constrain_size(self.width_or_infinite(), self.height_or_infinite())
    }
}
