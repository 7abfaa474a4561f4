// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constrained box resizing.
//!
//! [`resolve`] takes the box a resize gesture proposes and corrects it against a
//! [`ResizeConstraints`] value. The steps run in a fixed order, and each may
//! undo the previous one:
//!
//! 1. Force the aspect ratio, if one is set ([`BoundingBox::set_aspect_ratio`]).
//! 2. Clamp width and height into the size bounds.
//! 3. Re-anchor the box about the transform origin so the edges the user is not
//!    dragging stay put ([`BoundingBox::place_in_same_origin`]).
//! 4. Clip into the outer box.
//! 5. If an aspect ratio was requested and the result no longer has it (within
//!    [`ResizeConstraints::aspect_ratio_tolerance`]), reject the whole resize and
//!    return the source box.
//!
//! ```rust
//! use understory_geometry::{BoundingBox, Point};
//! use understory_interaction::resize::{ResizeConstraints, resolve};
//!
//! let source = BoundingBox::by_deltas(0.0, 0.0, 100.0, 100.0);
//! let proposed = BoundingBox::by_deltas(0.0, 0.0, 200.0, 50.0);
//! let constraints = ResizeConstraints::default().with_aspect_ratio(Some(1.0));
//!
//! let resolved = resolve(proposed, source, Point::ZERO, &constraints);
//! assert_eq!(resolved.dx(), resolved.dy());
//! ```

use understory_geometry::{BoundingBox, Point, SizeBounds};

/// Default relative tolerance for aspect-ratio drift, about five significant
/// digits.
pub const DEFAULT_ASPECT_RATIO_TOLERANCE: f64 = 1e-5;

/// Constraints applied by [`resolve`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResizeConstraints {
    /// Locked width/height ratio, if any.
    pub aspect_ratio: Option<f64>,
    /// Width and height limits.
    pub size_bounds: SizeBounds,
    /// Container the box must stay inside.
    pub outer_box: BoundingBox,
    /// Relative drift of the aspect ratio beyond which a resize is rejected.
    pub aspect_ratio_tolerance: f64,
}

impl Default for ResizeConstraints {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeConstraints {
    /// No aspect lock, no size bounds, unbounded container.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            aspect_ratio: None,
            size_bounds: SizeBounds::without(),
            outer_box: BoundingBox::infinite(),
            aspect_ratio_tolerance: DEFAULT_ASPECT_RATIO_TOLERANCE,
        }
    }

    /// Sets the locked aspect ratio.
    #[must_use]
    pub const fn with_aspect_ratio(mut self, aspect_ratio: Option<f64>) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Sets the size bounds.
    #[must_use]
    pub const fn with_size_bounds(mut self, size_bounds: SizeBounds) -> Self {
        self.size_bounds = size_bounds;
        self
    }

    /// Sets the container box.
    #[must_use]
    pub const fn with_outer_box(mut self, outer_box: BoundingBox) -> Self {
        self.outer_box = outer_box;
        self
    }

    /// Sets the aspect-ratio drift tolerance.
    #[must_use]
    pub const fn with_aspect_ratio_tolerance(mut self, tolerance: f64) -> Self {
        self.aspect_ratio_tolerance = tolerance;
        self
    }

    /// Same as [`resolve`] with these constraints.
    #[must_use]
    pub fn resolve(
        &self,
        resized: BoundingBox,
        source: BoundingBox,
        transform_origin: Point,
    ) -> BoundingBox {
        resolve(resized, source, transform_origin, self)
    }

    fn keeps_aspect_ratio(&self, ratio: f64, bbox: &BoundingBox) -> bool {
        let actual = bbox.aspect_ratio();
        (actual - ratio).abs() <= self.aspect_ratio_tolerance * ratio.abs()
    }
}

/// Corrects a proposed box against `constraints`.
///
/// - `resized` is the box the gesture proposes.
/// - `source` is the box before the gesture started.
/// - `transform_origin` is the normalized point of the box that stays fixed
///   (for example `(0, 0)` when dragging the `(x2, y2)` corner).
///
/// Never panics. When the constraints cannot be met together the result is
/// `source`, unchanged.
#[must_use]
pub fn resolve(
    resized: BoundingBox,
    source: BoundingBox,
    transform_origin: Point,
    constraints: &ResizeConstraints,
) -> BoundingBox {
    let mut bbox = resized;

    if let Some(ratio) = constraints.aspect_ratio {
        bbox = bbox.set_aspect_ratio(ratio);
    }

    bbox = constraints.size_bounds.constrain(bbox);
    bbox = bbox.place_in_same_origin(source, transform_origin);
    bbox = constraints.outer_box.clip_inner(bbox);

    if let Some(ratio) = constraints.aspect_ratio
        && !constraints.keeps_aspect_ratio(ratio, &bbox)
    {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            requested = ratio,
            actual = bbox.aspect_ratio(),
            "resize rejected: aspect ratio broken by constraints"
        );
        return source;
    }

    bbox
}
