// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize handles: which edges of a box a pointer drag moves.

use understory_geometry::{BoundingBox, BoxSide, Point};

use crate::resize::{ResizeConstraints, resolve};

bitflags::bitflags! {
    /// The set of box edges moved by a resize handle.
    ///
    /// Corner handles combine two edges. The usual eight handles are listed in
    /// [`ResizeHandle::HANDLES`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ResizeHandle: u8 {
        /// Moves `x1`.
        const LEFT = 1 << 0;
        /// Moves `x2`.
        const RIGHT = 1 << 1;
        /// Moves `y1`.
        const TOP = 1 << 2;
        /// Moves `y2`.
        const BOTTOM = 1 << 3;
        /// Moves `x1` and `y1`.
        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        /// Moves `x2` and `y1`.
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        /// Moves `x1` and `y2`.
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        /// Moves `x2` and `y2`.
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

impl ResizeHandle {
    /// The four corners followed by the four edges.
    pub const HANDLES: [Self; 8] = [
        Self::TOP_LEFT,
        Self::TOP_RIGHT,
        Self::BOTTOM_RIGHT,
        Self::BOTTOM_LEFT,
        Self::TOP,
        Self::RIGHT,
        Self::BOTTOM,
        Self::LEFT,
    ];

    /// The edge handle for a single side.
    #[must_use]
    pub const fn from_side(side: BoxSide) -> Self {
        match side {
            BoxSide::Left => Self::LEFT,
            BoxSide::Right => Self::RIGHT,
            BoxSide::Top => Self::TOP,
            BoxSide::Bottom => Self::BOTTOM,
        }
    }

    /// Normalized point of the box that stays fixed while this handle moves.
    ///
    /// Along an axis with a moving edge this is the opposite edge; along an
    /// axis without one it is the midpoint, so aspect-locked edge drags grow
    /// symmetrically across the edge.
    #[must_use]
    pub fn transform_origin(self) -> Point {
        let axis = |start: Self, end: Self| match (self.contains(start), self.contains(end)) {
            (true, false) => 1.0,
            (false, true) => 0.0,
            _ => 0.5,
        };
        Point::new(axis(Self::LEFT, Self::RIGHT), axis(Self::TOP, Self::BOTTOM))
    }

    /// Moves this handle's edges of `source` by `delta`.
    ///
    /// Returns the unconstrained candidate box and the transform origin to
    /// resolve it with.
    #[must_use]
    pub fn apply(self, source: BoundingBox, delta: Point) -> (BoundingBox, Point) {
        let mut bbox = source;
        if self.contains(Self::LEFT) {
            bbox = bbox.set_x1(bbox.x1 + delta.x);
        }
        if self.contains(Self::RIGHT) {
            bbox = bbox.set_x2(bbox.x2 + delta.x);
        }
        if self.contains(Self::TOP) {
            bbox = bbox.set_y1(bbox.y1 + delta.y);
        }
        if self.contains(Self::BOTTOM) {
            bbox = bbox.set_y2(bbox.y2 + delta.y);
        }
        (bbox, self.transform_origin())
    }

    /// Drags this handle by `delta` and resolves the result against
    /// `constraints`.
    #[must_use]
    pub fn resize(
        self,
        source: BoundingBox,
        delta: impl Into<Point>,
        constraints: &ResizeConstraints,
    ) -> BoundingBox {
        let (resized, origin) = self.apply(source, delta.into());
        resolve(resized, source, origin, constraints)
    }
}
