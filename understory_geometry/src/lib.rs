// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_geometry --heading-base-level=0

//! Understory Geometry: immutable range and box algebra for interactive UI.
//!
//! This crate provides the small value types that draggable and resizable
//! surfaces (sliders, resizable frames, sortable lists, zoomable viewers) are
//! built from:
//!
//! - [`NumericRange`]: a one-dimensional interval whose endpoints may be in
//!   either order, with clamping and normalization.
//! - [`Point`]: a 2D vector.
//! - [`BoundingBox`]: an axis-aligned rectangle made of two ranges, which may
//!   be flipped along either axis.
//! - [`SizeBounds`]: optional width/height limits.
//! - [`Direction`]: an orientation adapter that projects boxes and points onto
//!   `(parallel, normal)` coordinates so one algorithm serves horizontal,
//!   vertical, and reversed layouts.
//!
//! Every type is an immutable `Copy` value; every transform returns a new
//! value. None of the operations panic for non-NaN input, including collapsed
//! and infinite ranges. The one sharp edge is normalization against a
//! zero-length range, which yields a non-finite result.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_geometry::{BoundingBox, NumericRange, Point};
//!
//! // A 400x400 image and a viewport over part of it.
//! let image = BoundingBox::by_deltas(0.0, 0.0, 400.0, 400.0);
//! let viewport = BoundingBox::by_deltas(100.0, 100.0, 100.0, 100.0);
//!
//! // Express the viewport in 0..1 coordinates of the image.
//! let normalized = image.normalize_inner(viewport);
//! assert_eq!(normalized.xs_range(), NumericRange::new(0.25, 0.5));
//!
//! // Keep a dragged viewport inside the image without changing its size.
//! let dragged = viewport.shift(Point::new(350.0, 0.0));
//! let kept = image.clamp_inner(dragged);
//! assert_eq!(kept.x2, 400.0);
//! assert_eq!(kept.width(), 100.0);
//! ```
//!
//! Values convert to and from [`kurbo`] types (`Point`, `Vec2`, `Rect`, `Size`)
//! so they can be fed from the rest of the Understory stack.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Kurbo's float backend.
//! - `serde`: derive `Serialize`/`Deserialize` for all value types.
//!
//! This crate is `no_std`.

#![no_std]

mod bounding_box;
mod direction;
mod point;
mod range;
mod size_bounds;

pub use bounding_box::{BoundingBox, BoxSide};
pub use direction::{Direction, Orientation};
pub use point::Point;
pub use range::NumericRange;
pub use size_bounds::SizeBounds;
