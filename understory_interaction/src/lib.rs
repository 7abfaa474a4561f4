// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_interaction --heading-base-level=0

//! Understory Interaction: headless models for direct-manipulation gestures.
//!
//! This crate turns raw pointer input into corrected geometry for a few common
//! interactions. It draws nothing and owns no event loop; the host feeds it
//! deltas, ticks and drops, and renders whatever comes back. Each module
//! handles one gesture:
//!
//! - [`resize`]: constrain a proposed box to an aspect ratio, size bounds and a
//!   container, keeping the edges the user is not dragging in place.
//! - [`handle`]: the eight resize handles, mapping a pointer delta to a
//!   proposed box and its fixed point.
//! - [`inertial`]: momentum scrolling with an elastic overscroll zone.
//! - [`sortable`]: drag-to-reorder vertical stacks, including items moved
//!   between containers.
//! - [`slider`]: one-dimensional range sliders along any [`Direction`].
//! - [`stateful`]: a change-reporting holder for the current state value.
//!
//! All geometry comes from [`understory_geometry`].
//!
//! ## Resizing
//!
//! ```rust
//! use understory_geometry::{BoundingBox, NumericRange, Point, SizeBounds};
//! use understory_interaction::handle::ResizeHandle;
//! use understory_interaction::resize::ResizeConstraints;
//!
//! let frame = BoundingBox::by_deltas(10.0, 10.0, 100.0, 50.0);
//! let constraints = ResizeConstraints::new()
//!     .with_size_bounds(SizeBounds::uniform(NumericRange::new(20.0, 160.0)))
//!     .with_outer_box(BoundingBox::by_deltas(0.0, 0.0, 300.0, 300.0));
//!
//! // Drag the bottom-right corner far out: the size bound wins and the
//! // top-left corner stays where it was.
//! let resized = ResizeHandle::BOTTOM_RIGHT.resize(frame, Point::new(500.0, 20.0), &constraints);
//! assert_eq!(resized.origin(), frame.origin());
//! assert_eq!(resized.width(), 160.0);
//! assert_eq!(resized.height(), 70.0);
//! ```
//!
//! ## Inertial scrolling
//!
//! ```rust
//! use understory_geometry::NumericRange;
//! use understory_interaction::inertial::{InertialScrollState, ScrollConstraints, ScrollPhase};
//!
//! let constraints = ScrollConstraints::with_overflow(NumericRange::new(0.0, 1000.0), 100.0);
//! // Released with some momentum.
//! let mut state = InertialScrollState::new(400.0, constraints, 2.0);
//! while state.is_active() {
//!     state = state.do_inertial_move(1.0);
//! }
//! assert_eq!(state.phase(), ScrollPhase::Settled);
//! assert!(state.coordinate() > 400.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Kurbo's float backend.
//! - `tracing`: emit `tracing` events when a gesture is rejected or clamped.
//! - `serde`: derive `Serialize`/`Deserialize` for configuration values.
//!
//! This crate is `no_std` compatible (with `alloc`).
//!
//! [`Direction`]: understory_geometry::Direction

#![no_std]

extern crate alloc;

pub mod handle;
pub mod inertial;
pub mod resize;
pub mod slider;
pub mod sortable;
pub mod stateful;
