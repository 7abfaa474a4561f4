// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inertial "rubber-band" scrolling.
//!
//! [`InertialScrollState`] is a one-dimensional physics value: a coordinate and
//! an impulse (velocity, with unit mass). Each animation tick the host calls
//! [`InertialScrollState::do_inertial_move`] and keeps the returned value; the
//! state never mutates in place.
//!
//! Outside the normal [`ScrollConstraints::bounds`] lies an elastic extrusion
//! zone. While the coordinate is in it, a constant force pushes it back towards
//! the bounds, and [`InertialScrollState::suppress_escape_impulse`] makes
//! further outward motion progressively harder. The outer edge of the zone,
//! [`ScrollConstraints::overflow_bounds`], is a hard stop.
//!
//! ## Usage
//!
//! 1) Create the state with [`InertialScrollState::initial`] when the
//!    interaction starts.
//! 2) On each drag delta, call [`InertialScrollState::drag_by`].
//! 3) After release, call [`InertialScrollState::do_inertial_move`] once per
//!    animation frame while [`InertialScrollState::is_active`] holds.
//!
//! ```rust
//! use understory_geometry::NumericRange;
//! use understory_interaction::inertial::{InertialScrollState, ScrollConstraints};
//!
//! let constraints = ScrollConstraints::with_overflow(NumericRange::new(0.0, 500.0), 80.0);
//! let mut state = InertialScrollState::initial(constraints).drag_by(-30.0);
//! assert!(state.in_extrusion_zone());
//!
//! while state.is_active() {
//!     state = state.do_inertial_move(1.0);
//! }
//! assert_eq!(state.coordinate(), 0.0);
//! ```

use understory_geometry::NumericRange;

/// Regions a scroll coordinate may occupy.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollConstraints {
    /// Where the coordinate rests.
    pub bounds: NumericRange,
    /// Elastic zone before the start of `bounds`, from its outer edge inwards.
    pub start_extrusion_zone: NumericRange,
    /// Elastic zone after the end of `bounds`, from its inner edge outwards.
    pub end_extrusion_zone: NumericRange,
    /// Hard limit the coordinate can never leave.
    pub overflow_bounds: NumericRange,
}

impl ScrollConstraints {
    /// Creates constraints from explicit zones.
    #[must_use]
    pub const fn new(
        bounds: NumericRange,
        start_extrusion_zone: NumericRange,
        end_extrusion_zone: NumericRange,
        overflow_bounds: NumericRange,
    ) -> Self {
        Self {
            bounds,
            start_extrusion_zone,
            end_extrusion_zone,
            overflow_bounds,
        }
    }

    /// Symmetric extrusion zones of width `overflow` on both sides of `bounds`.
    #[must_use]
    pub fn with_overflow(bounds: NumericRange, overflow: f64) -> Self {
        let bounds = NumericRange::new(bounds.min(), bounds.max());
        let overflow = overflow.abs();
        Self::new(
            bounds,
            NumericRange::new(bounds.start - overflow, bounds.start),
            NumericRange::new(bounds.end, bounds.end + overflow),
            NumericRange::new(bounds.start - overflow, bounds.end + overflow),
        )
    }
}

/// Friction and restoring-force constants, per unit of `dt`.
///
/// `dt` may be in any time unit as long as these constants are scaled to it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InertialParams {
    /// Impulse removed per unit time while moving.
    pub friction: f64,
    /// Impulse added per unit time towards the bounds while in an extrusion zone.
    pub extrusion: f64,
}

impl InertialParams {
    /// Default friction.
    pub const DEFAULT_FRICTION: f64 = 0.03;
    /// Default extrusion force.
    pub const DEFAULT_EXTRUSION: f64 = 0.05;
}

impl Default for InertialParams {
    fn default() -> Self {
        Self {
            friction: Self::DEFAULT_FRICTION,
            extrusion: Self::DEFAULT_EXTRUSION,
        }
    }
}

/// Coarse state of an [`InertialScrollState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPhase {
    /// At rest inside the bounds.
    Settled,
    /// Moving inside the bounds.
    Coasting,
    /// Overscrolled into an extrusion zone.
    InExtrusion,
}

/// Position and momentum of an inertial scroller.
///
/// Invariant: the coordinate is inside
/// [`ScrollConstraints::overflow_bounds`]. Constructing a state outside it
/// clamps the coordinate and zeroes the impulse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InertialScrollState {
    coordinate: f64,
    impulse: f64,
    constraints: ScrollConstraints,
    params: InertialParams,
}

impl InertialScrollState {
    /// Creates a state, enforcing the overflow invariant.
    #[must_use]
    pub fn new(coordinate: f64, constraints: ScrollConstraints, impulse: f64) -> Self {
        Self::with_params(coordinate, constraints, impulse, InertialParams::default())
    }

    /// Creates a state with explicit physics constants.
    #[must_use]
    pub fn with_params(
        coordinate: f64,
        constraints: ScrollConstraints,
        impulse: f64,
        params: InertialParams,
    ) -> Self {
        if constraints.overflow_bounds.includes(coordinate) {
            return Self {
                coordinate,
                impulse,
                constraints,
                params,
            };
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(coordinate, "scroll coordinate outside overflow bounds, clamped");
        Self {
            coordinate: constraints.overflow_bounds.clamp_number(coordinate),
            impulse: 0.0,
            constraints,
            params,
        }
    }

    /// A resting state at coordinate `0`.
    #[must_use]
    pub fn initial(constraints: ScrollConstraints) -> Self {
        Self::new(0.0, constraints, 0.0)
    }

    /// Current position.
    #[must_use]
    pub fn coordinate(&self) -> f64 {
        self.coordinate
    }

    /// Current impulse (velocity per tick).
    #[must_use]
    pub fn impulse(&self) -> f64 {
        self.impulse
    }

    /// Current constraints.
    #[must_use]
    pub fn constraints(&self) -> ScrollConstraints {
        self.constraints
    }

    /// Current physics constants.
    #[must_use]
    pub fn params(&self) -> InertialParams {
        self.params
    }

    /// Back to coordinate `0` at rest, keeping constraints and constants.
    #[must_use]
    pub fn reset(&self) -> Self {
        self.rebuild(0.0, 0.0)
    }

    /// Replaces the constraints, re-enforcing the overflow invariant.
    #[must_use]
    pub fn set_constraints(&self, constraints: ScrollConstraints) -> Self {
        Self::with_params(self.coordinate, constraints, self.impulse, self.params)
    }

    /// Replaces the impulse.
    #[must_use]
    pub fn set_impulse(&self, impulse: f64) -> Self {
        self.rebuild(self.coordinate, impulse)
    }

    /// Replaces the physics constants.
    #[must_use]
    pub fn set_params(&self, params: InertialParams) -> Self {
        Self { params, ..*self }
    }

    /// Whether the coordinate is outside the normal bounds.
    #[must_use]
    pub fn in_extrusion_zone(&self) -> bool {
        !self.constraints.bounds.includes(self.coordinate)
    }

    /// Whether another tick would change the state.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.impulse != 0.0 || self.in_extrusion_zone()
    }

    /// Coarse classification of the state.
    #[must_use]
    pub fn phase(&self) -> ScrollPhase {
        if self.in_extrusion_zone() {
            ScrollPhase::InExtrusion
        } else if self.impulse != 0.0 {
            ScrollPhase::Coasting
        } else {
            ScrollPhase::Settled
        }
    }

    /// Advances the coordinate by the current impulse.
    #[must_use]
    pub fn move_by_impulse(&self) -> Self {
        self.rebuild(self.coordinate + self.impulse, self.impulse)
    }

    /// Damps an impulse that pushes further out of the bounds.
    ///
    /// The impulse is scaled by `1 - k²`, where `k` is how deep the coordinate
    /// sits in the extrusion zone: `0` at its inner edge, `1` at its outer edge.
    /// Impulses pointing back towards the bounds are left alone.
    #[must_use]
    pub fn suppress_escape_impulse(&self) -> Self {
        let k = self.overflow_depth();
        if k == 0.0 || !self.tends_to_escape() {
            return *self;
        }
        self.set_impulse(self.impulse * (1.0 - k * k))
    }

    /// Applies a drag delta: the delta becomes the impulse, escape is
    /// suppressed, and the coordinate moves.
    ///
    /// The resulting impulse is kept, so releasing the drag continues with the
    /// last drag velocity.
    #[must_use]
    pub fn drag_by(&self, delta: f64) -> Self {
        self.set_impulse(delta)
            .suppress_escape_impulse()
            .move_by_impulse()
    }

    /// Advances the simulation by `dt`.
    ///
    /// Friction and the extrusion force are added to the impulse, then the
    /// coordinate moves by the new impulse. A tick that carries the coordinate
    /// out of the extrusion zone snaps it to the nearest bounds edge and stops
    /// it, so it never overshoots back and forth across the edge.
    #[must_use]
    pub fn do_inertial_move(&self, dt: f64) -> Self {
        debug_assert!(dt >= 0.0, "time step must be non-negative");
        let environment = self.extrusion_impulse(dt) + self.braking_impulse(dt);
        let next = self.set_impulse(self.impulse + environment).move_by_impulse();

        if self.in_extrusion_zone() && !next.in_extrusion_zone() {
            #[cfg(feature = "tracing")]
            tracing::trace!(coordinate = next.coordinate, "scroll left extrusion zone, snapped");
            return self.rebuild(self.constraints.bounds.clamp_number(self.coordinate), 0.0);
        }
        next
    }

    fn rebuild(&self, coordinate: f64, impulse: f64) -> Self {
        Self::with_params(coordinate, self.constraints, impulse, self.params)
    }

    fn tends_to_escape(&self) -> bool {
        let bounds = self.constraints.bounds;
        (self.coordinate < bounds.min() && self.impulse < 0.0)
            || (self.coordinate > bounds.max() && self.impulse > 0.0)
    }

    fn overflow_depth(&self) -> f64 {
        let ScrollConstraints {
            bounds,
            start_extrusion_zone,
            end_extrusion_zone,
            ..
        } = self.constraints;
        if self.coordinate < bounds.min() {
            1.0 - start_extrusion_zone.normalize_number(self.coordinate)
        } else if self.coordinate > bounds.max() {
            end_extrusion_zone.normalize_number(self.coordinate)
        } else {
            0.0
        }
    }

    /// Never overshoots: when friction would reverse the impulse, it cancels it.
    fn braking_impulse(&self, dt: f64) -> f64 {
        let cancel = -self.impulse;
        let friction = -sign(self.impulse) * self.params.friction * dt;
        if cancel.abs() <= friction.abs() {
            cancel
        } else {
            friction
        }
    }

    fn extrusion_impulse(&self, dt: f64) -> f64 {
        let bounds = self.constraints.bounds;
        let direction = if self.coordinate < bounds.min() {
            1.0
        } else if self.coordinate > bounds.max() {
            -1.0
        } else {
            0.0
        };
        dt * direction * self.params.extrusion
    }
}

/// Sign with `sign(0) == 0`, unlike [`f64::signum`].
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
