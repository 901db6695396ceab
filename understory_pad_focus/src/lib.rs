// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Pad Focus: directional focus selection for pad-driven UIs.
//!
//! Given the position of the focused element, a requested direction, and the
//! positions of every other focusable element, this crate picks the element
//! that should receive focus next.
//!
//! ## Scoring
//!
//! Each candidate is measured against the request:
//!
//! - **angle**: the unsigned angle, in degrees, between the requested direction
//!   and the vector from the origin to the candidate (`0` is straight ahead,
//!   `180` is directly behind);
//! - **distance**: the squared length of that vector.
//!
//! Candidates at or beyond [`SelectionParams::max_angle_degrees`] are ignored.
//! The rest are ranked by `(angle + ANGLE_EPSILON) * distance² * distance_bias`
//! and the lowest [`Score`] wins; equal scores keep input order. Multiplying
//! the two lets a close, slightly off-axis element beat a far, perfectly
//! aligned one, while candidates straight ahead still dominate.
//!
//! A candidate sitting exactly on the origin has no direction at all. It
//! scores [`Score::Coincident`], which ranks below every measured score and is
//! never filtered by angle, so it always wins.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_pad_focus::{DirectionalPolicy, ScoredPolicy};
//!
//! let candidates = [
//!     Point::new(0.0, 10.0),
//!     Point::new(5.0, 5.0),
//!     Point::new(-20.0, 1.0),
//! ];
//! let policy = ScoredPolicy::default();
//!
//! // Straight up picks the aligned candidate.
//! assert_eq!(policy.select(Point::ZERO, Vec2::new(0.0, 1.0), &candidates), Some(0));
//! // Nothing lies below the origin.
//! assert_eq!(policy.select(Point::ZERO, Vec2::new(0.0, -1.0), &candidates), None);
//! ```
//!
//! Selection makes a single pass over a borrowed slice and never allocates,
//! so it can run every frame against a buffer the caller reuses.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`SelectionParams`].
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

use core::cmp::Ordering;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// Maximum number of candidates a host is expected to report per query.
pub const MAX_CANDIDATES: usize = 2048;

/// Added to every angle so that perfectly aligned candidates still rank by distance.
pub const ANGLE_EPSILON: f64 = 1e-6;

/// Tunables for [`select_best`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectionParams {
    /// Multiplier applied to squared distance in every score.
    pub distance_bias: f64,
    /// Candidates must be strictly closer than this to the requested direction, in degrees.
    pub max_angle_degrees: f64,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            distance_bias: 1.0,
            max_angle_degrees: 89.0,
        }
    }
}

impl SelectionParams {
    /// Returns `true` if the bias is finite and positive and the angle lies in `(0, 180]`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.distance_bias.is_finite()
            && self.distance_bias > 0.0
            && self.max_angle_degrees > 0.0
            && self.max_angle_degrees <= 180.0
    }
}

/// Ranking key for a candidate. Lower is better.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Score {
    /// The candidate sits exactly on the origin; ranks below every [`Score::Weighted`].
    Coincident,
    /// `(angle + ANGLE_EPSILON) * distance² * distance_bias`.
    Weighted(f64),
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Coincident, Self::Coincident) => Some(Ordering::Equal),
            (Self::Coincident, Self::Weighted(_)) => Some(Ordering::Less),
            (Self::Weighted(_), Self::Coincident) => Some(Ordering::Greater),
            (Self::Weighted(a), Self::Weighted(b)) => a.partial_cmp(b),
        }
    }
}

/// A scored focus candidate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    /// Position of the candidate in the caller's slice.
    pub index: usize,
    /// Candidate position.
    pub position: Point,
    /// Angle from the requested direction in degrees; `0` for a coincident candidate.
    pub angle: f64,
    /// Ranking key.
    pub score: Score,
}

impl Candidate {
    /// Returns `true` if this candidate passes the angle filter.
    ///
    /// Coincident candidates always pass.
    #[must_use]
    pub fn is_eligible(&self, max_angle_degrees: f64) -> bool {
        match self.score {
            Score::Coincident => true,
            Score::Weighted(score) => !score.is_nan() && self.angle < max_angle_degrees,
        }
    }
}

/// Unsigned angle between two vectors, in degrees within `[0, 180]`.
///
/// The cosine is clamped before `acos` so rounding cannot push it out of
/// domain. Returns NaN if either vector has zero length.
#[must_use]
pub fn angle_between(a: Vec2, b: Vec2) -> f64 {
    let cos = a.dot(b) / (a.hypot() * b.hypot());
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Score one candidate at `position` for a move from `origin` toward `direction`.
#[must_use]
pub fn evaluate(
    origin: Point,
    direction: Vec2,
    index: usize,
    position: Point,
    distance_bias: f64,
) -> Candidate {
    let to_target = position - origin;
    let distance_sq = to_target.hypot2();
    if distance_sq == 0.0 {
        return Candidate {
            index,
            position,
            angle: 0.0,
            score: Score::Coincident,
        };
    }
    let angle = angle_between(direction, to_target);
    Candidate {
        index,
        position,
        angle,
        score: Score::Weighted((angle + ANGLE_EPSILON) * (distance_sq * distance_bias)),
    }
}

/// Pick the best candidate for a move from `origin` toward `direction`.
///
/// Returns `None` when `candidates` is empty, when nothing passes the angle
/// filter, or when `direction` has zero length (there is nothing to measure
/// angles against). Ties keep the earliest candidate.
#[must_use]
pub fn select_best(
    origin: Point,
    direction: Vec2,
    candidates: &[Point],
    params: &SelectionParams,
) -> Option<Candidate> {
    if !direction.is_finite() || direction.hypot2() == 0.0 {
        return None;
    }

    let mut best: Option<Candidate> = None;
    for (index, &position) in candidates.iter().enumerate() {
        let candidate = evaluate(origin, direction, index, position, params.distance_bias);
        if !candidate.is_eligible(params.max_angle_degrees) {
            continue;
        }
        if best.is_none_or(|b| candidate.score < b.score) {
            best = Some(candidate);
        }
    }
    best
}

/// Trait for directional focus policies.
///
/// A policy receives the origin, the requested direction, and the positions
/// of the other focusable elements, and returns the index of the one to
/// focus, if any.
pub trait DirectionalPolicy {
    /// Pick the next focus target.
    fn select(&self, origin: Point, direction: Vec2, candidates: &[Point]) -> Option<usize>;
}

/// The angle × distance policy described in the crate docs.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScoredPolicy {
    /// Scoring and filtering parameters.
    pub params: SelectionParams,
}

impl ScoredPolicy {
    /// Create a policy with the given parameters.
    #[must_use]
    pub const fn new(params: SelectionParams) -> Self {
        Self { params }
    }
}

impl DirectionalPolicy for ScoredPolicy {
    fn select(&self, origin: Point, direction: Vec2, candidates: &[Point]) -> Option<usize> {
        select_best(origin, direction, candidates, &self.params).map(|c| c.index)
    }
}
