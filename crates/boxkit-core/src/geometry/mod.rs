//! 2D geometry primitives for cut-path computation.
//!
//! All types are plain `f64` value types with no interior mutability; every
//! operation returns a fresh value.

pub mod point;
pub mod rail;
pub mod segment;

pub use point::Point;
pub use segment::Segment;

use std::f64::consts::PI;

/// Substituted for an exactly-zero x component before calling `atan2`.
///
/// Vertical deltas are nudged off true vertical rather than special-cased,
/// so angle computation stays total over every non-degenerate segment. The
/// directional bias this introduces is far below cut tolerance.
pub(crate) const DEGENERATE_X_EPSILON: f64 = 0.00001;

pub(crate) const SQRT2_OVER_2: f64 = std::f64::consts::SQRT_2 * 0.5;

/// Converts degrees to radians.
pub fn deg2rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Axis-aligned extent of the bounding box of two points after a 45 degree
/// rotation. Layout clients use this to reserve bed space for rotated panels.
pub fn rotated_size(p1: Point, p2: Point) -> f64 {
    let dx = (p2.x - p1.x).abs();
    let dy = (p2.y - p1.y).abs();
    (dx + dy) * SQRT2_OVER_2
}
