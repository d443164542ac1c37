//! Immutable 2D point, treated as a vector from the origin where useful.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use super::DEGENERATE_X_EPSILON;

/// A 2D coordinate. Copy value type; all operations return new points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at distance `r` from the origin at angle `theta` (radians).
    pub fn polar(r: f64, theta: f64) -> Self {
        Self::new(theta.cos(), theta.sin()) * r
    }

    /// Distance from the origin, as though a vector.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle from the origin, as though a vector.
    ///
    /// An exactly-zero x component is nudged to a small epsilon before the
    /// `atan2` call; a truly vertical vector reports an angle a hair off
    /// `PI / 2` instead of branching on the degenerate case.
    pub fn angle(&self) -> f64 {
        let x = if self.x == 0.0 {
            DEGENERATE_X_EPSILON
        } else {
            self.x
        };
        self.y.atan2(x)
    }

    /// Mirror across the y axis (negate x).
    pub fn mirror_x(&self) -> Self {
        Self::new(-self.x, self.y)
    }

    /// Mirror across the x axis (negate y).
    pub fn mirror_y(&self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Rotation about the origin by `theta` radians, counterclockwise.
    pub fn rotated(&self, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        self + rhs.mirror_x().mirror_y()
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.mirror_x().mirror_y()
    }
}
