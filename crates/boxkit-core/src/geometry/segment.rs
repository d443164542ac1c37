//! Ordered pair of points; the unit of work for the dash compilers.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use super::{Point, DEGENERATE_X_EPSILON};

/// A directed line segment from `start` to `end`.
///
/// Segments carry no material or style information; the dash and zigzag
/// compilers derive everything from the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// `end - start`, with an exactly-vertical delta nudged off zero x so
    /// that [`angle`](Self::angle) stays total.
    pub fn delta(&self) -> Point {
        let delta = self.end - self.start;
        let dx = if delta.x == 0.0 {
            DEGENERATE_X_EPSILON
        } else {
            delta.x
        };
        Point::new(dx, delta.y)
    }

    pub fn angle(&self) -> f64 {
        self.delta().angle()
    }

    /// Angle of the left-hand normal: `angle() + PI / 2`.
    pub fn angle_ortho(&self) -> f64 {
        self.angle() + FRAC_PI_2
    }

    pub fn length(&self) -> f64 {
        self.delta().length()
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// The segment oriented so x increases from start to end.
    pub fn asc_x(&self) -> Self {
        if self.start.x < self.end.x {
            *self
        } else {
            self.reversed()
        }
    }

    /// The segment oriented so y increases from start to end.
    pub fn asc_y(&self) -> Self {
        if self.start.y < self.end.y {
            *self
        } else {
            self.reversed()
        }
    }
}
