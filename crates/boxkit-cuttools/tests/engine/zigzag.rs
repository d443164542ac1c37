//! Finger-joint zigzag behavior.

use approx::assert_relative_eq;
use boxkit_core::{Point, Segment};
use boxkit_cuttools::{Dasher, DasherConfig, PathCommand};

fn dasher(thickness: f64) -> Dasher {
    Dasher::new(DasherConfig {
        model_dash_length: 1.0,
        model_dash_period: 2.0,
        stock_thickness: thickness,
    })
    .expect("valid config")
}

fn points(commands: &[PathCommand]) -> Vec<Point> {
    commands
        .iter()
        .filter_map(|c| match *c {
            PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => Some(Point::new(x, y)),
            _ => None,
        })
        .collect()
}

#[test]
fn endpoints_are_idempotent_for_both_inversions() {
    let dasher = dasher(2.0);
    let segment = Segment::new(Point::new(1.0, 1.0), Point::new(13.0, 6.0));

    for invert in [false, true] {
        let path = dasher.zigzag(&segment, invert).expect("zigzag");
        let pts = points(path.commands());
        let first = pts.first().expect("non-empty");
        let last = pts.last().expect("non-empty");

        assert_relative_eq!(first.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(first.y, 1.0, epsilon = 1e-9);
        assert_relative_eq!(last.x, 13.0, epsilon = 1e-9);
        assert_relative_eq!(last.y, 6.0, epsilon = 1e-9);
        assert_eq!(path.current_point(), Some(*last));
    }
}

#[test]
fn zero_thickness_collapses_to_the_plain_perforation() {
    let dasher = dasher(0.0);
    let segment = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));

    let path = dasher.zigzag(&segment, false).expect("zigzag");
    let span = dasher.span_sequence(&segment).expect("span");

    // Every emitted point stays on the segment line; no teeth remain.
    for p in points(path.commands()) {
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    // The distinct points are exactly the dash endpoints, in order.
    let mut distinct: Vec<Point> = Vec::new();
    for p in points(path.commands()) {
        if distinct.last().map_or(true, |last| (*last - p).length() > 1e-12) {
            distinct.push(p);
        }
    }
    let expected: Vec<Point> = span.iter().flat_map(|d| [d.start, d.end]).collect();
    assert_eq!(distinct.len(), expected.len());
    for (got, want) in distinct.iter().zip(&expected) {
        assert_relative_eq!(got.x, want.x, epsilon = 1e-12);
        assert_relative_eq!(got.y, want.y, epsilon = 1e-12);
    }
}

#[test]
fn inversion_mirrors_the_teeth() {
    let dasher = dasher(1.5);
    let segment = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));

    let upper = points(dasher.zigzag(&segment, false).expect("zigzag").commands());
    let lower = points(dasher.zigzag(&segment, true).expect("zigzag").commands());

    assert_eq!(upper.len(), lower.len());
    for (u, l) in upper.iter().zip(&lower) {
        assert_relative_eq!(u.x, l.x, epsilon = 1e-9);
        assert_relative_eq!(u.y, -l.y, epsilon = 1e-9);
    }
}

#[test]
fn teeth_pitch_matches_the_scaled_period() {
    let dasher = dasher(2.0);
    let segment = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    let span = dasher.span_sequence(&segment).expect("span");

    // Tooth pitch is the distance between consecutive dash starts.
    let pitch = span[1].start.x - span[0].start.x;
    assert_relative_eq!(pitch, 2.0 * 10.0 / 11.0, epsilon = 1e-9);

    // The zigzag visits each tooth's two outer corners at that pitch.
    let path = dasher.zigzag(&segment, false).expect("zigzag");
    let outer: Vec<Point> = points(path.commands())
        .into_iter()
        .filter(|p| p.y > 1.0)
        .collect();
    assert_eq!(outer.len(), 2 * (span.len() - 1));
    let gap_width = outer[1].x - outer[0].x;
    assert_relative_eq!(gap_width, pitch - 10.0 / 11.0, epsilon = 1e-9);
}
