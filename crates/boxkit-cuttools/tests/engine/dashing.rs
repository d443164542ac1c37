//! Dash tiling behavior over a range of segment lengths and directions.

use approx::assert_relative_eq;
use boxkit_core::{Point, Segment};
use boxkit_cuttools::{Dasher, DasherConfig};

fn dasher(d: f64, p: f64) -> Dasher {
    Dasher::new(DasherConfig {
        model_dash_length: d,
        model_dash_period: p,
        stock_thickness: 0.0,
    })
    .expect("valid config")
}

#[test]
fn tiling_is_exact_across_sampled_lengths() {
    let dasher = dasher(0.04, 0.2);
    for length in [0.1, 1.0, 7.3, 100.0] {
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(length, 0.0));
        let dashes = dasher.span_sequence(&segment).expect("span");

        let first = dashes.first().expect("at least one dash");
        let last = dashes.last().expect("at least one dash");
        assert_relative_eq!(first.start.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(first.start.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(last.end.x, length, epsilon = 1e-9);
        assert_relative_eq!(last.end.y, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn dashes_are_uniform_and_ordered() {
    let dasher = dasher(1.0, 2.0);
    let segment = Segment::new(Point::new(2.0, 3.0), Point::new(14.0, 8.0));
    let dashes = dasher.span_sequence(&segment).expect("span");

    let dash_length = dashes[0].length();
    let mut previous_start = f64::NEG_INFINITY;
    for dash in &dashes {
        assert_relative_eq!(dash.length(), dash_length, epsilon = 1e-9);
        assert!(dash.start.x > previous_start);
        previous_start = dash.start.x;
    }
}

#[test]
fn diagonal_segment_endpoints_are_met() {
    let dasher = dasher(0.5, 1.5);
    let segment = Segment::new(Point::new(-3.0, 4.0), Point::new(9.0, -1.0));
    let dashes = dasher.span_sequence(&segment).expect("span");
    let last = dashes.last().expect("non-empty");
    assert_relative_eq!(last.end.x, 9.0, epsilon = 1e-9);
    assert_relative_eq!(last.end.y, -1.0, epsilon = 1e-9);
}

#[test]
fn single_dash_covers_a_short_segment() {
    // L below d: period count 0, one dash shrunk to the whole span.
    let dasher = dasher(1.0, 2.0);
    let segment = Segment::new(Point::new(0.0, 0.0), Point::new(0.9, 0.0));
    let dashes = dasher.span_sequence(&segment).expect("span");
    assert_eq!(dashes.len(), 1);
    assert_relative_eq!(dashes[0].length(), 0.9, epsilon = 1e-9);
}
