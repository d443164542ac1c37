//! Property tests for the rail builders and the dash compiler.

use boxkit_core::{summation_sequence, symmetric_mirrored_summation_sequence, Point, Segment};
use boxkit_cuttools::{Dasher, DasherConfig};
use proptest::prelude::*;

proptest! {
    #[test]
    fn summation_is_strictly_increasing(
        lengths in prop::collection::vec(0.01f64..100.0, 1..12)
    ) {
        let coords = summation_sequence(&lengths);
        prop_assert_eq!(coords.len(), lengths.len());
        for pair in coords.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn mirrored_summation_is_increasing_and_antisymmetric(
        lengths in prop::collection::vec(0.01f64..100.0, 1..12)
    ) {
        let coords = symmetric_mirrored_summation_sequence(&lengths);
        let n = coords.len();
        prop_assert_eq!(n, 2 * lengths.len());
        for pair in coords.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for i in 0..n {
            prop_assert_eq!(coords[i], -coords[n - 1 - i]);
        }
    }

    #[test]
    fn dash_tiling_meets_both_endpoints(length in 0.1f64..1000.0) {
        let dasher = Dasher::new(DasherConfig {
            model_dash_length: 0.04,
            model_dash_period: 0.2,
            stock_thickness: 0.0,
        }).unwrap();
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(length, 0.0));
        let dashes = dasher.span_sequence(&segment).unwrap();

        let first = dashes.first().unwrap();
        let last = dashes.last().unwrap();
        prop_assert!((first.start.x - 0.0).abs() < 1e-9);
        prop_assert!((last.end.x - length).abs() < 1e-9);

        // Dashes never extend past the segment nor overlap each other.
        for pair in dashes.windows(2) {
            prop_assert!(pair[0].end.x < pair[1].start.x);
        }
    }

    #[test]
    fn zigzag_endpoints_match_the_segment(
        x0 in -50.0f64..50.0,
        y0 in -50.0f64..50.0,
        dx in 1.0f64..60.0,
        dy in -30.0f64..30.0,
        invert in any::<bool>(),
    ) {
        let dasher = Dasher::new(DasherConfig {
            model_dash_length: 0.5,
            model_dash_period: 1.5,
            stock_thickness: 0.7,
        }).unwrap();
        let start = Point::new(x0, y0);
        let end = Point::new(x0 + dx, y0 + dy);
        let path = dasher.zigzag(&Segment::new(start, end), invert).unwrap();

        let current = path.current_point().unwrap();
        prop_assert!((current - end).length() < 1e-9);
    }
}
