//! Property-based tests for geometry primitives and the waypoint stream.
//!
//! Run with: cargo test -p latticekit-core -- proptest

use latticekit_core::{ExtrusionState, Point, WaypointSequence};
use proptest::prelude::*;

fn arb_point() -> impl Strategy<Value = Point> {
    prop::array::uniform3(-500.0..500.0f64).prop_map(|[x, y, z]| Point::new(x, y, z))
}

/// A sequence of points with extrusion toggles sprinkled in.
fn arb_sequence() -> impl Strategy<Value = WaypointSequence> {
    prop::collection::vec((arb_point(), prop::option::of(any::<bool>())), 1..40).prop_map(
        |entries| {
            let mut seq = WaypointSequence::new();
            for (point, toggle) in entries {
                match toggle {
                    Some(true) => seq.push_state(ExtrusionState::Depositing),
                    Some(false) => seq.push_state(ExtrusionState::Traveling),
                    None => {}
                }
                seq.push_point(point);
            }
            seq
        },
    )
}

proptest! {
    #[test]
    fn proptest_polar_step_has_requested_length(
        start in arb_point(),
        length in 0.1..100.0f64,
        angle in -720.0..720.0f64,
    ) {
        let end = start.polar_step(length, angle);
        prop_assert!((start.distance_to(&end) - length).abs() < 1e-9 * length.max(1.0) * 100.0);
        prop_assert_eq!(end.z, start.z);
    }

    #[test]
    fn proptest_rotation_preserves_distance(
        p in arb_point(),
        centre in arb_point(),
        angle in -7.0..7.0f64,
    ) {
        let centre = Point::new(centre.x, centre.y, p.z);
        let rotated = p.rotate_about(&centre, angle);
        prop_assert!((centre.distance_to(&rotated) - centre.distance_to(&p)).abs() < 1e-6);
    }

    #[test]
    fn proptest_reflection_is_an_involution(
        p in arb_point(),
        mirror in arb_point(),
        angle in -180.0..180.0f64,
    ) {
        let back = p.reflect_xy_polar(&mirror, angle).reflect_xy_polar(&mirror, angle);
        prop_assert!(p.distance_to(&back) < 1e-6);
    }

    #[test]
    fn proptest_reversed_keeps_points_and_move_states(seq in arb_sequence()) {
        let rev = seq.reversed();
        prop_assert_eq!(rev.point_count(), seq.point_count());
        prop_assert_eq!(rev.final_state(), seq.final_state());

        let forward: Vec<_> = seq.visits().collect();
        let backward: Vec<_> = rev.visits().collect();
        let n = forward.len();
        for i in 0..n {
            prop_assert_eq!(backward[i].point, forward[n - 1 - i].point);
        }
        // the move into backward[i] retraces the move into forward[n - i]
        for i in 1..n {
            prop_assert_eq!(backward[i].state, forward[n - i].state);
        }
    }
}
