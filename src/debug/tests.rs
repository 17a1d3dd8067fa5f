//! Debug domain: tests for gizmo geometry.

use bevy::prelude::*;

use super::gizmos::cone_arc_points;
use crate::triggers::facing_angle;

#[test]
fn test_cone_arc_spans_threshold_on_both_sides() {
    let direction = Vec3::Z;
    let arc = cone_arc_points(direction, 45.0, 2.0);
    assert_eq!(arc.len(), 31);

    for point in [arc[0], arc[30]] {
        assert!((point.length() - 2.0).abs() < 1e-4);
        let angle = facing_angle(direction, point).expect("angle");
        assert!((angle - 45.0).abs() < 1e-3);
    }

    // Middle sample lies on the required direction itself
    assert!(arc[15].abs_diff_eq(direction * 2.0, 1e-4));
}
