//! Debug domain: gizmo drawing systems.

use bevy::prelude::*;

use crate::carry::{Carrier, CarryTuning, hold_target};
use crate::movement::{FirstPersonCamera, PlayerCamera};
use crate::triggers::FacingTrigger;

const DIRECTION_LENGTH: f32 = 2.0;
const CONE_SEGMENTS: usize = 30;

pub(crate) fn draw_carry_gizmos(
    mut gizmos: Gizmos,
    tuning: Res<CarryTuning>,
    carriers: Query<(&Carrier, &PlayerCamera)>,
    cameras: Query<&GlobalTransform, With<FirstPersonCamera>>,
) {
    for (carrier, binding) in &carriers {
        let Ok(camera) = cameras.get(binding.camera) else {
            continue;
        };
        let origin = camera.translation();
        let forward = *camera.forward();

        gizmos.ray(origin, forward * tuning.pickup_range, Color::srgb(0.0, 1.0, 0.0));
        gizmos.sphere(
            Isometry3d::from_translation(origin),
            tuning.pickup_range,
            Color::srgba(0.0, 1.0, 0.0, 0.1),
        );

        if carrier.is_holding() {
            let target = hold_target(origin, forward, tuning.hold_distance);
            gizmos.sphere(
                Isometry3d::from_translation(target),
                0.2,
                Color::srgb(1.0, 1.0, 0.0),
            );
        }
    }
}

/// Points on the threshold arc, swept about world up around the required direction.
pub(crate) fn cone_arc_points(direction: Vec3, threshold_degrees: f32, length: f32) -> Vec<Vec3> {
    let step = threshold_degrees * 2.0 / CONE_SEGMENTS as f32;
    (0..=CONE_SEGMENTS)
        .map(|i| {
            let angle = -threshold_degrees + step * i as f32;
            Quat::from_rotation_y(angle.to_radians()) * direction * length
        })
        .collect()
}

pub(crate) fn draw_facing_trigger_gizmos(
    mut gizmos: Gizmos,
    triggers: Query<(&FacingTrigger, &GlobalTransform)>,
) {
    let cone_color = Color::srgba(1.0, 0.5, 0.0, 0.4);

    for (trigger, transform) in &triggers {
        let origin = transform.translation();
        let direction = trigger.required_direction();
        let tip = origin + direction * DIRECTION_LENGTH;

        gizmos.line(origin, tip, Color::srgb(0.0, 1.0, 1.0));
        gizmos.sphere(Isometry3d::from_translation(tip), 0.1, Color::srgb(0.0, 1.0, 1.0));

        let arc = cone_arc_points(direction, trigger.threshold_degrees(), DIRECTION_LENGTH);
        for pair in arc.windows(2) {
            gizmos.line(origin + pair[0], origin + pair[1], cone_color);
        }
        if let (Some(first), Some(last)) = (arc.first(), arc.last()) {
            gizmos.line(origin, origin + *first, cone_color);
            gizmos.line(origin, origin + *last, cone_color);
        }
    }
}
