//! Movement domain: ground detection.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::GameLayer;
use crate::movement::{MovementTuning, Player, PlayerMotion};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut PlayerMotion), With<Player>>,
) {
    // Anything solid counts as ground, sensors and the player itself do not
    let ground_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Prop]);

    for (transform, mut motion) in &mut query {
        let was_grounded = motion.grounded;

        // Cast from the body centre down past the feet
        let hit = spatial_query.cast_ray(
            transform.translation,
            Dir3::NEG_Y,
            tuning.half_height() + tuning.grounded_distance,
            true,
            &ground_filter,
        );

        motion.grounded = hit.is_some();

        if motion.grounded && !was_grounded {
            debug!(
                "Landed: vertical_velocity={:.2}",
                motion.vertical_velocity
            );
        } else if !motion.grounded && was_grounded {
            debug!(
                "Left ground: vertical_velocity={:.2}",
                motion.vertical_velocity
            );
        }
    }
}
