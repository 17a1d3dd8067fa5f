//! Movement domain: horizontal movement, jump and gravity.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementInput, MovementTuning, Player, PlayerMotion, planar_velocity};

/// Writes the body's linear velocity so the physics step displaces it by
/// speed × frame time horizontally and by the integrated vertical velocity.
pub(crate) fn apply_locomotion(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut PlayerMotion, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut motion, mut velocity) in &mut query {
        let jump_requested = input.jump_just_pressed;
        let jumped = motion.step_vertical(jump_requested, &tuning, dt);
        if jumped {
            debug!("Jump: vertical_velocity={:.2}", motion.vertical_velocity);
        } else if jump_requested {
            debug!("Jump dropped: not grounded");
        }

        let planar = planar_velocity(motion.body_rotation(), input.axis, tuning.move_speed);
        velocity.0 = planar + Vec3::Y * motion.vertical_velocity;
    }
}
