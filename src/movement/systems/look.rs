//! Movement domain: mouse look. Yaw turns the body, pitch tilts the camera only.

use bevy::prelude::*;

use crate::core::SetupError;
use crate::movement::{
    FirstPersonCamera, MovementInput, MovementTuning, Player, PlayerCamera, PlayerMotion,
};

pub(crate) fn apply_look(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut players: Query<
        (Entity, &mut PlayerMotion, &mut Transform, Option<&PlayerCamera>),
        With<Player>,
    >,
    mut cameras: Query<&mut Transform, (With<FirstPersonCamera>, Without<Player>)>,
) {
    for (player, mut motion, mut body, binding) in &mut players {
        let camera = match PlayerCamera::require(player, binding) {
            Ok(camera) => camera,
            Err(err) => {
                error_once!("Mouse look disabled: {err}");
                continue;
            }
        };
        let Ok(mut camera_transform) = cameras.get_mut(camera) else {
            error_once!(
                "Mouse look disabled: {}",
                SetupError::DanglingCamera { player, camera }
            );
            continue;
        };

        motion.apply_look(
            input.look_delta,
            tuning.mouse_sensitivity,
            tuning.effective_pitch_limit(),
        );
        body.rotation = motion.body_rotation();
        camera_transform.rotation = motion.camera_rotation();
    }
}
