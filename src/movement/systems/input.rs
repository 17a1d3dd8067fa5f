//! Movement domain: input sampling for locomotion and look.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::core::GameplayPaused;
use crate::movement::{MovementInput, MovementTuning};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    tuning: Res<MovementTuning>,
    paused: Res<GameplayPaused>,
    mut input: ResMut<MovementInput>,
) {
    if paused.is_paused() {
        *input = MovementInput::default();
        return;
    }

    // Strafe axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Forward axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y).clamp_length_max(1.0);
    input.look_delta = mouse_motion.delta;
    input.jump_just_pressed = keyboard.just_pressed(tuning.jump_key);
}
