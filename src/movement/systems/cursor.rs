//! Movement domain: cursor capture. Look input only applies while captured.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

use crate::core::GameplayPaused;

const CURSOR_PAUSE_SOURCE: &str = "cursor_released";

fn set_captured(options: &mut CursorOptions, captured: bool) {
    if captured {
        options.grab_mode = CursorGrabMode::Locked;
        options.visible = false;
    } else {
        options.grab_mode = CursorGrabMode::None;
        options.visible = true;
    }
}

pub(crate) fn capture_cursor(mut cursors: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    for mut options in &mut cursors {
        set_captured(&mut options, true);
    }
}

/// Escape frees the cursor and pauses gameplay input, a left click recaptures it.
pub(crate) fn toggle_cursor_capture(
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
    mut cursors: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    let release = keyboard.just_pressed(KeyCode::Escape);
    let capture = mouse.just_pressed(MouseButton::Left);
    if !release && !capture {
        return;
    }

    for mut options in &mut cursors {
        if release {
            set_captured(&mut options, false);
            paused.pause(CURSOR_PAUSE_SOURCE);
            info!("Cursor released");
        } else if capture {
            set_captured(&mut options, true);
            paused.unpause(CURSOR_PAUSE_SOURCE);
            info!("Cursor captured");
        }
    }
}
