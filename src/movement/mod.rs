//! Movement domain: first-person locomotion, mouse look and cursor capture.

mod bootstrap;
mod components;
mod resources;
mod systems;

pub use components::{FirstPersonCamera, Player, PlayerCamera, PlayerMotion, planar_velocity};
pub use resources::{MAX_PITCH_DEGREES, MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_locomotion, apply_look, capture_cursor, detect_ground, read_input, toggle_cursor_capture,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, (spawn_player, capture_cursor))
            .add_systems(
                Update,
                (
                    toggle_cursor_capture,
                    read_input,
                    detect_ground,
                    apply_look.run_if(gameplay_active),
                    apply_locomotion,
                )
                    .chain(),
            );
    }
}
