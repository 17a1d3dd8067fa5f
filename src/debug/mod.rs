//! Debug domain: dev-tools gizmos for carry and facing triggers.
//!
//! Draws:
//! - The pickup ray and pickup range sphere from the player camera
//! - The hold point while something is carried
//! - Each facing trigger's required direction and threshold cone

mod gizmos;
#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::debug::gizmos::{draw_carry_gizmos, draw_facing_trigger_gizmos};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (draw_carry_gizmos, draw_facing_trigger_gizmos));
    }
}
