//! Triggers domain: facing-direction zones that fire a one-shot scene toggle.

mod components;
mod facing;
mod systems;

pub use components::{FacingCheck, FacingTrigger, ZoneState};
pub use facing::facing_angle;

use bevy::prelude::*;

use crate::scene::apply_activation_requests;
use crate::triggers::systems::{evaluate_facing_triggers, track_zone_occupancy};

pub struct TriggersPlugin;

impl Plugin for TriggersPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (track_zone_occupancy, evaluate_facing_triggers)
                .chain()
                .before(apply_activation_requests),
        );
    }
}
