//! Carry domain: raycast pickup, physics-rate servoing of the held body, drop.

mod components;
mod resources;
mod servo;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{BodyFlags, Carrier, CarryError, CarryState, HeldObject, PickupCandidate};
pub use resources::CarryTuning;
pub use servo::{ServoStep, aligned_rotation, hold_target, plan_servo, servo_rotation, servo_velocity};

use bevy::prelude::*;

use crate::carry::systems::{handle_drop_input, handle_pickup_input, servo_held_body};
use crate::core::gameplay_active;

pub struct CarryPlugin;

impl Plugin for CarryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CarryTuning>()
            // Input is sampled at frame rate, the held body is driven at the fixed physics rate
            .add_systems(
                Update,
                (handle_pickup_input, handle_drop_input)
                    .chain()
                    .run_if(gameplay_active),
            )
            .add_systems(FixedUpdate, servo_held_body);
    }
}
