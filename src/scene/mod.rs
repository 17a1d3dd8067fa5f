//! Scene domain: level spawning, the name registry, and object activation.

mod events;
mod registry;
mod spawn;
mod systems;
#[cfg(test)]
mod tests;

pub use events::SetActiveRequest;
pub use registry::SceneRegistry;
pub(crate) use systems::apply_activation_requests;

use bevy::prelude::*;

use crate::scene::spawn::{spawn_level, spawn_lights};

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneRegistry>()
            .add_message::<SetActiveRequest>()
            .add_systems(Startup, (spawn_level, spawn_lights))
            .add_systems(Update, apply_activation_requests);
    }
}
