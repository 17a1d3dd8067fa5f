//! Core domain: shared categories, physics layers, errors, and pause tracking.

mod components;
mod error;
mod resources;

pub use components::{Category, GameLayer};
pub use error::SetupError;
pub use resources::{GameplayPaused, gameplay_active};

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameplayPaused>();
    }
}
