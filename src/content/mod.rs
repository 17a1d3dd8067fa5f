//! Content domain: RON-backed gameplay tuning and level layout.

mod data;
mod loader;
mod validation;

pub use data::{BodyKind, FacingTriggerDef, GameplayDefaults, LevelDef, PropDef, PropShape};
pub use loader::{ContentLoadError, load_gameplay, load_level, parse_ron};
pub use validation::{ValidationError, validate_gameplay, validate_level};

use bevy::prelude::*;
use std::path::{Path, PathBuf};

use crate::carry::CarryTuning;
use crate::movement::MovementTuning;

/// Directory holding gameplay.ron and level.ron
#[derive(Resource, Debug, Clone)]
pub struct ContentPath(pub PathBuf);

impl Default for ContentPath {
    fn default() -> Self {
        Self(PathBuf::from("assets/data"))
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPath>()
            .init_resource::<LevelDef>()
            .add_systems(PreStartup, load_content);
    }
}

/// Loads and validates content, inserting tuning and level resources.
/// Any file that fails falls back to built-in defaults.
fn load_content(mut commands: Commands, path: Res<ContentPath>) {
    let base: &Path = &path.0;

    let gameplay = match load_gameplay(base) {
        Ok(gameplay) => accept_or_default("gameplay", gameplay, validate_gameplay),
        Err(err) => {
            error!("{err}; using default gameplay tuning");
            GameplayDefaults::default()
        }
    };

    let level = match load_level(base) {
        Ok(level) => accept_or_default("level", level, validate_level),
        Err(err) => {
            error!("{err}; using default level");
            LevelDef::default()
        }
    };

    info!(
        "Content loaded: move_speed={}, jump_apex={:.2}m, pickup_range={}, props={}, facing_triggers={}",
        gameplay.movement.move_speed,
        gameplay.movement.jump_apex_height(),
        gameplay.carry.pickup_range,
        level.props.len(),
        level.facing_triggers.len()
    );

    commands.insert_resource::<MovementTuning>(gameplay.movement);
    commands.insert_resource::<CarryTuning>(gameplay.carry);
    commands.insert_resource(level);
}

fn accept_or_default<T: Default>(
    label: &str,
    value: T,
    validate: impl Fn(&T) -> Vec<ValidationError>,
) -> T {
    let errors = validate(&value);
    if errors.is_empty() {
        return value;
    }

    for err in &errors {
        error!("Invalid {label} content: {err}");
    }
    warn!(
        "{} {label} validation error(s); using defaults",
        errors.len()
    );
    T::default()
}
