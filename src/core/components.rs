//! Core domain: entity categories and physics layers shared by every domain.

use avian3d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors, walls and static scenery the player can stand on
    Ground,
    /// Player body
    Player,
    /// Loose props (carriable or not)
    Prop,
    /// Trigger zones - should not block movement
    Sensor,
}

/// What an entity is, checked by direct comparison instead of string tags.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Category {
    Player,
    Carriable,
    #[default]
    Scenery,
}

impl Category {
    pub fn is_carriable(self) -> bool {
        self == Category::Carriable
    }

    pub fn is_player(self) -> bool {
        self == Category::Player
    }
}
