//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. Gameplay tuning is split into per-domain resources
//! once loaded; the level definition is kept as a resource for spawning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::carry::CarryTuning;
use crate::core::Category;
use crate::movement::MovementTuning;

// ============================================================================
// Gameplay defaults (gameplay.ron)
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    #[serde(default)]
    pub movement: MovementTuning,
    #[serde(default)]
    pub carry: CarryTuning,
}

// ============================================================================
// Level (level.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub schema_version: u32,
    pub player_spawn: Vec3,
    /// Initial body yaw in degrees
    #[serde(default)]
    pub player_yaw: f32,
    #[serde(default)]
    pub props: Vec<PropDef>,
    #[serde(default)]
    pub facing_triggers: Vec<FacingTriggerDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PropDef {
    /// Registered in the scene registry when present, so triggers can target it
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Category,
    pub shape: PropShape,
    pub position: Vec3,
    #[serde(default)]
    pub body: BodyKind,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub enum PropShape {
    Cuboid { size: Vec3 },
    Sphere { radius: f32 },
}

/// How a prop takes part in the physics simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum BodyKind {
    /// Immovable level geometry
    #[default]
    Static,
    /// Simulated rigid body
    Dynamic,
    /// Collider only, no rigid body at all
    ColliderOnly,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FacingTriggerDef {
    pub name: String,
    pub position: Vec3,
    pub half_extents: Vec3,
    /// World-space direction the occupant must face
    pub required_direction: Vec3,
    #[serde(default = "default_threshold")]
    pub threshold_degrees: f32,
    #[serde(default)]
    pub enable: Vec<String>,
    #[serde(default)]
    pub disable: Vec<String>,
}

fn default_color() -> [f32; 3] {
    [0.8, 0.7, 0.6]
}

fn default_active() -> bool {
    true
}

fn default_threshold() -> f32 {
    45.0
}

impl LevelDef {
    /// Every prop name defined by the level.
    pub fn prop_names(&self) -> impl Iterator<Item = &str> {
        self.props.iter().filter_map(|prop| prop.name.as_deref())
    }
}

impl Default for LevelDef {
    /// A floor and a single crate; used when level.ron cannot be loaded.
    fn default() -> Self {
        Self {
            schema_version: 1,
            player_spawn: Vec3::new(0.0, 1.5, 0.0),
            player_yaw: 0.0,
            props: vec![
                PropDef {
                    name: Some("floor".to_string()),
                    category: Category::Scenery,
                    shape: PropShape::Cuboid {
                        size: Vec3::new(40.0, 1.0, 40.0),
                    },
                    position: Vec3::new(0.0, -0.5, 0.0),
                    body: BodyKind::Static,
                    color: [0.35, 0.4, 0.35],
                    active: true,
                },
                PropDef {
                    name: Some("crate".to_string()),
                    category: Category::Carriable,
                    shape: PropShape::Cuboid {
                        size: Vec3::splat(0.6),
                    },
                    position: Vec3::new(0.0, 0.5, -3.0),
                    body: BodyKind::Dynamic,
                    color: default_color(),
                    active: true,
                },
            ],
            facing_triggers: Vec::new(),
        }
    }
}
