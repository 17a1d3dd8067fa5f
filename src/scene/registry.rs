//! Scene domain: name to entity lookup for level objects.

use bevy::prelude::*;
use std::collections::HashMap;

/// Named objects of the current level. Owned by the scene, consulted by
/// anything that needs to toggle an object it only knows by name.
#[derive(Resource, Debug, Default)]
pub struct SceneRegistry {
    entities: HashMap<String, Entity>,
}

impl SceneRegistry {
    /// Returns the entity previously registered under `name`, if any.
    pub fn register(&mut self, name: impl Into<String>, entity: Entity) -> Option<Entity> {
        self.entities.insert(name.into(), entity)
    }

    pub fn resolve(&self, name: &str) -> Option<Entity> {
        self.entities.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
