//! Scene domain: activation messages.

use bevy::ecs::message::Message;

/// Ask the scene to enable (`active`) or disable a registered object by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetActiveRequest {
    pub name: String,
    pub active: bool,
}

impl Message for SetActiveRequest {}
