//! Carry domain: tuning and key bindings.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarryTuning {
    /// Maximum ray distance from the camera for a pickup
    pub pickup_range: f32,
    /// Distance in front of the camera the held body is pulled toward
    pub hold_distance: f32,
    /// Proportional gain from position error to velocity
    pub move_smooth_speed: f32,
    /// Slerp rate toward the camera-aligned rotation, per second
    pub rotate_smooth_speed: f32,
    pub pickup_key: KeyCode,
    pub drop_key: KeyCode,
}

impl Default for CarryTuning {
    fn default() -> Self {
        Self {
            pickup_range: 3.0,
            hold_distance: 1.5,
            move_smooth_speed: 10.0,
            rotate_smooth_speed: 10.0,
            pickup_key: KeyCode::KeyE,
            drop_key: KeyCode::KeyQ,
        }
    }
}
