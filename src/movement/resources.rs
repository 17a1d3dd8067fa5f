//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Camera pitch can never leave [-MAX_PITCH_DEGREES, MAX_PITCH_DEGREES].
pub const MAX_PITCH_DEGREES: f32 = 90.0;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Horizontal speed in metres per second
    pub move_speed: f32,
    /// Vertical velocity set by a grounded jump
    pub jump_force: f32,
    /// Gravity magnitude, integrated into vertical velocity every frame
    pub gravity: f32,
    /// Degrees of rotation per pixel of mouse motion
    pub mouse_sensitivity: f32,
    /// Vertical velocity held while grounded so the body keeps contact
    pub grounded_stick_velocity: f32,
    /// Pitch clamp in degrees, never above [`MAX_PITCH_DEGREES`]
    pub pitch_limit: f32,
    /// Extra ray length below the feet that still counts as grounded
    pub grounded_distance: f32,
    pub body_height: f32,
    pub body_radius: f32,
    /// Camera height above the body centre
    pub eye_offset: f32,
    pub jump_key: KeyCode,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_force: 7.0,
            gravity: 9.81,
            mouse_sensitivity: 0.2,
            grounded_stick_velocity: -2.0,
            pitch_limit: MAX_PITCH_DEGREES,
            grounded_distance: 0.1,
            body_height: 1.8,
            body_radius: 0.4,
            eye_offset: 0.6,
            jump_key: KeyCode::Space,
        }
    }
}

impl MovementTuning {
    /// Height reached by a single jump from flat ground: h = v² / (2g)
    pub fn jump_apex_height(&self) -> f32 {
        self.jump_force * self.jump_force / (2.0 * self.gravity)
    }

    /// Half of the capsule height, from body centre to feet.
    pub fn half_height(&self) -> f32 {
        self.body_height * 0.5
    }

    /// Length of the capsule's cylindrical section.
    pub fn capsule_length(&self) -> f32 {
        (self.body_height - 2.0 * self.body_radius).max(0.0)
    }

    pub fn effective_pitch_limit(&self) -> f32 {
        self.pitch_limit.clamp(0.0, MAX_PITCH_DEGREES)
    }
}

/// Input sampled once per frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// x = strafe (right positive), y = forward (forward positive)
    pub axis: Vec2,
    /// Raw mouse motion in pixels
    pub look_delta: Vec2,
    pub jump_just_pressed: bool,
}
