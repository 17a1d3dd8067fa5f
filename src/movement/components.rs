//! Movement domain: player components and the per-frame motion model.

use bevy::prelude::*;

use crate::core::SetupError;
use crate::movement::{MAX_PITCH_DEGREES, MovementTuning};

#[derive(Component, Debug)]
pub struct Player;

/// Marker for the camera that renders the player's view
#[derive(Component, Debug)]
pub struct FirstPersonCamera;

/// Explicit binding from a player body to its camera entity
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerCamera {
    pub camera: Entity,
}

impl PlayerCamera {
    /// Camera bound to `player`, or a misconfiguration error if there is none.
    pub fn require(player: Entity, binding: Option<&PlayerCamera>) -> Result<Entity, SetupError> {
        binding
            .map(|binding| binding.camera)
            .ok_or(SetupError::MissingCamera { player })
    }
}

/// Vertical velocity, grounded flag and look angles of a player body.
/// Position lives in the entity's `Transform`.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct PlayerMotion {
    pub vertical_velocity: f32,
    pub grounded: bool,
    /// Body rotation about world up, degrees
    pub yaw: f32,
    /// Camera rotation about its local x axis, degrees (positive looks up)
    pub pitch: f32,
}

impl PlayerMotion {
    pub fn with_yaw(yaw: f32) -> Self {
        Self {
            yaw,
            ..default()
        }
    }

    /// While grounded, a falling body is held at a small downward velocity.
    pub fn settle_on_ground(&mut self, stick_velocity: f32) {
        if self.grounded && self.vertical_velocity < 0.0 {
            self.vertical_velocity = stick_velocity;
        }
    }

    /// Applies the jump impulse only if grounded right now. Airborne requests are dropped.
    pub fn try_jump(&mut self, requested: bool, jump_force: f32) -> bool {
        if requested && self.grounded {
            self.vertical_velocity = jump_force;
            true
        } else {
            false
        }
    }

    pub fn integrate_gravity(&mut self, gravity: f32, dt: f32) {
        self.vertical_velocity -= gravity * dt;
    }

    /// One frame of vertical motion: settle, jump, gravity.
    /// Returns whether a jump was applied.
    pub fn step_vertical(&mut self, jump_requested: bool, tuning: &MovementTuning, dt: f32) -> bool {
        self.settle_on_ground(tuning.grounded_stick_velocity);
        let jumped = self.try_jump(jump_requested, tuning.jump_force);
        self.integrate_gravity(tuning.gravity, dt);
        jumped
    }

    /// Mouse right turns the body right, mouse down (positive y in window space) looks down.
    pub fn apply_look(&mut self, delta: Vec2, sensitivity: f32, pitch_limit: f32) {
        if !delta.is_finite() {
            return;
        }
        let limit = pitch_limit.clamp(0.0, MAX_PITCH_DEGREES);
        self.yaw = (self.yaw - delta.x * sensitivity).rem_euclid(360.0);
        self.pitch = (self.pitch - delta.y * sensitivity).clamp(-limit, limit);
    }

    pub fn body_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw.to_radians())
    }

    pub fn camera_rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch.to_radians())
    }
}

/// Horizontal velocity along the body's right and forward axes.
pub fn planar_velocity(body_rotation: Quat, axis: Vec2, speed: f32) -> Vec3 {
    let right = body_rotation * Vec3::X;
    let forward = body_rotation * Vec3::NEG_Z;
    let planar = (right * axis.x + forward * axis.y) * speed;
    Vec3::new(planar.x, 0.0, planar.z)
}
