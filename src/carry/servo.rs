//! Carry domain: servo math for the held body.
//!
//! The position servo is purely proportional: velocity is the position error
//! scaled by a gain. It is not damped, so large gains at low tick rates can
//! overshoot and oscillate around the hold point.

use bevy::prelude::*;

use crate::carry::CarryTuning;

/// Point the held body is pulled toward.
pub fn hold_target(camera_position: Vec3, camera_forward: Vec3, hold_distance: f32) -> Vec3 {
    camera_position + camera_forward * hold_distance
}

/// Zero exactly when `current == target`.
pub fn servo_velocity(current: Vec3, target: Vec3, gain: f32) -> Vec3 {
    (target - current) * gain
}

/// Rotation whose forward axis (-Z) points along `camera_forward`, kept upright.
pub fn aligned_rotation(camera_forward: Vec3) -> Quat {
    Transform::IDENTITY
        .looking_to(camera_forward, Vec3::Y)
        .rotation
}

/// Slerp from `current` toward the camera-aligned rotation by `rate * dt`, capped at 1.
pub fn servo_rotation(current: Quat, camera_forward: Vec3, rate: f32, dt: f32) -> Quat {
    let t = (rate * dt).clamp(0.0, 1.0);
    current.slerp(aligned_rotation(camera_forward), t)
}

/// Velocity and rotation to write on the held body for one physics tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServoStep {
    pub velocity: Vec3,
    pub rotation: Quat,
}

pub fn plan_servo(
    body_position: Vec3,
    body_rotation: Quat,
    camera_position: Vec3,
    camera_forward: Vec3,
    tuning: &CarryTuning,
    dt: f32,
) -> ServoStep {
    let target = hold_target(camera_position, camera_forward, tuning.hold_distance);
    ServoStep {
        velocity: servo_velocity(body_position, target, tuning.move_smooth_speed),
        rotation: servo_rotation(
            body_rotation,
            camera_forward,
            tuning.rotate_smooth_speed,
            dt,
        ),
    }
}
