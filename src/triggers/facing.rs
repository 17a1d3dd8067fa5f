//! Triggers domain: facing angle math.

use bevy::prelude::*;

/// Angle in degrees between `required` and `forward`, both normalized first.
/// Only the forward vector is compared, so roll never matters.
/// Returns `None` if either vector is zero or not finite.
pub fn facing_angle(required: Vec3, forward: Vec3) -> Option<f32> {
    let required = required.try_normalize()?;
    let forward = forward.try_normalize()?;
    let cos = required.dot(forward).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}
