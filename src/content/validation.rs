//! Validation for tuning ranges and cross-references between level definitions.

use bevy::prelude::*;
use std::collections::HashSet;

use super::data::*;
use crate::movement::MAX_PITCH_DEGREES;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' field '{}': {}",
            self.source_type, self.source_id, self.field, self.message
        )
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for checking a tuning value is strictly positive
macro_rules! check_positive {
    ($errors:expr, $source_type:expr, $source_id:expr, $owner:expr, $field:ident) => {
        if !($owner.$field > 0.0) {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: stringify!($field),
                message: format!("must be positive, got {}", $owner.$field),
            });
        }
    };
}

/// Validate movement and carry tuning.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_gameplay(gameplay: &GameplayDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let movement = &gameplay.movement;
    check_positive!(errors, "Movement", "movement", movement, move_speed);
    check_positive!(errors, "Movement", "movement", movement, gravity);
    check_positive!(errors, "Movement", "movement", movement, mouse_sensitivity);
    check_positive!(errors, "Movement", "movement", movement, grounded_distance);
    check_positive!(errors, "Movement", "movement", movement, body_radius);
    check_positive!(errors, "Movement", "movement", movement, pitch_limit);

    if movement.jump_force < 0.0 {
        errors.push(ValidationError {
            source_type: "Movement",
            source_id: "movement".to_string(),
            field: "jump_force",
            message: format!("must not be negative, got {}", movement.jump_force),
        });
    }
    if movement.grounded_stick_velocity > 0.0 {
        errors.push(ValidationError {
            source_type: "Movement",
            source_id: "movement".to_string(),
            field: "grounded_stick_velocity",
            message: format!(
                "must point down (<= 0), got {}",
                movement.grounded_stick_velocity
            ),
        });
    }
    if movement.pitch_limit > MAX_PITCH_DEGREES {
        errors.push(ValidationError {
            source_type: "Movement",
            source_id: "movement".to_string(),
            field: "pitch_limit",
            message: format!(
                "must not exceed {} degrees, got {}",
                MAX_PITCH_DEGREES, movement.pitch_limit
            ),
        });
    }
    if movement.body_height <= 2.0 * movement.body_radius {
        errors.push(ValidationError {
            source_type: "Movement",
            source_id: "movement".to_string(),
            field: "body_height",
            message: format!(
                "must exceed twice body_radius ({}), got {}",
                2.0 * movement.body_radius,
                movement.body_height
            ),
        });
    }

    let carry = &gameplay.carry;
    check_positive!(errors, "Carry", "carry", carry, pickup_range);
    check_positive!(errors, "Carry", "carry", carry, hold_distance);
    check_positive!(errors, "Carry", "carry", carry, move_smooth_speed);
    check_positive!(errors, "Carry", "carry", carry, rotate_smooth_speed);

    if carry.pickup_key == carry.drop_key {
        errors.push(ValidationError {
            source_type: "Carry",
            source_id: "carry".to_string(),
            field: "drop_key",
            message: format!("must differ from pickup_key ({:?})", carry.pickup_key),
        });
    }

    errors
}

/// Validate prop names and facing trigger definitions, including that every
/// trigger target names a prop.
pub fn validate_level(level: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut prop_names = HashSet::new();
    for name in level.prop_names() {
        if !prop_names.insert(name) {
            errors.push(ValidationError {
                source_type: "Prop",
                source_id: name.to_string(),
                field: "name",
                message: "duplicate prop name".to_string(),
            });
        }
    }

    for prop in &level.props {
        let size_ok = match prop.shape {
            PropShape::Cuboid { size } => size.cmpgt(Vec3::ZERO).all(),
            PropShape::Sphere { radius } => radius > 0.0,
        };
        if !size_ok {
            errors.push(ValidationError {
                source_type: "Prop",
                source_id: prop.name.clone().unwrap_or_else(|| "<unnamed>".to_string()),
                field: "shape",
                message: format!("must have positive dimensions, got {:?}", prop.shape),
            });
        }
    }

    let mut trigger_names = HashSet::new();
    for trigger in &level.facing_triggers {
        if !trigger_names.insert(trigger.name.as_str()) {
            errors.push(ValidationError {
                source_type: "FacingTrigger",
                source_id: trigger.name.clone(),
                field: "name",
                message: "duplicate trigger name".to_string(),
            });
        }

        let direction = trigger.required_direction;
        if !direction.is_finite() || direction.length_squared() <= f32::EPSILON {
            errors.push(ValidationError {
                source_type: "FacingTrigger",
                source_id: trigger.name.clone(),
                field: "required_direction",
                message: format!("must be a non-zero direction, got {}", direction),
            });
        }

        if !(0.0..=180.0).contains(&trigger.threshold_degrees) {
            errors.push(ValidationError {
                source_type: "FacingTrigger",
                source_id: trigger.name.clone(),
                field: "threshold_degrees",
                message: format!(
                    "must lie in [0, 180], got {}",
                    trigger.threshold_degrees
                ),
            });
        }

        if !trigger.half_extents.cmpgt(Vec3::ZERO).all() {
            errors.push(ValidationError {
                source_type: "FacingTrigger",
                source_id: trigger.name.clone(),
                field: "half_extents",
                message: format!("must be positive, got {}", trigger.half_extents),
            });
        }

        for (field, targets) in [("enable", &trigger.enable), ("disable", &trigger.disable)] {
            for target in targets {
                if !prop_names.contains(target.as_str()) {
                    errors.push(ValidationError {
                        source_type: "FacingTrigger",
                        source_id: trigger.name.clone(),
                        field,
                        message: format!("references missing prop '{}'", target),
                    });
                }
            }
        }
    }

    errors
}
