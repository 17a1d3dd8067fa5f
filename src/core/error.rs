//! Core domain: misconfiguration errors surfaced by gameplay systems.

use bevy::prelude::*;

/// A binding or parameter that makes a behaviour unusable.
/// Systems log these and skip the affected entity instead of panicking.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    /// Player has no camera binding at all
    MissingCamera { player: Entity },
    /// Player is bound to an entity that is not a first-person camera
    DanglingCamera { player: Entity, camera: Entity },
    /// Facing trigger was given a zero or non-finite direction
    InvalidFacingDirection { trigger: String, direction: Vec3 },
    /// Facing threshold outside [0, 180] degrees
    FacingThresholdOutOfRange { trigger: String, degrees: f32 },
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::MissingCamera { player } => {
                write!(f, "Player {player} has no camera binding")
            }
            SetupError::DanglingCamera { player, camera } => write!(
                f,
                "Player {player} is bound to {camera}, which is not a first-person camera"
            ),
            SetupError::InvalidFacingDirection { trigger, direction } => write!(
                f,
                "Facing trigger '{trigger}' has unusable required direction {direction}"
            ),
            SetupError::FacingThresholdOutOfRange { trigger, degrees } => write!(
                f,
                "Facing trigger '{trigger}' threshold {degrees} is outside [0, 180] degrees"
            ),
        }
    }
}

impl std::error::Error for SetupError {}
