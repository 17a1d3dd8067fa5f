//! Triggers domain: zone occupancy state machine and trigger configuration.

use bevy::prelude::*;

use crate::core::SetupError;
use crate::scene::SetActiveRequest;
use crate::triggers::facing_angle;

/// Empty -> Occupied (unfired) -> Occupied (fired) -> Empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ZoneState {
    #[default]
    Empty,
    Occupied {
        occupant: Entity,
        fired: bool,
        /// Occupant forward seen by the last evaluation
        last_forward: Option<Vec3>,
    },
}

/// Result of one facing evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FacingCheck {
    /// Nobody inside
    Vacant,
    /// Already fired during this occupancy
    Spent,
    /// Occupant present but not facing the required way
    Outside { angle: Option<f32> },
    /// Fired on this evaluation
    Fired { angle: f32 },
}

impl ZoneState {
    pub fn occupant(&self) -> Option<Entity> {
        match self {
            ZoneState::Empty => None,
            ZoneState::Occupied { occupant, .. } => Some(*occupant),
        }
    }

    pub fn has_fired(&self) -> bool {
        matches!(self, ZoneState::Occupied { fired: true, .. })
    }

    pub fn last_forward(&self) -> Option<Vec3> {
        match self {
            ZoneState::Empty => None,
            ZoneState::Occupied { last_forward, .. } => *last_forward,
        }
    }

    /// Entering always re-arms, even if the zone thought someone was inside.
    pub fn enter(&mut self, occupant: Entity) {
        *self = ZoneState::Occupied {
            occupant,
            fired: false,
            last_forward: None,
        };
    }

    /// Exit by the current occupant empties the zone, fired or not.
    /// Returns false if `occupant` was not the one inside.
    pub fn exit(&mut self, occupant: Entity) -> bool {
        if self.occupant() == Some(occupant) {
            *self = ZoneState::Empty;
            true
        } else {
            false
        }
    }

    /// Align the zone with the sensor's current contacts. An occupant still in
    /// contact keeps its state; one that is gone empties the zone, after which
    /// `arrival` (a player found in contact) occupies it fresh.
    /// Returns whether the state changed.
    pub fn reconcile(&mut self, in_contact: impl Fn(Entity) -> bool, arrival: Option<Entity>) -> bool {
        let mut changed = false;
        if let Some(occupant) = self.occupant() {
            if in_contact(occupant) {
                return false;
            }
            changed = self.exit(occupant);
        }
        if let Some(player) = arrival {
            self.enter(player);
            changed = true;
        }
        changed
    }

    /// Compare the occupant's forward with `required`; fire at most once per occupancy.
    pub fn evaluate(&mut self, forward: Vec3, required: Vec3, threshold_degrees: f32) -> FacingCheck {
        let ZoneState::Occupied {
            fired,
            last_forward,
            ..
        } = self
        else {
            return FacingCheck::Vacant;
        };

        if *fired {
            return FacingCheck::Spent;
        }

        *last_forward = Some(forward);
        match facing_angle(required, forward) {
            Some(angle) if angle <= threshold_degrees => {
                *fired = true;
                FacingCheck::Fired { angle }
            }
            angle => FacingCheck::Outside { angle },
        }
    }
}

/// A sensor zone that toggles named scene objects the first time its occupant
/// faces `required_direction` within `threshold_degrees`.
#[derive(Component, Debug, Clone)]
pub struct FacingTrigger {
    pub name: String,
    required_direction: Vec3,
    threshold_degrees: f32,
    pub enable: Vec<String>,
    pub disable: Vec<String>,
    pub state: ZoneState,
}

impl FacingTrigger {
    pub fn new(
        name: impl Into<String>,
        required_direction: Vec3,
        threshold_degrees: f32,
        enable: Vec<String>,
        disable: Vec<String>,
    ) -> Result<Self, SetupError> {
        let name = name.into();

        let Some(direction) = required_direction.try_normalize() else {
            return Err(SetupError::InvalidFacingDirection {
                trigger: name,
                direction: required_direction,
            });
        };
        if !(0.0..=180.0).contains(&threshold_degrees) {
            return Err(SetupError::FacingThresholdOutOfRange {
                trigger: name,
                degrees: threshold_degrees,
            });
        }

        Ok(Self {
            name,
            required_direction: direction,
            threshold_degrees,
            enable,
            disable,
            state: ZoneState::Empty,
        })
    }

    /// Normalized required direction
    pub fn required_direction(&self) -> Vec3 {
        self.required_direction
    }

    pub fn threshold_degrees(&self) -> f32 {
        self.threshold_degrees
    }

    pub fn evaluate(&mut self, forward: Vec3) -> FacingCheck {
        self.state
            .evaluate(forward, self.required_direction, self.threshold_degrees)
    }

    /// Requests emitted when the trigger fires: enables first, then disables.
    pub fn activation_requests(&self) -> Vec<SetActiveRequest> {
        let enables = self.enable.iter().map(|name| SetActiveRequest {
            name: name.clone(),
            active: true,
        });
        let disables = self.disable.iter().map(|name| SetActiveRequest {
            name: name.clone(),
            active: false,
        });
        enables.chain(disables).collect()
    }
}
