//! Carry domain: the carrier state machine and held-body flags.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::Category;

/// Gravity and rotation flags of a body under (or released from) carry control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyFlags {
    pub gravity_enabled: bool,
    pub rotation_frozen: bool,
}

impl BodyFlags {
    /// Held: floats in front of the camera and cannot spin on its own
    pub const HELD: Self = Self {
        gravity_enabled: false,
        rotation_frozen: true,
    };

    /// Released: back under normal simulation
    pub const FREE: Self = Self {
        gravity_enabled: true,
        rotation_frozen: false,
    };

    pub fn gravity_scale(self) -> GravityScale {
        GravityScale(if self.gravity_enabled { 1.0 } else { 0.0 })
    }

    pub fn locked_axes(self) -> LockedAxes {
        if self.rotation_frozen {
            LockedAxes::ROTATION_LOCKED
        } else {
            LockedAxes::new()
        }
    }

    /// Components to insert on the body to apply these flags.
    pub fn components(self) -> (GravityScale, LockedAxes) {
        (self.gravity_scale(), self.locked_axes())
    }
}

/// Reference to the body currently carried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeldObject {
    pub entity: Entity,
    /// False when the target had no dynamic rigid body. Such an object is still
    /// held, but every servo step is skipped and no flags are touched.
    pub simulated: bool,
    /// Flags the body should carry right now
    pub flags: BodyFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CarryState {
    #[default]
    Idle,
    Holding(HeldObject),
}

/// What the pickup ray found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickupCandidate {
    pub entity: Entity,
    pub category: Option<Category>,
    pub simulated: bool,
    pub distance: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CarryError {
    AlreadyHolding { held: Entity },
    NothingInRange { range: f32 },
    NotCarriable { entity: Entity },
}

impl std::fmt::Display for CarryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarryError::AlreadyHolding { held } => write!(f, "already holding {held}"),
            CarryError::NothingInRange { range } => write!(f, "nothing within {range}m"),
            CarryError::NotCarriable { entity } => write!(f, "{entity} is not carriable"),
        }
    }
}

impl std::error::Error for CarryError {}

/// Carry interactor attached to the player: Idle -> Holding -> Idle.
#[derive(Component, Debug, Default)]
pub struct Carrier {
    pub state: CarryState,
}

impl Carrier {
    pub fn held(&self) -> Option<&HeldObject> {
        match &self.state {
            CarryState::Idle => None,
            CarryState::Holding(held) => Some(held),
        }
    }

    pub fn is_holding(&self) -> bool {
        self.held().is_some()
    }

    /// Idle + carriable candidate in range -> Holding.
    pub fn try_pickup(
        &mut self,
        candidate: Option<PickupCandidate>,
        range: f32,
    ) -> Result<HeldObject, CarryError> {
        if let Some(held) = self.held() {
            return Err(CarryError::AlreadyHolding { held: held.entity });
        }

        let candidate = candidate
            .filter(|candidate| candidate.distance <= range)
            .ok_or(CarryError::NothingInRange { range })?;

        if !candidate.category.is_some_and(Category::is_carriable) {
            return Err(CarryError::NotCarriable {
                entity: candidate.entity,
            });
        }

        let held = HeldObject {
            entity: candidate.entity,
            simulated: candidate.simulated,
            flags: BodyFlags::HELD,
        };
        self.state = CarryState::Holding(held);
        Ok(held)
    }

    /// Holding -> Idle. The returned object carries the flags to restore.
    pub fn release(&mut self) -> Option<HeldObject> {
        match std::mem::take(&mut self.state) {
            CarryState::Idle => None,
            CarryState::Holding(held) => Some(HeldObject {
                flags: BodyFlags::FREE,
                ..held
            }),
        }
    }
}
