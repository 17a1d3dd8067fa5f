//! Triggers domain: occupancy tracking from sensor contacts and facing evaluation.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::Category;
use crate::scene::SetActiveRequest;
use crate::triggers::{FacingCheck, FacingTrigger};

/// Orders a contact pair as (trigger, other) if either side is a facing trigger.
fn split_pair(
    collider1: Entity,
    collider2: Entity,
    is_trigger: impl Fn(Entity) -> bool,
) -> Option<(Entity, Entity)> {
    if is_trigger(collider1) {
        Some((collider1, collider2))
    } else if is_trigger(collider2) {
        Some((collider2, collider1))
    } else {
        None
    }
}

fn is_player(entity: Entity, categories: &Query<&Category>) -> bool {
    categories
        .get(entity)
        .is_ok_and(|category| category.is_player())
}

/// Tracks when the player enters/exits facing trigger zones.
pub(crate) fn track_zone_occupancy(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    mut triggers: Query<(&mut FacingTrigger, Option<&CollidingEntities>)>,
    categories: Query<&Category>,
) {
    for event in collision_start_events.read() {
        let Some((zone, other)) =
            split_pair(event.collider1, event.collider2, |e| triggers.contains(e))
        else {
            continue;
        };
        if !is_player(other, &categories) {
            continue;
        }

        if let Ok((mut trigger, _)) = triggers.get_mut(zone) {
            trigger.state.enter(other);
            info!("[TRIGGER] Player entered facing zone '{}'", trigger.name);
        }
    }

    for event in collision_end_events.read() {
        let Some((zone, other)) =
            split_pair(event.collider1, event.collider2, |e| triggers.contains(e))
        else {
            continue;
        };

        if let Ok((mut trigger, _)) = triggers.get_mut(zone) {
            if trigger.state.exit(other) {
                info!("[TRIGGER] Player exited facing zone '{}'", trigger.name);
            }
        }
    }

    // Start and end streams lose their relative order within a frame,
    // so the sensor's contact set has the final say
    for (mut trigger, contacts) in &mut triggers {
        let Some(contacts) = contacts else {
            continue;
        };
        let arrival = contacts
            .iter()
            .copied()
            .find(|&entity| is_player(entity, &categories));

        if trigger
            .state
            .reconcile(|entity| contacts.contains(&entity), arrival)
        {
            debug!(
                "[TRIGGER] Zone '{}' resynced to contacts: occupant={:?}",
                trigger.name,
                trigger.state.occupant()
            );
        }
    }
}

/// Fires each occupied trigger once when its occupant faces the required way.
pub(crate) fn evaluate_facing_triggers(
    mut triggers: Query<&mut FacingTrigger>,
    occupants: Query<&GlobalTransform>,
    mut activation_requests: MessageWriter<SetActiveRequest>,
) {
    for mut trigger in &mut triggers {
        let Some(occupant) = trigger.state.occupant() else {
            continue;
        };
        if trigger.state.has_fired() {
            continue;
        }

        let Ok(occupant_transform) = occupants.get(occupant) else {
            // Occupant despawned without an exit contact
            trigger.state.exit(occupant);
            continue;
        };

        let check = trigger.evaluate(*occupant_transform.forward());

        debug!(
            "[Facing Check] trigger='{}' forward={:?} required={} result={:?} threshold={}",
            trigger.name,
            trigger.state.last_forward(),
            trigger.required_direction(),
            check,
            trigger.threshold_degrees()
        );

        if let FacingCheck::Fired { angle } = check {
            info!(
                "[TRIGGER] '{}' fired at {:.2} degrees: enabling {:?}, disabling {:?}",
                trigger.name, angle, trigger.enable, trigger.disable
            );
            activation_requests.write_batch(trigger.activation_requests());
        }
    }
}
