//! Carry domain: pickup and drop input at frame rate and held-body servoing at physics rate.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::carry::{Carrier, CarryError, CarryTuning, HeldObject, PickupCandidate, plan_servo};
use crate::core::{Category, GameLayer, SetupError};
use crate::movement::{FirstPersonCamera, PlayerCamera};

/// Resolve the camera transform bound to `player`.
fn bound_camera<'a>(
    player: Entity,
    binding: Option<&PlayerCamera>,
    cameras: &'a Query<&GlobalTransform, With<FirstPersonCamera>>,
) -> Result<&'a GlobalTransform, SetupError> {
    let camera = PlayerCamera::require(player, binding)?;
    cameras
        .get(camera)
        .map_err(|_| SetupError::DanglingCamera { player, camera })
}

/// Nearest solid hit along the camera's forward ray, excluding the carrier itself.
fn cast_pickup_ray(
    spatial_query: &SpatialQuery,
    carrier: Entity,
    camera: &GlobalTransform,
    range: f32,
    categories: &Query<&Category>,
    bodies: &Query<&RigidBody>,
) -> Option<PickupCandidate> {
    let filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Prop])
        .with_excluded_entities([carrier]);

    let hit = spatial_query.cast_ray(camera.translation(), camera.forward(), range, true, &filter)?;

    Some(PickupCandidate {
        entity: hit.entity,
        category: categories.get(hit.entity).ok().copied(),
        simulated: matches!(bodies.get(hit.entity), Ok(RigidBody::Dynamic)),
        distance: hit.distance,
    })
}

/// Writes the flags a held or released body should carry. Bodies without a
/// dynamic rigid body are left alone.
pub(crate) fn apply_body_flags(commands: &mut Commands, held: &HeldObject) {
    if held.simulated {
        commands
            .entity(held.entity)
            .try_insert(held.flags.components());
    }
}

pub(crate) fn handle_pickup_input(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<CarryTuning>,
    spatial_query: SpatialQuery,
    mut carriers: Query<(Entity, &mut Carrier, Option<&PlayerCamera>)>,
    cameras: Query<&GlobalTransform, With<FirstPersonCamera>>,
    categories: Query<&Category>,
    bodies: Query<&RigidBody>,
) {
    if !keyboard.just_pressed(tuning.pickup_key) {
        return;
    }

    for (entity, mut carrier, binding) in &mut carriers {
        if carrier.is_holding() {
            continue;
        }

        let camera = match bound_camera(entity, binding, &cameras) {
            Ok(camera) => camera,
            Err(err) => {
                error_once!("Pickup disabled: {err}");
                continue;
            }
        };

        let candidate = cast_pickup_ray(
            &spatial_query,
            entity,
            camera,
            tuning.pickup_range,
            &categories,
            &bodies,
        );

        match carrier.try_pickup(candidate, tuning.pickup_range) {
            Ok(held) => {
                apply_body_flags(&mut commands, &held);
                if held.simulated {
                    info!("Picked up {}", held.entity);
                } else {
                    warn!(
                        "Picked up {} without a dynamic rigid body; it will not follow the camera",
                        held.entity
                    );
                }
            }
            Err(CarryError::AlreadyHolding { .. }) => {}
            Err(err) => debug!("Pickup ignored: {err}"),
        }
    }
}

pub(crate) fn handle_drop_input(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<CarryTuning>,
    mut carriers: Query<&mut Carrier>,
) {
    if !keyboard.just_pressed(tuning.drop_key) {
        return;
    }

    for mut carrier in &mut carriers {
        if let Some(released) = carrier.release() {
            apply_body_flags(&mut commands, &released);
            info!("Dropped {}", released.entity);
        }
    }
}

pub(crate) fn servo_held_body(
    time: Res<Time>,
    tuning: Res<CarryTuning>,
    mut carriers: Query<(Entity, &mut Carrier, Option<&PlayerCamera>)>,
    cameras: Query<&GlobalTransform, With<FirstPersonCamera>>,
    entities: Query<Entity>,
    mut bodies: Query<(&mut Transform, &mut LinearVelocity), Without<FirstPersonCamera>>,
) {
    let dt = time.delta_secs();

    for (entity, mut carrier, binding) in &mut carriers {
        let Some(held) = carrier.held().copied() else {
            continue;
        };
        if !entities.contains(held.entity) {
            warn!("Held object {} disappeared; releasing", held.entity);
            carrier.release();
            continue;
        }
        if !held.simulated {
            continue;
        }

        let camera = match bound_camera(entity, binding, &cameras) {
            Ok(camera) => camera,
            Err(err) => {
                error_once!("Carry servo disabled: {err}");
                continue;
            }
        };

        let Ok((mut body_transform, mut velocity)) = bodies.get_mut(held.entity) else {
            warn!("Held object {} lost its body; releasing", held.entity);
            carrier.release();
            continue;
        };

        let step = plan_servo(
            body_transform.translation,
            body_transform.rotation,
            camera.translation(),
            *camera.forward(),
            &tuning,
            dt,
        );
        velocity.0 = step.velocity;
        body_transform.rotation = step.rotation;
    }
}
