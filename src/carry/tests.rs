//! Carry domain: tests for the carrier state machine and servo math.

use avian3d::prelude::{GravityScale, LinearVelocity, LockedAxes};
use bevy::prelude::*;

use super::systems::{apply_body_flags, handle_drop_input, servo_held_body};
use super::{
    BodyFlags, Carrier, CarryError, CarryState, CarryTuning, HeldObject, PickupCandidate,
    aligned_rotation, hold_target, plan_servo, servo_rotation, servo_velocity,
};
use crate::core::Category;
use crate::movement::{FirstPersonCamera, PlayerCamera};

const DT: f32 = 1.0 / 64.0;

fn candidate(bits: u64, category: Category, distance: f32) -> PickupCandidate {
    PickupCandidate {
        entity: Entity::from_bits(bits),
        category: Some(category),
        simulated: true,
        distance,
    }
}

fn holding(carrier: &mut Carrier, bits: u64) -> HeldObject {
    carrier
        .try_pickup(Some(candidate(bits, Category::Carriable, 1.0)), 3.0)
        .expect("pickup should succeed")
}

// -----------------------------------------------------------------------------
// State machine
// -----------------------------------------------------------------------------

#[test]
fn test_pickup_carriable_in_range() {
    let mut carrier = Carrier::default();
    let held = holding(&mut carrier, 7);

    assert_eq!(held.entity, Entity::from_bits(7));
    assert!(held.simulated);
    assert_eq!(held.flags, BodyFlags::HELD);
    assert_eq!(carrier.state, CarryState::Holding(held));
}

#[test]
fn test_pickup_with_no_hit_stays_idle() {
    let mut carrier = Carrier::default();
    assert_eq!(
        carrier.try_pickup(None, 3.0),
        Err(CarryError::NothingInRange { range: 3.0 })
    );
    assert!(!carrier.is_holding());
}

#[test]
fn test_pickup_beyond_range_stays_idle() {
    let mut carrier = Carrier::default();
    let far = candidate(7, Category::Carriable, 3.5);
    assert_eq!(
        carrier.try_pickup(Some(far), 3.0),
        Err(CarryError::NothingInRange { range: 3.0 })
    );
    assert_eq!(carrier.state, CarryState::Idle);
}

#[test]
fn test_pickup_rejects_non_carriable() {
    let mut carrier = Carrier::default();
    let wall = candidate(9, Category::Scenery, 1.0);
    assert_eq!(
        carrier.try_pickup(Some(wall), 3.0),
        Err(CarryError::NotCarriable {
            entity: Entity::from_bits(9)
        })
    );

    let untagged = PickupCandidate {
        category: None,
        ..candidate(10, Category::Carriable, 1.0)
    };
    assert!(matches!(
        carrier.try_pickup(Some(untagged), 3.0),
        Err(CarryError::NotCarriable { .. })
    ));
    assert!(!carrier.is_holding());
}

#[test]
fn test_pickup_while_holding_is_ignored() {
    let mut carrier = Carrier::default();
    let first = holding(&mut carrier, 7);

    let other = candidate(8, Category::Carriable, 0.5);
    assert_eq!(
        carrier.try_pickup(Some(other), 3.0),
        Err(CarryError::AlreadyHolding {
            held: first.entity
        })
    );
    assert_eq!(carrier.held(), Some(&first));
}

#[test]
fn test_drop_while_idle_does_nothing() {
    let mut carrier = Carrier::default();
    assert_eq!(carrier.release(), None);
    assert_eq!(carrier.state, CarryState::Idle);
}

#[test]
fn test_body_without_rigid_body_is_held_unsimulated() {
    let mut carrier = Carrier::default();
    let statue = PickupCandidate {
        simulated: false,
        ..candidate(11, Category::Carriable, 2.0)
    };

    let held = carrier.try_pickup(Some(statue), 3.0).expect("held");
    assert!(!held.simulated);
    assert!(carrier.is_holding());

    let released = carrier.release().expect("released");
    assert_eq!(released.entity, held.entity);
    assert!(!released.simulated);
}

#[test]
fn test_pickup_then_drop_restores_flags_regardless_of_servo_ticks() {
    let tuning = CarryTuning::default();

    for ticks in [0, 1, 5, 240] {
        let mut carrier = Carrier::default();
        let held = holding(&mut carrier, 7);
        assert!(!held.flags.gravity_enabled);
        assert!(held.flags.rotation_frozen);

        let mut position = Vec3::new(0.0, 0.5, -2.0);
        let mut rotation = Quat::from_rotation_z(0.4);
        for _ in 0..ticks {
            let step = plan_servo(position, rotation, Vec3::Y * 1.6, Vec3::NEG_Z, &tuning, DT);
            position += step.velocity * DT;
            rotation = step.rotation;
        }

        let released = carrier.release().expect("was holding");
        assert_eq!(released.flags, BodyFlags::FREE);
        assert!(released.flags.gravity_enabled);
        assert!(!released.flags.rotation_frozen);
        assert!(!carrier.is_holding());
    }
}

#[test]
fn test_body_flags_map_to_gravity_scale() {
    assert_eq!(BodyFlags::HELD.gravity_scale().0, 0.0);
    assert_eq!(BodyFlags::FREE.gravity_scale().0, 1.0);
}

#[test]
fn test_carry_error_messages() {
    let err = CarryError::NotCarriable {
        entity: Entity::from_bits(9),
    };
    assert!(err.to_string().ends_with("is not carriable"));
    assert_eq!(
        CarryError::NothingInRange { range: 3.0 }.to_string(),
        "nothing within 3m"
    );
}

// -----------------------------------------------------------------------------
// Servo
// -----------------------------------------------------------------------------

#[test]
fn test_hold_target_is_in_front_of_camera() {
    let target = hold_target(Vec3::new(0.0, 1.6, 0.0), Vec3::NEG_Z, 1.5);
    assert!(target.abs_diff_eq(Vec3::new(0.0, 1.6, -1.5), 1e-6));
}

#[test]
fn test_servo_velocity_zero_exactly_at_target() {
    let target = Vec3::new(0.3, 1.6, -1.5);
    assert_eq!(servo_velocity(target, target, 10.0), Vec3::ZERO);

    let off = servo_velocity(target + Vec3::new(0.0, -0.1, 0.0), target, 10.0);
    assert_ne!(off, Vec3::ZERO);
    assert!(off.abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), 1e-5));
}

#[test]
fn test_servo_rotation_rate_is_capped() {
    let forward = Vec3::new(1.0, 0.0, 0.0);
    let current = Quat::from_rotation_x(1.0);

    // rate * dt above 1 lands exactly on the aligned rotation
    let snapped = servo_rotation(current, forward, 1_000.0, DT);
    assert!((snapped * Vec3::NEG_Z).abs_diff_eq(forward, 1e-5));
    assert!((snapped * Vec3::Y).abs_diff_eq(Vec3::Y, 1e-5));

    // zero rate leaves the rotation alone
    let held = servo_rotation(current, forward, 0.0, DT);
    assert!(held.abs_diff_eq(current, 1e-5));
}

#[test]
fn test_aligned_rotation_points_forward_axis_along_camera() {
    let forward = Vec3::new(1.0, 0.0, -1.0).normalize();
    let rotation = aligned_rotation(forward);
    assert!((rotation * Vec3::NEG_Z).abs_diff_eq(forward, 1e-5));
}

#[test]
fn test_plan_servo_converges_on_hold_point() {
    let tuning = CarryTuning::default();
    let camera = Vec3::new(0.0, 1.6, 0.0);
    let target = hold_target(camera, Vec3::NEG_Z, tuning.hold_distance);

    let mut position = Vec3::new(1.0, 0.5, -3.0);
    for _ in 0..600 {
        let step = plan_servo(position, Quat::IDENTITY, camera, Vec3::NEG_Z, &tuning, DT);
        position += step.velocity * DT;
    }
    assert!(position.abs_diff_eq(target, 1e-3));
}

// -----------------------------------------------------------------------------
// Systems
// -----------------------------------------------------------------------------

fn holding_state(entity: Entity, simulated: bool) -> Carrier {
    Carrier {
        state: CarryState::Holding(HeldObject {
            entity,
            simulated,
            flags: BodyFlags::HELD,
        }),
    }
}

fn drop_app() -> App {
    let mut app = App::new();
    app.init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<CarryTuning>()
        .add_systems(Update, handle_drop_input);
    app
}

#[test]
fn test_pickup_flags_are_written_to_simulated_body() {
    let mut world = World::new();
    let body = world.spawn((GravityScale(1.0), LockedAxes::new())).id();
    let mut carrier = Carrier::default();
    let held = carrier
        .try_pickup(
            Some(PickupCandidate {
                entity: body,
                category: Some(Category::Carriable),
                simulated: true,
                distance: 1.0,
            }),
            3.0,
        )
        .expect("pickup");

    apply_body_flags(&mut world.commands(), &held);
    world.flush();

    assert_eq!(world.get::<GravityScale>(body).map(|g| g.0), Some(0.0));
    let locked = world.get::<LockedAxes>(body).expect("locked axes");
    assert!(locked.is_rotation_x_locked());
    assert!(locked.is_rotation_y_locked());
    assert!(locked.is_rotation_z_locked());
}

#[test]
fn test_drop_key_restores_body_flags() {
    let mut app = drop_app();
    let body = app
        .world_mut()
        .spawn((GravityScale(0.0), LockedAxes::ROTATION_LOCKED))
        .id();
    let player = app.world_mut().spawn(holding_state(body, true)).id();

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyQ);
    app.update();

    let world = app.world();
    assert!(!world.get::<Carrier>(player).expect("carrier").is_holding());
    assert_eq!(world.get::<GravityScale>(body).map(|g| g.0), Some(1.0));
    let locked = world.get::<LockedAxes>(body).expect("locked axes");
    assert!(!locked.is_rotation_x_locked());
    assert!(!locked.is_rotation_y_locked());
    assert!(!locked.is_rotation_z_locked());
}

#[test]
fn test_drop_of_unsimulated_object_leaves_its_components_alone() {
    let mut app = drop_app();
    let statue = app.world_mut().spawn(Visibility::Inherited).id();
    let player = app.world_mut().spawn(holding_state(statue, false)).id();

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyQ);
    app.update();

    let world = app.world();
    assert!(!world.get::<Carrier>(player).expect("carrier").is_holding());
    assert!(world.get::<GravityScale>(statue).is_none());
    assert!(world.get::<LockedAxes>(statue).is_none());
}

#[test]
fn test_drop_without_key_press_keeps_holding() {
    let mut app = drop_app();
    let body = app.world_mut().spawn(GravityScale(0.0)).id();
    let player = app.world_mut().spawn(holding_state(body, true)).id();

    app.update();

    assert!(app.world().get::<Carrier>(player).expect("carrier").is_holding());
    assert_eq!(app.world().get::<GravityScale>(body).map(|g| g.0), Some(0.0));
}

fn servo_app() -> (App, Entity) {
    let mut app = App::new();
    app.init_resource::<Time>()
        .init_resource::<CarryTuning>()
        .add_systems(Update, servo_held_body);

    // Camera at eye height looking down -Z
    let camera = app
        .world_mut()
        .spawn((
            FirstPersonCamera,
            GlobalTransform::from_translation(Vec3::new(0.0, 1.6, 0.0)),
        ))
        .id();
    (app, camera)
}

#[test]
fn test_servo_writes_velocity_toward_hold_point() {
    let (mut app, camera) = servo_app();
    let start = Vec3::new(1.0, 0.5, -3.0);
    let body = app
        .world_mut()
        .spawn((Transform::from_translation(start), LinearVelocity::default()))
        .id();
    app.world_mut()
        .spawn((holding_state(body, true), PlayerCamera { camera }));

    app.update();

    let tuning = CarryTuning::default();
    let target = hold_target(Vec3::new(0.0, 1.6, 0.0), Vec3::NEG_Z, tuning.hold_distance);
    let velocity = app.world().get::<LinearVelocity>(body).expect("velocity").0;
    assert!(velocity.abs_diff_eq((target - start) * tuning.move_smooth_speed, 1e-4));
}

#[test]
fn test_servo_leaves_body_at_rest_on_hold_point() {
    let (mut app, camera) = servo_app();
    let target = hold_target(Vec3::new(0.0, 1.6, 0.0), Vec3::NEG_Z, 1.5);
    let body = app
        .world_mut()
        .spawn((
            Transform::from_translation(target),
            LinearVelocity(Vec3::new(3.0, 0.0, 0.0)),
        ))
        .id();
    app.world_mut()
        .spawn((holding_state(body, true), PlayerCamera { camera }));

    app.update();

    assert_eq!(
        app.world().get::<LinearVelocity>(body).expect("velocity").0,
        Vec3::ZERO
    );
}

#[test]
fn test_servo_skips_unsimulated_object() {
    let (mut app, camera) = servo_app();
    let statue = app
        .world_mut()
        .spawn((Transform::from_xyz(3.0, 0.6, 0.0), LinearVelocity::default()))
        .id();
    let player = app
        .world_mut()
        .spawn((holding_state(statue, false), PlayerCamera { camera }))
        .id();

    app.update();

    assert_eq!(
        app.world().get::<LinearVelocity>(statue).expect("velocity").0,
        Vec3::ZERO
    );
    assert!(app.world().get::<Carrier>(player).expect("carrier").is_holding());
}

#[test]
fn test_despawned_object_returns_carrier_to_idle() {
    for simulated in [true, false] {
        let (mut app, camera) = servo_app();
        let body = app
            .world_mut()
            .spawn((Transform::default(), LinearVelocity::default()))
            .id();
        let player = app
            .world_mut()
            .spawn((holding_state(body, simulated), PlayerCamera { camera }))
            .id();
        app.world_mut().despawn(body);

        app.update();

        let carrier = app.world().get::<Carrier>(player).expect("carrier");
        assert_eq!(carrier.state, CarryState::Idle);
    }
}
