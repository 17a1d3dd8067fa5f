//! Scene domain: spawning the level from its definition.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::content::{BodyKind, FacingTriggerDef, LevelDef, PropDef, PropShape};
use crate::core::GameLayer;
use crate::scene::SceneRegistry;
use crate::scene::systems::visibility_for;
use crate::triggers::FacingTrigger;

pub(crate) fn spawn_lights(mut commands: Commands) {
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub(crate) fn spawn_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<SceneRegistry>,
    level: Res<LevelDef>,
) {
    for prop in &level.props {
        let entity = spawn_prop(&mut commands, &mut meshes, &mut materials, prop);
        if let Some(name) = &prop.name {
            if let Some(previous) = registry.register(name.clone(), entity) {
                warn!("Prop name '{}' reused; {} is no longer addressable", name, previous);
            }
        }
    }

    for trigger in &level.facing_triggers {
        spawn_facing_trigger(&mut commands, trigger);
    }

    info!(
        "Level spawned: {} props ({} named), {} facing triggers",
        level.props.len(),
        registry.len(),
        level.facing_triggers.len()
    );
}

fn spawn_prop(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    prop: &PropDef,
) -> Entity {
    let (mesh, collider) = match prop.shape {
        PropShape::Cuboid { size } => (
            meshes.add(Cuboid::new(size.x, size.y, size.z)),
            Collider::cuboid(size.x, size.y, size.z),
        ),
        PropShape::Sphere { radius } => (
            meshes.add(Sphere::new(radius)),
            Collider::sphere(radius),
        ),
    };
    let [r, g, b] = prop.color;

    let mut entity = commands.spawn((
        prop.category,
        Mesh3d(mesh),
        MeshMaterial3d(materials.add(Color::srgb(r, g, b))),
        Transform::from_translation(prop.position),
        visibility_for(prop.active),
        collider,
    ));

    if let Some(name) = &prop.name {
        entity.insert(Name::new(name.clone()));
    }

    match prop.body {
        BodyKind::Static => {
            entity.insert((
                RigidBody::Static,
                CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Prop]),
            ));
        }
        BodyKind::Dynamic => {
            entity.insert((
                RigidBody::Dynamic,
                CollisionLayers::new(
                    GameLayer::Prop,
                    [GameLayer::Ground, GameLayer::Player, GameLayer::Prop],
                ),
            ));
        }
        BodyKind::ColliderOnly => {
            entity.insert(CollisionLayers::new(
                GameLayer::Prop,
                [GameLayer::Player, GameLayer::Prop],
            ));
        }
    }

    if !prop.active {
        entity.insert((ColliderDisabled, RigidBodyDisabled));
    }

    entity.id()
}

fn spawn_facing_trigger(commands: &mut Commands, def: &FacingTriggerDef) {
    let trigger = match FacingTrigger::new(
        def.name.clone(),
        def.required_direction,
        def.threshold_degrees,
        def.enable.clone(),
        def.disable.clone(),
    ) {
        Ok(trigger) => trigger,
        Err(err) => {
            error!("Skipping facing trigger: {err}");
            return;
        }
    };

    let size = def.half_extents * 2.0;
    commands.spawn((
        Name::new(def.name.clone()),
        trigger,
        Transform::from_translation(def.position),
        Collider::cuboid(size.x, size.y, size.z),
        Sensor,
        CollisionEventsEnabled,
        CollidingEntities::default(),
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));
}
