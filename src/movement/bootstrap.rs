//! Movement domain: player bootstrap from the level definition.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::carry::Carrier;
use crate::content::LevelDef;
use crate::core::{Category, GameLayer};
use crate::movement::{FirstPersonCamera, MovementTuning, Player, PlayerCamera, PlayerMotion};

/// Spawns the player body and its camera, then binds the two explicitly.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    level: Res<LevelDef>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let motion = PlayerMotion::with_yaw(level.player_yaw);

    let player = commands
        .spawn((
            // Identity & Movement
            (
                Name::new("Player"),
                Player,
                Category::Player,
                Carrier::default(),
            ),
            Transform::from_translation(level.player_spawn).with_rotation(motion.body_rotation()),
            motion,
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(tuning.body_radius, tuning.capsule_length()),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // Gravity is integrated by the movement systems
                Friction::new(0.0),
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Prop, GameLayer::Sensor],
                ),
            ),
        ))
        .id();

    let camera = commands
        .spawn((
            Name::new("PlayerCamera"),
            FirstPersonCamera,
            Camera3d::default(),
            Transform::from_xyz(0.0, tuning.eye_offset, 0.0),
            ChildOf(player),
        ))
        .id();

    commands.entity(player).insert(PlayerCamera { camera });

    info!(
        "Spawning player at {} (yaw {}), speed={}, jump_apex={:.2}m",
        level.player_spawn,
        level.player_yaw,
        tuning.move_speed,
        tuning.jump_apex_height()
    );
}
