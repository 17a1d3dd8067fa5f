//! Scene domain: tests for the name registry and activation requests.

use avian3d::prelude::{ColliderDisabled, RigidBodyDisabled};
use bevy::prelude::*;

use super::systems::visibility_for;
use super::{SceneRegistry, SetActiveRequest, apply_activation_requests};

#[test]
fn test_registry_resolves_registered_names() {
    let mut registry = SceneRegistry::default();
    assert!(registry.is_empty());

    assert_eq!(registry.register("vimto", Entity::from_bits(5)), None);
    assert_eq!(registry.resolve("vimto"), Some(Entity::from_bits(5)));
    assert_eq!(registry.resolve("missing"), None);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_registry_reuse_returns_previous_entity() {
    let mut registry = SceneRegistry::default();
    registry.register("crate", Entity::from_bits(5));

    assert_eq!(
        registry.register("crate", Entity::from_bits(6)),
        Some(Entity::from_bits(5))
    );
    assert_eq!(registry.resolve("crate"), Some(Entity::from_bits(6)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_visibility_for_activation_state() {
    assert_eq!(visibility_for(true), Visibility::Inherited);
    assert_eq!(visibility_for(false), Visibility::Hidden);
}

fn activation_app() -> App {
    let mut app = App::new();
    app.init_resource::<SceneRegistry>()
        .add_message::<SetActiveRequest>()
        .add_systems(Update, apply_activation_requests);
    app
}

#[test]
fn test_activation_request_shows_and_hides_registered_objects() {
    let mut app = activation_app();
    let hidden = app
        .world_mut()
        .spawn((Visibility::Hidden, ColliderDisabled, RigidBodyDisabled))
        .id();
    let shown = app.world_mut().spawn(Visibility::Inherited).id();
    {
        let mut registry = app.world_mut().resource_mut::<SceneRegistry>();
        registry.register("vimto", hidden);
        registry.register("window", shown);
    }

    app.world_mut().write_message(SetActiveRequest {
        name: "vimto".to_string(),
        active: true,
    });
    app.world_mut().write_message(SetActiveRequest {
        name: "window".to_string(),
        active: false,
    });
    app.update();

    let world = app.world();
    assert_eq!(world.get::<Visibility>(hidden), Some(&Visibility::Inherited));
    assert!(world.get::<ColliderDisabled>(hidden).is_none());
    assert!(world.get::<RigidBodyDisabled>(hidden).is_none());
    assert_eq!(world.get::<Visibility>(shown), Some(&Visibility::Hidden));
    assert!(world.get::<ColliderDisabled>(shown).is_some());
    assert!(world.get::<RigidBodyDisabled>(shown).is_some());
}

#[test]
fn test_activation_request_for_unknown_name_is_skipped() {
    let mut app = activation_app();
    let bystander = app.world_mut().spawn(Visibility::Inherited).id();

    app.world_mut().write_message(SetActiveRequest {
        name: "nowhere".to_string(),
        active: false,
    });
    app.update();

    assert_eq!(
        app.world().get::<Visibility>(bystander),
        Some(&Visibility::Inherited)
    );
}

#[test]
fn test_activation_request_for_despawned_object_does_not_panic() {
    let mut app = activation_app();
    let gone = app.world_mut().spawn(Visibility::Inherited).id();
    app.world_mut()
        .resource_mut::<SceneRegistry>()
        .register("gone", gone);
    app.world_mut().despawn(gone);

    app.world_mut().write_message(SetActiveRequest {
        name: "gone".to_string(),
        active: false,
    });
    app.update();

    assert!(app.world().get_entity(gone).is_err());
}
