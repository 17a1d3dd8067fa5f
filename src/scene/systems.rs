//! Scene domain: applying activation requests.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::scene::{SceneRegistry, SetActiveRequest};

/// Visibility an object should have for the given activation state.
pub(crate) fn visibility_for(active: bool) -> Visibility {
    if active {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

/// Shows/hides requested objects and switches their colliders and bodies on/off.
/// Names that resolve to nothing are skipped.
pub(crate) fn apply_activation_requests(
    mut commands: Commands,
    mut requests: MessageReader<SetActiveRequest>,
    registry: Res<SceneRegistry>,
) {
    for request in requests.read() {
        let Some(entity) = registry.resolve(&request.name) else {
            warn!(
                "Activation target '{}' is not registered; skipping",
                request.name
            );
            continue;
        };

        let mut entity_commands = commands.entity(entity);
        entity_commands.try_insert(visibility_for(request.active));
        if request.active {
            entity_commands.try_remove::<(ColliderDisabled, RigidBodyDisabled)>();
        } else {
            entity_commands.try_insert((ColliderDisabled, RigidBodyDisabled));
        }

        debug!(
            "Set '{}' ({}) active={}",
            request.name, entity, request.active
        );
    }
}
