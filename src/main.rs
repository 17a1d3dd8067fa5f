mod carry;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod scene;
mod triggers;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Where Vimto".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        scene::ScenePlugin,
        movement::MovementPlugin,
        carry::CarryPlugin,
        triggers::TriggersPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
