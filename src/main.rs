mod armory;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod loadout;
mod player;
mod projectiles;
mod sprites;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Trenchline".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        armory::ArmoryPlugin,
        loadout::LoadoutPlugin,
        player::PlayerPlugin,
        sprites::SpritesPlugin,
        projectiles::ProjectilesPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
