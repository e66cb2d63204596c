//! Core domain: game states, run config and match flow.

pub mod resources;
pub mod state;
pub mod systems;

use bevy::prelude::*;

pub use resources::RunConfig;
pub use state::GameState;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .add_systems(Startup, systems::setup_camera)
            .add_systems(
                Update,
                systems::advance_from_boot.run_if(in_state(GameState::Boot)),
            )
            .add_systems(OnEnter(GameState::Run), systems::initialize_run)
            .add_systems(
                Update,
                systems::handle_death.run_if(in_state(GameState::Run)),
            );
    }
}
