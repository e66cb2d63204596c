//! Core domain: match flow systems and setup.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use super::resources::RunConfig;
use super::state::GameState;
use crate::player::PlayerDied;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Content loads in Startup; once the armory resource exists, move on
/// to the deploy menu.
pub(crate) fn advance_from_boot(
    armory: Option<Res<crate::armory::Armory>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if armory.is_some() {
        next_state.set(GameState::Deploy);
    }
}

/// Initialize a new run with a fresh seed and zeroed distance.
pub(crate) fn initialize_run(mut run_config: ResMut<RunConfig>) {
    let seed = rand::rng().random();
    run_config.reset(seed);
    info!("match start, seed {}", run_config.seed);
}

/// Move to the end screen when the player goes down.
pub(crate) fn handle_death(
    mut died: MessageReader<PlayerDied>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if died.read().next().is_some() {
        next_state.set(GameState::Dead);
    }
}
