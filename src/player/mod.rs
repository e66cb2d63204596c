//! Player domain: input resolution, weapon-transition state machine,
//! ammo bookkeeping and locomotion.

pub mod components;
pub mod events;
pub mod input;
pub mod switching;
pub mod systems;


use bevy::prelude::*;

pub use components::*;
pub use events::*;
pub use input::RawInput;

use crate::core::GameState;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RawInput>()
            .add_message::<ReloadFinished>()
            .add_message::<SwitchFinished>()
            .add_message::<ShotFired>()
            .add_message::<PlayerWounded>()
            .add_message::<PlayerDied>()
            .add_systems(
                Update,
                // Input is fully resolved into flags and triggers before
                // completion-driven state changes apply; rebuilds happen
                // inside completion handling, never interleaved with
                // input resolution.
                (
                    input::sample_raw_input,
                    input::resolve_character_input,
                    switching::handle_completions,
                    systems::apply_movement,
                    systems::track_distance,
                    systems::handle_wounds,
                )
                    .chain()
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                Update,
                // The deploy menu's switch preview also ends through a
                // completion signal.
                switching::handle_completions.run_if(in_state(GameState::Deploy)),
            );
    }
}
