//! Sprites module for the layered character rig and its animations.
//!
//! This module handles:
//! - The animation override table (slot -> clip for the equipped loadout)
//! - Body/weapon layer playback fed identically from character flags
//! - Completion callbacks for reload and switch sequences

pub mod animation;
pub mod hud;
pub mod layers;
pub mod overrides;

#[cfg(test)]
mod tests;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

pub use animation::*;
pub use hud::*;
pub use layers::*;
pub use overrides::*;

use crate::core::GameState;
use crate::player::{CharacterFlags, Player};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OverrideTable>()
            .add_message::<AnimTrigger>()
            .add_systems(
                Update,
                (
                    sync_presentation,
                    update_animation_frames,
                    report_finished_actions,
                    apply_override_clips,
                    sync_layer_facing,
                )
                    .chain()
                    // The rig animates in the deploy preview too.
                    .run_if(in_state(GameState::Deploy).or(in_state(GameState::Run))),
            )
            .add_systems(
                Update,
                hud::update_ammo_counter
                    // Reads the clip after a successful reload restocks it.
                    .after(crate::player::switching::handle_completions)
                    .run_if(in_state(GameState::Run)),
            );
    }
}

/// Feed this tick's flags and triggers to every rig layer.
///
/// Both the body and the weapon layer receive the exact same values
/// from the exact same source, so their presentation cannot diverge.
fn sync_presentation(
    player: Query<&CharacterFlags, With<Player>>,
    mut triggers: MessageReader<AnimTrigger>,
    mut layers: Query<&mut AnimationController>,
) {
    let Ok(flags) = player.single() else {
        return;
    };

    let pending: Vec<TriggerKind> = triggers.read().map(|t| t.kind).collect();

    for mut controller in &mut layers {
        controller.set_flags(flags.is_moving, flags.is_crouching);
        for kind in &pending {
            controller.trigger(*kind);
        }
    }
}
