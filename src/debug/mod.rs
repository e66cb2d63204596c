//! Debug tooling for fast iteration, behind the `dev-tools` feature.
//!
//! Hotkeys:
//! - F3: toggle state tracing (transition/flag changes logged per tick)
//! - F4: toggle invincibility
//! - F5: refill the clip

use bevy::prelude::*;

use crate::armory::Armory;
use crate::core::{GameState, RunConfig};
use crate::player::{
    AmmoClip, CharacterFlags, EquippedLoadout, Invulnerable, Player, TransitionState,
};

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether per-tick state tracing is on.
    pub trace: bool,
    /// Whether projectile hits are ignored.
    pub invincible: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (handle_debug_hotkeys, trace_player_state)
                .chain()
                .run_if(in_state(GameState::Run)),
        );
    }
}

fn handle_debug_hotkeys(
    keys: Res<ButtonInput<KeyCode>>,
    armory: Res<Armory>,
    mut state: ResMut<DebugState>,
    mut player: Query<
        (
            Entity,
            Option<&Invulnerable>,
            &EquippedLoadout,
            &mut AmmoClip,
        ),
        With<Player>,
    >,
    mut commands: Commands,
) {
    if keys.just_pressed(KeyCode::F3) {
        state.trace = !state.trace;
        info!("debug trace {}", if state.trace { "on" } else { "off" });
    }
    if keys.just_pressed(KeyCode::F4) {
        state.invincible = !state.invincible;
        if let Ok((entity, shielded, _, _)) = player.single_mut() {
            if state.invincible && shielded.is_none() {
                commands.entity(entity).insert(Invulnerable);
            } else if !state.invincible && shielded.is_some() {
                commands.entity(entity).remove::<Invulnerable>();
            }
        }
        info!(
            "invincibility {}",
            if state.invincible { "on" } else { "off" }
        );
    }
    if keys.just_pressed(KeyCode::F5) {
        if let Ok((_, _, loadout, mut ammo)) = player.single_mut() {
            if refill_clip(&armory, loadout, &mut ammo) {
                info!("clip refilled");
            }
        }
    }
}

/// Restock the clip to the active ranged weapon's full size.
fn refill_clip(armory: &Armory, loadout: &EquippedLoadout, ammo: &mut AmmoClip) -> bool {
    match armory.lookup_ranged(&loadout.ranged) {
        Ok(def) => {
            ammo.restock(def.clip_size);
            true
        }
        Err(e) => {
            warn!("clip refill skipped: {}", e);
            false
        }
    }
}

/// Log transition/flag changes so control bugs can be read off the
/// console instead of guessed from animation.
fn trace_player_state(
    state: Res<DebugState>,
    run: Res<RunConfig>,
    player: Query<(&TransitionState, &CharacterFlags, &AmmoClip), With<Player>>,
    mut last: Local<Option<(TransitionState, CharacterFlags)>>,
) {
    if !state.trace {
        return;
    }
    let Ok((transition, flags, ammo)) = player.single() else {
        return;
    };
    let snapshot = (*transition, *flags);
    if last.as_ref() != Some(&snapshot) {
        debug!(
            "d={:.0} transition={:?} flags={:?} rounds={}",
            run.distance_traveled, transition, flags, ammo.rounds
        );
        *last = Some(snapshot);
    }
}
