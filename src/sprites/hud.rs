//! HUD ammo counter.
//!
//! Picks the ammo-counter sprite for the active ranged weapon from its
//! empty-to-full sequence. Data-level only: rendering samples
//! `sprite_key` the same way the rig layers sample [`LayerClip`].

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::armory::Armory;
use crate::player::{AmmoClip, EquippedLoadout, Player, ReloadFinished, ShotFired};

/// Marker plus the currently selected counter sprite.
#[derive(Component, Debug, Default)]
pub struct AmmoCounter {
    pub sprite_key: Option<String>,
}

/// Refresh the counter when a shot or a reload changes the clip.
pub fn update_ammo_counter(
    mut shots: MessageReader<ShotFired>,
    mut reloads: MessageReader<ReloadFinished>,
    armory: Res<Armory>,
    player: Query<(&AmmoClip, &EquippedLoadout), With<Player>>,
    mut counters: Query<&mut AmmoCounter>,
) {
    let fired = shots.read().count() > 0;
    let reloaded = reloads.read().count() > 0;
    let unset = counters.iter().any(|c| c.sprite_key.is_none());
    if !fired && !reloaded && !unset {
        return;
    }

    let Ok((ammo, loadout)) = player.single() else {
        return;
    };
    let Ok(def) = armory.lookup_ranged(&loadout.ranged) else {
        return;
    };

    let index = ammo.counter_index(def.clip_size, def.ammo_counter.len());
    for mut counter in &mut counters {
        counter.sprite_key = def.ammo_counter.get(index).cloned();
    }
}
