//! Player domain: completion handling for reload and switch sequences.
//!
//! The animation/timing layer delivers discrete completion callbacks;
//! this is where their effects land: ammo restock on a successful
//! reload, class flip plus override-table rebuild on a successful
//! switch. Signals that do not match the current state are duplicate
//! or late deliveries and degrade to no-ops.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::components::{
    AmmoClip, CompletionOutcome, EquippedLoadout, Player, TransitionState,
};
use super::events::{ReloadFinished, SwitchFinished};
use crate::armory::Armory;
use crate::sprites::OverrideTable;

pub(crate) fn handle_completions(
    armory: Res<Armory>,
    mut reload_done: MessageReader<ReloadFinished>,
    mut switch_done: MessageReader<SwitchFinished>,
    mut table: ResMut<OverrideTable>,
    mut query: Query<
        (&mut TransitionState, &mut EquippedLoadout, &mut AmmoClip),
        With<Player>,
    >,
) {
    let Ok((mut transition, mut loadout, mut ammo)) = query.single_mut() else {
        return;
    };

    for msg in reload_done.read() {
        match transition.complete_reload(msg.success) {
            CompletionOutcome::Applied => match armory.lookup_ranged(&loadout.ranged) {
                Ok(def) => {
                    ammo.restock(def.clip_size);
                    info!("reload complete: {} restocked to {}", def.id, def.clip_size);
                }
                Err(e) => warn!("reload restock skipped: {}", e),
            },
            CompletionOutcome::Discarded => {
                debug!("reload interrupted, no restock");
            }
            CompletionOutcome::Stale => {}
        }
    }

    for msg in switch_done.read() {
        match transition.complete_switch(msg.success) {
            CompletionOutcome::Applied => {
                loadout.active = loadout.active.other();
                info!("switched to {:?} ({})", loadout.active, loadout.active_id());
                rebuild_overrides(&armory, &loadout, &mut table, false);
            }
            CompletionOutcome::Discarded => {
                debug!("weapon switch interrupted, class unchanged");
            }
            CompletionOutcome::Stale => {}
        }
    }
}

/// Rebuild the override table for the current loadout.
///
/// `full_refresh` rewrites the attack/shoot/reload slots too and is
/// only used on an actual equip change, not on a class flip.
pub(crate) fn rebuild_overrides(
    armory: &Armory,
    loadout: &EquippedLoadout,
    table: &mut OverrideTable,
    full_refresh: bool,
) {
    let (ranged, melee) = match (
        armory.lookup_ranged(&loadout.ranged),
        armory.lookup_melee(&loadout.melee),
    ) {
        (Ok(r), Ok(m)) => (r, m),
        (Err(e), _) | (_, Err(e)) => {
            // Content is validated at boot, so this indicates a bug.
            warn!("override rebuild skipped: {}", e);
            return;
        }
    };

    table.rebuild(ranged, melee, loadout.active, full_refresh);
}
