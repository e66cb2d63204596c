//! Animation override table.
//!
//! Maps the fixed set of animation slots the character rig samples onto
//! concrete clip names for the currently equipped weapons. The table is
//! rebuilt by value on loadout changes and class flips, never patched
//! incrementally, so consumers can never observe a half-updated rig.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::armory::{MeleeWeaponDef, RangedWeaponDef, WeaponClass};

/// The animation slots the rig samples each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideSlot {
    StandIdle,
    CrouchIdle,
    Run,
    StandAttack,
    CrouchAttack,
    StandShoot,
    CrouchShoot,
    StandReload,
    CrouchReload,
    StandEquip,
    CrouchEquip,
    StandUnequip,
    CrouchUnequip,
}

impl OverrideSlot {
    pub const ALL: [OverrideSlot; 13] = [
        OverrideSlot::StandIdle,
        OverrideSlot::CrouchIdle,
        OverrideSlot::Run,
        OverrideSlot::StandAttack,
        OverrideSlot::CrouchAttack,
        OverrideSlot::StandShoot,
        OverrideSlot::CrouchShoot,
        OverrideSlot::StandReload,
        OverrideSlot::CrouchReload,
        OverrideSlot::StandEquip,
        OverrideSlot::CrouchEquip,
        OverrideSlot::StandUnequip,
        OverrideSlot::CrouchUnequip,
    ];
}

/// Slot -> clip mapping for the equipped loadout.
///
/// `None` is an explicit "no visual for this slot", distinct from a slot
/// simply not having been written yet: every slot is always present.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct OverrideTable {
    slots: HashMap<OverrideSlot, Option<String>>,
}

impl Default for OverrideTable {
    fn default() -> Self {
        let slots = OverrideSlot::ALL.iter().map(|s| (*s, None)).collect();
        Self { slots }
    }
}

impl OverrideTable {
    /// Clip currently bound to a slot, if any.
    pub fn get(&self, slot: OverrideSlot) -> Option<&str> {
        self.slots.get(&slot).and_then(|clip| clip.as_deref())
    }

    /// Rebuild the table for the given loadout.
    ///
    /// Posture slots (idles, run, unequips) come from the active class;
    /// equip slots come from the inactive class, because "equip" shows
    /// the weapon being drawn, which is the one not currently in hand.
    /// Attack, shoot and reload slots are only rewritten on a
    /// `full_refresh` (an actual equip change, not a mere class flip).
    ///
    /// The new mapping is built aside and swapped in wholesale.
    pub fn rebuild(
        &mut self,
        ranged: &RangedWeaponDef,
        melee: &MeleeWeaponDef,
        active: WeaponClass,
        full_refresh: bool,
    ) {
        let (held, stowed) = match active {
            WeaponClass::Ranged => (&ranged.clips, &melee.clips),
            WeaponClass::Melee => (&melee.clips, &ranged.clips),
        };

        let mut next = self.slots.clone();
        next.insert(OverrideSlot::StandIdle, held.stand_idle.clone());
        next.insert(OverrideSlot::CrouchIdle, held.crouch_idle.clone());
        next.insert(OverrideSlot::Run, held.run.clone());
        next.insert(OverrideSlot::StandUnequip, held.stand_unequip.clone());
        next.insert(OverrideSlot::CrouchUnequip, held.crouch_unequip.clone());

        next.insert(OverrideSlot::StandEquip, stowed.stand_equip.clone());
        next.insert(OverrideSlot::CrouchEquip, stowed.crouch_equip.clone());

        if full_refresh {
            next.insert(OverrideSlot::StandAttack, melee.clips.stand_attack.clone());
            next.insert(
                OverrideSlot::CrouchAttack,
                melee.clips.crouch_attack.clone(),
            );
            next.insert(OverrideSlot::StandShoot, ranged.clips.stand_shoot.clone());
            next.insert(OverrideSlot::CrouchShoot, ranged.clips.crouch_shoot.clone());
            next.insert(OverrideSlot::StandReload, ranged.clips.stand_reload.clone());
            next.insert(
                OverrideSlot::CrouchReload,
                ranged.clips.crouch_reload.clone(),
            );
        }

        self.slots = next;
    }
}
