//! Armory resource providing HashMap lookups for all loaded weapons.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Catalog miss: a name was requested that no definition carries.
///
/// Content is static, so this is fatal at load time when raised by
/// validation; runtime callers treat it as a hard bug.
#[derive(Debug)]
pub struct UnknownWeapon {
    pub class: WeaponClass,
    pub name: String,
}

impl std::fmt::Display for UnknownWeapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {:?} weapon '{}'", self.class, self.name)
    }
}

/// Central registry for all loaded weapon definitions.
/// Populated once at boot and read-only afterwards.
#[derive(Resource, Default)]
pub struct Armory {
    pub ranged: HashMap<String, RangedWeaponDef>,
    pub melee: HashMap<String, MeleeWeaponDef>,
}

impl Armory {
    pub fn lookup_ranged(&self, name: &str) -> Result<&RangedWeaponDef, UnknownWeapon> {
        self.ranged.get(name).ok_or_else(|| UnknownWeapon {
            class: WeaponClass::Ranged,
            name: name.to_string(),
        })
    }

    pub fn lookup_melee(&self, name: &str) -> Result<&MeleeWeaponDef, UnknownWeapon> {
        self.melee.get(name).ok_or_else(|| UnknownWeapon {
            class: WeaponClass::Melee,
            name: name.to_string(),
        })
    }

    /// Unlock distance for a weapon of either class.
    pub fn unlock_distance(&self, class: WeaponClass, name: &str) -> Result<f32, UnknownWeapon> {
        match class {
            WeaponClass::Ranged => self.lookup_ranged(name).map(|def| def.unlock_distance),
            WeaponClass::Melee => self.lookup_melee(name).map(|def| def.unlock_distance),
        }
    }

    /// Returns a summary of loaded weapon counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "Armory loaded: {} ranged, {} melee",
            self.ranged.len(),
            self.melee.len()
        )
    }
}
