//! Data definitions for the RON armory files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The Armory resource provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Weapon classes
// ============================================================================

/// Which of the two carried weapons a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect, Default)]
pub enum WeaponClass {
    #[default]
    Ranged,
    Melee,
}

impl WeaponClass {
    /// The class the character would switch into from this one.
    pub fn other(self) -> Self {
        match self {
            WeaponClass::Ranged => WeaponClass::Melee,
            WeaponClass::Melee => WeaponClass::Ranged,
        }
    }
}

// ============================================================================
// Animation clip references
// ============================================================================

/// Named animation clips for one weapon, per posture.
///
/// `None` means the weapon has no visual for that slot; the override
/// table clears the slot rather than keeping a stale clip.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Reflect)]
pub struct WeaponClips {
    #[serde(default)]
    pub stand_idle: Option<String>,
    #[serde(default)]
    pub crouch_idle: Option<String>,
    #[serde(default)]
    pub run: Option<String>,
    #[serde(default)]
    pub stand_attack: Option<String>,
    #[serde(default)]
    pub crouch_attack: Option<String>,
    #[serde(default)]
    pub stand_shoot: Option<String>,
    #[serde(default)]
    pub crouch_shoot: Option<String>,
    #[serde(default)]
    pub stand_reload: Option<String>,
    #[serde(default)]
    pub crouch_reload: Option<String>,
    #[serde(default)]
    pub stand_equip: Option<String>,
    #[serde(default)]
    pub crouch_equip: Option<String>,
    #[serde(default)]
    pub stand_unequip: Option<String>,
    #[serde(default)]
    pub crouch_unequip: Option<String>,
}

// ============================================================================
// Ranged weapons (ranged_weapons.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct RangedWeaponDef {
    pub id: String,
    pub name: String,
    pub range: f32,
    pub speed: f32,
    pub ap: i32,
    pub dmg: i32,
    pub clip_size: u32,
    /// Distance the player must have traveled for this weapon to be
    /// selectable in the deploy menu.
    #[serde(default)]
    pub unlock_distance: f32,
    /// Sprite sequence for the HUD ammo counter, empty-to-full.
    pub ammo_counter: Vec<String>,
    pub clips: WeaponClips,
}

// ============================================================================
// Melee weapons (melee_weapons.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct MeleeWeaponDef {
    pub id: String,
    pub name: String,
    pub range: f32,
    pub speed: f32,
    pub ap: i32,
    pub dmg: i32,
    #[serde(default)]
    pub unlock_distance: f32,
    pub clips: WeaponClips,
}

// ============================================================================
// Gameplay Defaults (gameplay_defaults.ron) - Single struct, not a list
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect, Resource)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    pub player: PlayerDefaults,
    pub projectiles: ProjectileDefaults,
    /// Path of the JSON profile file holding persisted unlock data.
    pub profile_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct PlayerDefaults {
    pub move_speed: f32,
    /// Loadout used when the deploy menu confirms without a selection.
    pub default_ranged: String,
    pub default_melee: String,
    pub wounds_to_die: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct ProjectileDefaults {
    pub speed: f32,
    /// Seconds between enemy shots, rolled uniformly per shot.
    pub min_interval: f32,
    pub max_interval: f32,
}
