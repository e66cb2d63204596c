//! Validation of the loaded armory against the gameplay defaults.
//!
//! Content is static, so every name the game can reference must resolve
//! before play begins. Validation failures are fatal at boot.

use super::data::GameplayDefaults;
use super::registry::Armory;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source: &'static str,
    pub id: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}': {}", self.source, self.id, self.message)
    }
}

/// Validate the armory and its cross-references from gameplay defaults.
/// Returns a list of validation errors, empty if everything resolves.
pub fn validate_armory(armory: &Armory, defaults: &GameplayDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !armory.ranged.contains_key(&defaults.player.default_ranged) {
        errors.push(ValidationError {
            source: "GameplayDefaults",
            id: defaults.player.default_ranged.clone(),
            message: "default_ranged references a missing ranged weapon".to_string(),
        });
    }
    if !armory.melee.contains_key(&defaults.player.default_melee) {
        errors.push(ValidationError {
            source: "GameplayDefaults",
            id: defaults.player.default_melee.clone(),
            message: "default_melee references a missing melee weapon".to_string(),
        });
    }
    if defaults.player.wounds_to_die == 0 {
        errors.push(ValidationError {
            source: "GameplayDefaults",
            id: "wounds_to_die".to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    // The cadence roll samples min_interval..max_interval; an empty or
    // inverted range would panic mid-run.
    if defaults.projectiles.min_interval <= 0.0 {
        errors.push(ValidationError {
            source: "GameplayDefaults",
            id: "projectiles.min_interval".to_string(),
            message: "must be positive".to_string(),
        });
    }
    if defaults.projectiles.max_interval <= defaults.projectiles.min_interval {
        errors.push(ValidationError {
            source: "GameplayDefaults",
            id: "projectiles.max_interval".to_string(),
            message: "must be greater than min_interval".to_string(),
        });
    }

    for (id, def) in &armory.ranged {
        if def.clip_size == 0 {
            errors.push(ValidationError {
                source: "RangedWeapon",
                id: id.clone(),
                message: "clip_size must be at least 1".to_string(),
            });
        }
        if def.ammo_counter.is_empty() {
            errors.push(ValidationError {
                source: "RangedWeapon",
                id: id.clone(),
                message: "ammo_counter sprite sequence is empty".to_string(),
            });
        }
        if def.unlock_distance < 0.0 {
            errors.push(ValidationError {
                source: "RangedWeapon",
                id: id.clone(),
                message: "unlock_distance must not be negative".to_string(),
            });
        }
    }

    for (id, def) in &armory.melee {
        if def.unlock_distance < 0.0 {
            errors.push(ValidationError {
                source: "MeleeWeapon",
                id: id.clone(),
                message: "unlock_distance must not be negative".to_string(),
            });
        }
    }

    errors
}
