//! Loader for RON armory files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::Armory;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a RON file containing a DataFile<T> wrapper.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let data: DataFile<T> = ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Load a single RON struct (not wrapped in DataFile).
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Load all weapon content from assets/data/*.ron into an Armory.
/// Duplicate ids within a file are load errors; the maps are only
/// populated here, never after.
pub fn load_armory(base_path: &Path) -> Result<(Armory, GameplayDefaults), Vec<ContentLoadError>> {
    let mut armory = Armory::default();
    let mut errors = Vec::new();

    let ranged_path = base_path.join("ranged_weapons.ron");
    match load_data_file::<RangedWeaponDef>(&ranged_path) {
        Ok(items) => {
            for item in items {
                if armory.ranged.insert(item.id.clone(), item.clone()).is_some() {
                    errors.push(ContentLoadError {
                        file: ranged_path.display().to_string(),
                        message: format!("duplicate ranged weapon id '{}'", item.id),
                    });
                }
            }
        }
        Err(e) => errors.push(e),
    }

    let melee_path = base_path.join("melee_weapons.ron");
    match load_data_file::<MeleeWeaponDef>(&melee_path) {
        Ok(items) => {
            for item in items {
                if armory.melee.insert(item.id.clone(), item.clone()).is_some() {
                    errors.push(ContentLoadError {
                        file: melee_path.display().to_string(),
                        message: format!("duplicate melee weapon id '{}'", item.id),
                    });
                }
            }
        }
        Err(e) => errors.push(e),
    }

    // Gameplay defaults (single struct, not a list)
    let defaults_path = base_path.join("gameplay_defaults.ron");
    let defaults = match load_single_file::<GameplayDefaults>(&defaults_path) {
        Ok(defaults) => defaults,
        Err(e) => {
            errors.push(e);
            // Required file - nothing sensible to run without it
            return Err(errors);
        }
    };

    if errors.is_empty() {
        Ok((armory, defaults))
    } else {
        Err(errors)
    }
}
