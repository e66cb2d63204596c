//! Armory domain: immutable weapon catalog loaded from RON content.

pub mod data;
pub mod loader;
pub mod registry;
pub mod validation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use std::path::Path;

pub use data::*;
pub use loader::ContentLoadError;
pub use registry::{Armory, UnknownWeapon};
pub use validation::{ValidationError, validate_armory};

pub struct ArmoryPlugin;

impl Plugin for ArmoryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_armory_content);
    }
}

/// Load and validate all weapon content at boot.
///
/// Content is static and every name the UI or defaults reference must
/// resolve, so any load or validation error is fatal here rather than
/// surfacing mid-run.
pub(crate) fn load_armory_content(mut commands: Commands) {
    let base_path = Path::new("assets/data");

    let (armory, defaults) = match loader::load_armory(base_path) {
        Ok(loaded) => loaded,
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            panic!("armory content failed to load ({} errors)", errors.len());
        }
    };

    let validation_errors = validate_armory(&armory, &defaults);
    if !validation_errors.is_empty() {
        for e in &validation_errors {
            error!("{}", e);
        }
        panic!(
            "armory content failed validation ({} errors)",
            validation_errors.len()
        );
    }

    info!("{}", armory.summary());
    commands.insert_resource(armory);
    commands.insert_resource(defaults);
}
