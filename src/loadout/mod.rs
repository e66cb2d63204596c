//! Loadout domain: pre-match weapon selection and match-start equip.
//!
//! The deploy menu never touches the live loadout: selections land in
//! [`PendingLoadout`] and are applied to the player entity only when
//! the match starts. Unlock gating reads the persisted profile as a
//! read-only input.

pub mod systems;


use bevy::ecs::message::Message;
use bevy::prelude::*;
use serde::Deserialize;

use crate::armory::WeaponClass;
use crate::core::GameState;

/// The starting weapons picked in the deploy menu, per class.
/// `None` falls back to the defaults from gameplay_defaults.ron.
#[derive(Resource, Debug, Default, Clone)]
pub struct PendingLoadout {
    pub ranged: Option<String>,
    pub melee: Option<String>,
}

impl PendingLoadout {
    pub fn select(&mut self, class: WeaponClass, name: impl Into<String>) {
        match class {
            WeaponClass::Ranged => self.ranged = Some(name.into()),
            WeaponClass::Melee => self.melee = Some(name.into()),
        }
    }
}

/// Persisted unlock data, read once at boot. This core never writes it.
#[derive(Resource, Debug, Default, Clone, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub distance_traveled: f32,
}

/// Request from the menu layer to pick a starting weapon.
#[derive(Debug)]
pub struct WeaponSelectRequest {
    pub class: WeaponClass,
    pub name: String,
}

impl Message for WeaponSelectRequest {}

/// The menu layer confirmed the loadout; start the match.
#[derive(Debug)]
pub struct DeployConfirmed;

impl Message for DeployConfirmed {}

pub struct LoadoutPlugin;

impl Plugin for LoadoutPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingLoadout>()
            .add_message::<WeaponSelectRequest>()
            .add_message::<DeployConfirmed>()
            .add_systems(
                Startup,
                // Profile path comes from gameplay defaults, which the
                // armory load inserts.
                systems::load_profile.after(crate::armory::load_armory_content),
            )
            .add_systems(OnEnter(GameState::Deploy), systems::spawn_player_rig)
            .add_systems(
                Update,
                (
                    systems::handle_weapon_selection,
                    systems::confirm_on_enter,
                    systems::handle_deploy_confirmed,
                )
                    .chain()
                    .run_if(in_state(GameState::Deploy)),
            )
            .add_systems(OnEnter(GameState::Run), systems::apply_pending_loadout);
    }
}
