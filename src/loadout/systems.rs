//! Loadout domain: profile read, deploy selection and match start.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::fs;

use super::{DeployConfirmed, PendingLoadout, Profile, WeaponSelectRequest};
use crate::armory::{Armory, GameplayDefaults, WeaponClass};
use crate::core::GameState;
use crate::player::switching::rebuild_overrides;
use crate::player::{
    AmmoClip, CharacterFlags, EquippedLoadout, Player, TransitionState, Wounds,
};
use crate::sprites::{
    AmmoCounter, AnimTrigger, AnimationController, BodyLayer, LayerClip, LayeredSprite,
    OverrideTable, SpriteLayer, TriggerKind, WeaponLayer,
};

/// Read the persisted profile. Missing or corrupt files degrade to a
/// fresh profile; unlock data is an input here, never written.
pub(crate) fn load_profile(defaults: Res<GameplayDefaults>, mut commands: Commands) {
    let profile = match fs::read_to_string(&defaults.profile_path) {
        Ok(contents) => match serde_json::from_str::<Profile>(&contents) {
            Ok(profile) => profile,
            Err(e) => {
                warn!("profile {} unreadable ({}), using defaults", defaults.profile_path, e);
                Profile::default()
            }
        },
        Err(_) => {
            info!("no profile at {}, starting fresh", defaults.profile_path);
            Profile::default()
        }
    };

    info!("profile distance traveled: {}", profile.distance_traveled);
    commands.insert_resource(profile);
}

/// Spawn the player rig when the deploy menu opens, equipped with the
/// default loadout so the menu has something to preview.
pub(crate) fn spawn_player_rig(
    armory: Res<Armory>,
    defaults: Res<GameplayDefaults>,
    mut table: ResMut<OverrideTable>,
    mut commands: Commands,
) {
    let loadout = EquippedLoadout::new(
        defaults.player.default_ranged.clone(),
        defaults.player.default_melee.clone(),
    );

    let clip_size = match armory.lookup_ranged(&loadout.ranged) {
        Ok(def) => def.clip_size,
        // Defaults are validated at boot; this is unreachable content.
        Err(e) => {
            warn!("{}", e);
            0
        }
    };

    rebuild_overrides(&armory, &loadout, &mut table, true);

    let body = commands
        .spawn((
            BodyLayer,
            AnimationController::default(),
            LayerClip::default(),
            Sprite {
                color: Color::srgb(0.55, 0.52, 0.45),
                custom_size: Some(Vec2::new(24.0, 48.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, SpriteLayer::Body.z_index()),
        ))
        .id();

    let weapon = commands
        .spawn((
            WeaponLayer,
            AnimationController::default(),
            LayerClip::default(),
            Sprite {
                color: Color::srgb(0.35, 0.35, 0.35),
                custom_size: Some(Vec2::new(32.0, 12.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, SpriteLayer::Weapon.z_index()),
        ))
        .id();

    commands.spawn((
        AmmoCounter::default(),
        Sprite {
            color: Color::srgb(0.8, 0.75, 0.5),
            custom_size: Some(Vec2::new(48.0, 16.0)),
            ..default()
        },
        Transform::from_xyz(-560.0, 320.0, SpriteLayer::Hud.z_index()),
    ));

    commands
        .spawn((
            Player,
            loadout,
            CharacterFlags::default(),
            TransitionState::default(),
            AmmoClip::full(clip_size),
            Wounds::new(defaults.player.wounds_to_die),
            LayeredSprite::default(),
            RigidBody::Kinematic,
            Collider::rectangle(24.0, 48.0),
            LinearVelocity::default(),
            Transform::from_xyz(-200.0, 0.0, 0.0),
            Visibility::default(),
        ))
        .add_child(body)
        .add_child(weapon);
}

/// Apply a menu selection to the pending loadout.
///
/// Weapons whose unlock distance exceeds the profile's traveled
/// distance are rejected. Selecting the class that is not currently in
/// the preview's hands plays the switch sequence, as the original menu
/// does, but the live loadout is untouched until match start.
pub(crate) fn handle_weapon_selection(
    mut requests: MessageReader<WeaponSelectRequest>,
    armory: Res<Armory>,
    profile: Res<Profile>,
    mut pending: ResMut<PendingLoadout>,
    mut player: Query<(&EquippedLoadout, &mut TransitionState), With<Player>>,
    mut triggers: MessageWriter<AnimTrigger>,
) {
    for request in requests.read() {
        let unlock = match armory.unlock_distance(request.class, &request.name) {
            Ok(distance) => distance,
            Err(e) => {
                warn!("selection rejected: {}", e);
                continue;
            }
        };

        if profile.distance_traveled < unlock {
            warn!(
                "selection rejected: '{}' unlocks at {} (traveled {})",
                request.name, unlock, profile.distance_traveled
            );
            continue;
        }

        pending.select(request.class, request.name.clone());
        info!("pending {:?} weapon: {}", request.class, request.name);

        if let Ok((loadout, mut transition)) = player.single_mut() {
            if loadout.active != request.class && transition.begin_switch() {
                triggers.write(AnimTrigger {
                    kind: TriggerKind::SwitchWeapon,
                });
            }
        }
    }
}

/// Minimal menu binding: Enter confirms the loadout and starts the
/// match. The full menu layer drives the same messages.
pub(crate) fn confirm_on_enter(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut confirmed: MessageWriter<DeployConfirmed>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        confirmed.write(DeployConfirmed);
    }
}

pub(crate) fn handle_deploy_confirmed(
    mut confirmed: MessageReader<DeployConfirmed>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if confirmed.read().next().is_some() {
        next_state.set(GameState::Run);
    }
}

/// Resolve the pending selection against the armory and equip it.
///
/// This is the only place the live loadout changes outside a completed
/// switch: full refresh of the override table, clip filled, transition
/// state reset.
pub(crate) fn apply_pending_loadout(
    armory: Res<Armory>,
    defaults: Res<GameplayDefaults>,
    pending: Res<PendingLoadout>,
    mut table: ResMut<OverrideTable>,
    mut query: Query<
        (
            &mut EquippedLoadout,
            &mut TransitionState,
            &mut CharacterFlags,
            &mut AmmoClip,
        ),
        With<Player>,
    >,
) {
    let Ok((mut loadout, mut transition, mut flags, mut ammo)) = query.single_mut() else {
        return;
    };

    let ranged = pending
        .ranged
        .clone()
        .unwrap_or_else(|| defaults.player.default_ranged.clone());
    let melee = pending
        .melee
        .clone()
        .unwrap_or_else(|| defaults.player.default_melee.clone());

    let ranged = match armory.lookup_ranged(&ranged) {
        Ok(def) => def.id.clone(),
        Err(e) => {
            warn!("{}; falling back to default", e);
            defaults.player.default_ranged.clone()
        }
    };
    let melee = match armory.lookup_melee(&melee) {
        Ok(def) => def.id.clone(),
        Err(e) => {
            warn!("{}; falling back to default", e);
            defaults.player.default_melee.clone()
        }
    };

    *loadout = EquippedLoadout::new(ranged, melee);
    *transition = TransitionState::Idle;
    *flags = CharacterFlags::default();

    if let Ok(def) = armory.lookup_ranged(&loadout.ranged) {
        ammo.restock(def.clip_size);
    }

    rebuild_overrides(&armory, &loadout, &mut table, true);
    info!(
        "deployed with {} / {}",
        loadout.ranged, loadout.melee
    );
}
