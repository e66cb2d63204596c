//! Player domain: raw input sampling and per-tick flag resolution.
//!
//! Sampling and resolution are split so the precedence ladder is a pure
//! function over plain values: move and crouch are hold-downs, switch,
//! reload and attack are one-taps, and the transition state decides
//! what this tick is allowed to start.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::components::{AmmoClip, CharacterFlags, EquippedLoadout, Player, TransitionState};
use super::events::ShotFired;
use crate::armory::WeaponClass;
use crate::sprites::{AnimTrigger, TriggerKind};

/// Raw button state sampled once per tick.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct RawInput {
    pub move_held: bool,
    pub crouch_held: bool,
    pub attack_pressed: bool,
    pub reload_pressed: bool,
    pub switch_pressed: bool,
}

pub(crate) fn sample_raw_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut raw: ResMut<RawInput>,
) {
    raw.move_held = keyboard.pressed(KeyCode::KeyD);
    raw.crouch_held = keyboard.pressed(KeyCode::ShiftLeft);
    raw.reload_pressed = keyboard.just_pressed(KeyCode::KeyR);
    raw.attack_pressed = mouse.just_pressed(MouseButton::Left);
    raw.switch_pressed = mouse.just_pressed(MouseButton::Right);
}

/// What one tick of input resolution produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ResolvedTick {
    pub flags: CharacterFlags,
    pub triggers: Vec<TriggerKind>,
    /// A ranged attack was accepted; spend a round and notify the HUD.
    pub shot_fired: bool,
}

/// Resolve this tick's flags and triggers from raw input.
///
/// Precedence, evaluated in order:
/// 1. movement is suppressed while a reload or switch is in flight;
/// 2. crouch suppresses movement and cannot be entered while attacking;
///    entering it drops a simultaneous attack tap;
/// 3. a switch request cancels movement this tick and raises the
///    switching flag immediately;
/// 4. reload only from idle with the ranged weapon in hand;
/// 5. attack is blocked by reloading but not by switching (the source
///    behavior is asymmetric here, and it is kept that way).
pub(crate) fn resolve_tick(
    raw: &RawInput,
    prev: &CharacterFlags,
    transition: &mut TransitionState,
    active: WeaponClass,
) -> ResolvedTick {
    let mut flags = CharacterFlags::default();
    let mut triggers = Vec::new();
    let mut shot_fired = false;

    let entering_crouch = raw.crouch_held && !prev.is_crouching;

    // 1. movement
    if transition.is_idle() && raw.move_held {
        flags.is_moving = true;
    }

    // 2. crouch
    if raw.crouch_held && !prev.is_attacking {
        flags.is_crouching = true;
        flags.is_moving = false;
    }

    // 3. switch
    if raw.switch_pressed && transition.begin_switch() {
        flags.is_moving = false;
        triggers.push(TriggerKind::SwitchWeapon);
    }

    // 4. reload
    if raw.reload_pressed && transition.begin_reload(active) {
        triggers.push(TriggerKind::Reload);
    }

    // 5. attack - re-check reloading so a reload accepted above blocks
    //    an attack tap from the same tick
    let reloading_now = *transition == TransitionState::Reloading;
    if raw.attack_pressed && !reloading_now && !(flags.is_crouching && entering_crouch) {
        flags.is_attacking = true;
        match active {
            WeaponClass::Melee => triggers.push(TriggerKind::Attack),
            WeaponClass::Ranged => {
                triggers.push(TriggerKind::Shoot);
                shot_fired = true;
            }
        }
    }

    flags.is_reloading = *transition == TransitionState::Reloading;
    flags.is_switching = *transition == TransitionState::SwitchingWeapon;

    ResolvedTick {
        flags,
        triggers,
        shot_fired,
    }
}

/// System wrapper: resolve the sampled input against the player's
/// state and publish flags, triggers and shot notifications.
pub(crate) fn resolve_character_input(
    raw: Res<RawInput>,
    mut query: Query<
        (
            &mut CharacterFlags,
            &mut TransitionState,
            &EquippedLoadout,
            &mut AmmoClip,
        ),
        With<Player>,
    >,
    mut triggers: MessageWriter<AnimTrigger>,
    mut shots: MessageWriter<ShotFired>,
) {
    let Ok((mut flags, mut transition, loadout, mut ammo)) = query.single_mut() else {
        return;
    };

    let resolved = resolve_tick(&raw, &flags, &mut transition, loadout.active);

    for kind in &resolved.triggers {
        triggers.write(AnimTrigger { kind: *kind });
    }
    if resolved.shot_fired {
        ammo.fire();
        shots.write(ShotFired);
    }

    *flags = resolved.flags;
}
