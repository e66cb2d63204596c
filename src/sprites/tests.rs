//! Sprites domain: unit tests for the override table and layer playback.

use super::animation::{ActionAnim, AnimationController, TriggerKind};
use super::layers::LayerClip;
use super::overrides::{OverrideSlot, OverrideTable};
use crate::armory::{MeleeWeaponDef, RangedWeaponDef, WeaponClass, WeaponClips};

fn lasgun() -> RangedWeaponDef {
    RangedWeaponDef {
        id: "lasgun".to_string(),
        name: "Lasgun".to_string(),
        range: 600.0,
        speed: 1.0,
        ap: 1,
        dmg: 2,
        clip_size: 12,
        unlock_distance: 0.0,
        ammo_counter: vec!["ammo_0".to_string(), "ammo_1".to_string()],
        clips: WeaponClips {
            stand_idle: Some("lasgun_stand_idle".to_string()),
            crouch_idle: Some("lasgun_crouch_idle".to_string()),
            run: Some("lasgun_run".to_string()),
            stand_shoot: Some("lasgun_stand_shoot".to_string()),
            crouch_shoot: Some("lasgun_crouch_shoot".to_string()),
            stand_reload: Some("lasgun_stand_reload".to_string()),
            crouch_reload: Some("lasgun_crouch_reload".to_string()),
            stand_equip: Some("lasgun_stand_equip".to_string()),
            crouch_equip: Some("lasgun_crouch_equip".to_string()),
            stand_unequip: Some("lasgun_stand_unequip".to_string()),
            crouch_unequip: Some("lasgun_crouch_unequip".to_string()),
            ..Default::default()
        },
    }
}

fn shovel() -> MeleeWeaponDef {
    MeleeWeaponDef {
        id: "shovel".to_string(),
        name: "Entrenching Shovel".to_string(),
        range: 40.0,
        speed: 1.0,
        ap: 1,
        dmg: 2,
        unlock_distance: 0.0,
        clips: WeaponClips {
            stand_idle: Some("shovel_stand_idle".to_string()),
            crouch_idle: Some("shovel_crouch_idle".to_string()),
            run: Some("shovel_run".to_string()),
            stand_attack: Some("shovel_stand_attack".to_string()),
            crouch_attack: Some("shovel_crouch_attack".to_string()),
            stand_equip: Some("shovel_stand_equip".to_string()),
            crouch_equip: Some("shovel_crouch_equip".to_string()),
            stand_unequip: Some("shovel_stand_unequip".to_string()),
            crouch_unequip: Some("shovel_crouch_unequip".to_string()),
            ..Default::default()
        },
    }
}

#[test]
fn test_table_starts_with_every_slot_cleared() {
    let table = OverrideTable::default();
    for slot in OverrideSlot::ALL {
        assert_eq!(table.get(slot), None);
    }
}

#[test]
fn test_full_rebuild_with_ranged_in_hand() {
    let mut table = OverrideTable::default();
    table.rebuild(&lasgun(), &shovel(), WeaponClass::Ranged, true);

    // Posture slots from the held lasgun.
    assert_eq!(table.get(OverrideSlot::StandIdle), Some("lasgun_stand_idle"));
    assert_eq!(table.get(OverrideSlot::Run), Some("lasgun_run"));
    assert_eq!(
        table.get(OverrideSlot::StandUnequip),
        Some("lasgun_stand_unequip")
    );

    // Equip slots from the stowed shovel: "equip" draws the weapon
    // that is not currently in hand.
    assert_eq!(
        table.get(OverrideSlot::StandEquip),
        Some("shovel_stand_equip")
    );
    assert_eq!(
        table.get(OverrideSlot::CrouchEquip),
        Some("shovel_crouch_equip")
    );

    // Action slots come from each class regardless of who holds.
    assert_eq!(
        table.get(OverrideSlot::StandAttack),
        Some("shovel_stand_attack")
    );
    assert_eq!(
        table.get(OverrideSlot::StandShoot),
        Some("lasgun_stand_shoot")
    );
    assert_eq!(
        table.get(OverrideSlot::StandReload),
        Some("lasgun_stand_reload")
    );
}

#[test]
fn test_class_flip_swaps_posture_and_equip_slots() {
    let mut table = OverrideTable::default();
    table.rebuild(&lasgun(), &shovel(), WeaponClass::Ranged, true);
    table.rebuild(&lasgun(), &shovel(), WeaponClass::Melee, false);

    assert_eq!(table.get(OverrideSlot::StandIdle), Some("shovel_stand_idle"));
    assert_eq!(table.get(OverrideSlot::Run), Some("shovel_run"));
    assert_eq!(
        table.get(OverrideSlot::StandEquip),
        Some("lasgun_stand_equip")
    );
}

#[test]
fn test_partial_rebuild_leaves_action_slots() {
    let mut table = OverrideTable::default();
    table.rebuild(&lasgun(), &shovel(), WeaponClass::Ranged, true);

    let mut other = lasgun();
    other.clips.stand_shoot = Some("other_stand_shoot".to_string());

    // A mere class flip must not rewrite attack/shoot/reload slots.
    table.rebuild(&other, &shovel(), WeaponClass::Melee, false);
    assert_eq!(
        table.get(OverrideSlot::StandShoot),
        Some("lasgun_stand_shoot")
    );

    // A full refresh does.
    table.rebuild(&other, &shovel(), WeaponClass::Melee, true);
    assert_eq!(
        table.get(OverrideSlot::StandShoot),
        Some("other_stand_shoot")
    );
}

#[test]
fn test_flip_round_trip_restores_table() {
    let mut table = OverrideTable::default();
    table.rebuild(&lasgun(), &shovel(), WeaponClass::Ranged, true);
    let before = table.clone();

    table.rebuild(&lasgun(), &shovel(), WeaponClass::Melee, false);
    table.rebuild(&lasgun(), &shovel(), WeaponClass::Ranged, false);

    assert_eq!(table, before);
}

#[test]
fn test_missing_clip_clears_slot() {
    let mut table = OverrideTable::default();
    table.rebuild(&lasgun(), &shovel(), WeaponClass::Ranged, true);
    assert_eq!(
        table.get(OverrideSlot::CrouchReload),
        Some("lasgun_crouch_reload")
    );

    // A weapon without a crouch-reload sheet clears the slot rather
    // than leaving the previous weapon's clip behind.
    let mut pistol = lasgun();
    pistol.clips.crouch_reload = None;
    table.rebuild(&pistol, &shovel(), WeaponClass::Ranged, true);
    assert_eq!(table.get(OverrideSlot::CrouchReload), None);
}

#[test]
fn test_controller_slot_follows_flags() {
    let mut controller = AnimationController::default();
    assert_eq!(controller.slot(), OverrideSlot::StandIdle);

    controller.set_flags(true, false);
    assert_eq!(controller.slot(), OverrideSlot::Run);

    controller.set_flags(false, true);
    assert_eq!(controller.slot(), OverrideSlot::CrouchIdle);
}

#[test]
fn test_switch_plays_unequip_then_equip() {
    let mut controller = AnimationController::default();
    controller.trigger(TriggerKind::SwitchWeapon);
    assert_eq!(controller.slot(), OverrideSlot::StandUnequip);

    controller.current_frame = controller.total_frames / 2;
    assert_eq!(controller.slot(), OverrideSlot::StandEquip);

    // Crouched switch uses the crouch sheets.
    controller.set_flags(false, true);
    assert_eq!(controller.slot(), OverrideSlot::CrouchEquip);
}

#[test]
fn test_trigger_restarts_playback() {
    let mut controller = AnimationController::default();
    controller.current_frame = 3;
    controller.finished = true;

    controller.trigger(TriggerKind::Reload);
    assert_eq!(controller.action, ActionAnim::Reload);
    assert_eq!(controller.current_frame, 0);
    assert!(!controller.finished);
    assert!(!controller.looping());
    assert_eq!(controller.slot(), OverrideSlot::StandReload);
}

#[test]
fn test_identical_flags_do_not_restart_loop() {
    let mut controller = AnimationController::default();
    controller.set_flags(true, false);
    controller.current_frame = 2;

    // Same flags again: playback position must survive.
    controller.set_flags(true, false);
    assert_eq!(controller.current_frame, 2);

    controller.set_flags(false, false);
    assert_eq!(controller.current_frame, 0);
}

#[test]
fn test_layer_clip_sprite_key() {
    let mut clip = LayerClip::default();
    assert_eq!(clip.sprite_key(), None);

    clip.set(Some("lasgun_run".to_string()), 2);
    assert_eq!(clip.sprite_key(), Some("lasgun_run_3".to_string()));
}
