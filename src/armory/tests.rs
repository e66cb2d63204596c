//! Armory domain: unit tests for parsing, lookups and validation.

use ron::Options;
use ron::extensions::Extensions;

use super::data::{
    DataFile, GameplayDefaults, MeleeWeaponDef, PlayerDefaults, ProjectileDefaults,
    RangedWeaponDef, WeaponClass, WeaponClips,
};
use super::registry::Armory;
use super::validation::validate_armory;

fn ron_options() -> Options {
    Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
}

fn test_ranged(id: &str) -> RangedWeaponDef {
    RangedWeaponDef {
        id: id.to_string(),
        name: id.to_string(),
        range: 600.0,
        speed: 1.0,
        ap: 1,
        dmg: 2,
        clip_size: 12,
        unlock_distance: 0.0,
        ammo_counter: vec!["a0".to_string(), "a1".to_string()],
        clips: WeaponClips::default(),
    }
}

fn test_melee(id: &str) -> MeleeWeaponDef {
    MeleeWeaponDef {
        id: id.to_string(),
        name: id.to_string(),
        range: 40.0,
        speed: 1.0,
        ap: 1,
        dmg: 2,
        unlock_distance: 0.0,
        clips: WeaponClips::default(),
    }
}

fn test_defaults() -> GameplayDefaults {
    GameplayDefaults {
        schema_version: 1,
        player: PlayerDefaults {
            move_speed: 140.0,
            default_ranged: "lasgun".to_string(),
            default_melee: "shovel".to_string(),
            wounds_to_die: 3,
        },
        projectiles: ProjectileDefaults {
            speed: 320.0,
            min_interval: 0.8,
            max_interval: 2.6,
        },
        profile_path: "profile.json".to_string(),
    }
}

fn test_armory() -> Armory {
    let mut armory = Armory::default();
    armory.ranged.insert("lasgun".to_string(), test_ranged("lasgun"));
    armory.melee.insert("shovel".to_string(), test_melee("shovel"));
    armory
}

#[test]
fn test_parse_ranged_weapon_file() {
    let contents = r#"
        (
            schema_version: 1,
            items: [
                (
                    id: "lasgun",
                    name: "Lasgun",
                    range: 600.0,
                    speed: 1.0,
                    ap: 1,
                    dmg: 2,
                    clip_size: 12,
                    unlock_distance: 0.0,
                    ammo_counter: ["ammo_0", "ammo_1"],
                    clips: (
                        stand_idle: "lasgun_stand_idle",
                        run: "lasgun_run",
                    ),
                ),
            ],
        )
    "#;

    let data: DataFile<RangedWeaponDef> = ron_options().from_str(contents).unwrap();
    assert_eq!(data.schema_version, 1);
    assert_eq!(data.items.len(), 1);

    let def = &data.items[0];
    assert_eq!(def.clip_size, 12);
    // IMPLICIT_SOME lets content write bare strings for optional clips.
    assert_eq!(def.clips.stand_idle.as_deref(), Some("lasgun_stand_idle"));
    // Omitted clips default to None.
    assert_eq!(def.clips.crouch_reload, None);
}

#[test]
fn test_parse_gameplay_defaults() {
    let contents = r#"
        (
            schema_version: 1,
            player: (
                move_speed: 140.0,
                default_ranged: "lasgun",
                default_melee: "shovel",
                wounds_to_die: 3,
            ),
            projectiles: (
                speed: 320.0,
                min_interval: 0.8,
                max_interval: 2.6,
            ),
            profile_path: "profile.json",
        )
    "#;

    let defaults: GameplayDefaults = ron_options().from_str(contents).unwrap();
    assert_eq!(defaults.player.default_ranged, "lasgun");
    assert_eq!(defaults.player.wounds_to_die, 3);
    assert_eq!(defaults.projectiles.speed, 320.0);
}

#[test]
fn test_lookup_hits_and_misses() {
    let armory = test_armory();

    assert!(armory.lookup_ranged("lasgun").is_ok());
    assert!(armory.lookup_melee("shovel").is_ok());

    let err = armory.lookup_ranged("plasma_gun").unwrap_err();
    assert_eq!(err.class, WeaponClass::Ranged);
    assert_eq!(err.name, "plasma_gun");
    assert!(err.to_string().contains("plasma_gun"));

    assert!(armory.lookup_melee("lasgun").is_err());
}

#[test]
fn test_unlock_distance_by_class() {
    let mut armory = test_armory();
    let mut lucius = test_ranged("lucius_pattern");
    lucius.unlock_distance = 1500.0;
    armory.ranged.insert(lucius.id.clone(), lucius);

    assert_eq!(
        armory
            .unlock_distance(WeaponClass::Ranged, "lucius_pattern")
            .unwrap(),
        1500.0
    );
    assert_eq!(
        armory.unlock_distance(WeaponClass::Melee, "shovel").unwrap(),
        0.0
    );
    assert!(armory.unlock_distance(WeaponClass::Melee, "missing").is_err());
}

#[test]
fn test_validation_accepts_consistent_content() {
    let errors = validate_armory(&test_armory(), &test_defaults());
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
}

#[test]
fn test_validation_rejects_missing_defaults() {
    let mut defaults = test_defaults();
    defaults.player.default_ranged = "plasma_gun".to_string();
    defaults.player.default_melee = "chainsword".to_string();

    let errors = validate_armory(&test_armory(), &defaults);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.id == "plasma_gun"));
    assert!(errors.iter().any(|e| e.id == "chainsword"));
}

#[test]
fn test_validation_rejects_bad_ranged_fields() {
    let mut armory = test_armory();
    let mut bad = test_ranged("bad_gun");
    bad.clip_size = 0;
    bad.ammo_counter.clear();
    bad.unlock_distance = -5.0;
    armory.ranged.insert(bad.id.clone(), bad);

    let errors = validate_armory(&armory, &test_defaults());
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| e.id == "bad_gun"));
}

#[test]
fn test_validation_rejects_zero_wounds_to_die() {
    let mut defaults = test_defaults();
    defaults.player.wounds_to_die = 0;

    let errors = validate_armory(&test_armory(), &defaults);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].id, "wounds_to_die");
}

#[test]
fn test_validation_rejects_bad_projectile_intervals() {
    // Inverted range: the cadence roll would panic mid-run.
    let mut defaults = test_defaults();
    defaults.projectiles.min_interval = 3.0;
    defaults.projectiles.max_interval = 3.0;

    let errors = validate_armory(&test_armory(), &defaults);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].id, "projectiles.max_interval");

    // Non-positive minimum is caught too.
    let mut defaults = test_defaults();
    defaults.projectiles.min_interval = 0.0;

    let errors = validate_armory(&test_armory(), &defaults);
    assert!(errors.iter().any(|e| e.id == "projectiles.min_interval"));
}

#[test]
fn test_validation_rejects_negative_melee_unlock() {
    let mut armory = test_armory();
    let mut bad = test_melee("cursed_blade");
    bad.unlock_distance = -1.0;
    armory.melee.insert(bad.id.clone(), bad);

    let errors = validate_armory(&armory, &test_defaults());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].id, "cursed_blade");
}

#[test]
fn test_weapon_class_other() {
    assert_eq!(WeaponClass::Ranged.other(), WeaponClass::Melee);
    assert_eq!(WeaponClass::Melee.other(), WeaponClass::Ranged);
}
