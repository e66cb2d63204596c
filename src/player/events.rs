//! Player domain: completion callbacks and outbound notifications.

use bevy::ecs::message::Message;

/// Completion callback for a reload sequence, delivered by the
/// animation/timing layer. `success: false` means the sequence was
/// interrupted; the clip is not restocked.
#[derive(Debug)]
pub struct ReloadFinished {
    pub success: bool,
}

impl Message for ReloadFinished {}

/// Completion callback for a weapon-switch sequence. Only a successful
/// completion flips the active weapon class.
#[derive(Debug)]
pub struct SwitchFinished {
    pub success: bool,
}

impl Message for SwitchFinished {}

/// Fired once per shot for HUD/telemetry (drives the ammo counter).
#[derive(Debug)]
pub struct ShotFired;

impl Message for ShotFired {}

/// Fired when the player takes a hit.
#[derive(Debug)]
pub struct PlayerWounded;

impl Message for PlayerWounded {}

/// Fired once when wounds reach the fatal count.
#[derive(Debug)]
pub struct PlayerDied;

impl Message for PlayerDied {}
