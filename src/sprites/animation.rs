//! Animation playback for the layered character rig.
//!
//! The body and weapon layers each carry an [`AnimationController`] that
//! is fed the same flags and triggers by the presentation sync, steps
//! frames over time, and resolves the clip to show through the override
//! table. When a non-looping action finishes on the weapon layer, the
//! matching completion message is reported back to the control core.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use super::layers::{LayerClip, WeaponLayer};
use super::overrides::{OverrideSlot, OverrideTable};
use crate::player::events::{ReloadFinished, SwitchFinished};

/// One-shot animation triggers raised by input resolution.
///
/// Delivered identically to the body and weapon layers; the two rigs
/// must never diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    Attack,
    Shoot,
    Reload,
    SwitchWeapon,
}

#[derive(Debug)]
pub struct AnimTrigger {
    pub kind: TriggerKind,
}

impl Message for AnimTrigger {}

/// Non-looping action currently playing on a layer, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionAnim {
    #[default]
    None,
    Attack,
    Shoot,
    Reload,
    SwitchWeapon,
}

/// Component for animation playback on one rig layer.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct AnimationController {
    pub moving: bool,
    pub crouching: bool,
    pub action: ActionAnim,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in the current animation.
    pub total_frames: u32,
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the current action has run to its last frame.
    pub finished: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            moving: false,
            crouching: false,
            action: ActionAnim::None,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
            finished: false,
        }
    }
}

impl AnimationController {
    /// Apply this tick's movement flags. Looping states restart only
    /// when the flags actually change.
    pub fn set_flags(&mut self, moving: bool, crouching: bool) {
        if self.moving != moving || self.crouching != crouching {
            self.moving = moving;
            self.crouching = crouching;
            if self.action == ActionAnim::None {
                self.restart(4, 0.15);
            }
        }
    }

    /// Start a one-shot action, replacing whatever was playing.
    pub fn trigger(&mut self, kind: TriggerKind) {
        let (action, frames, duration) = match kind {
            TriggerKind::Attack => (ActionAnim::Attack, 3, 0.08),
            TriggerKind::Shoot => (ActionAnim::Shoot, 2, 0.08),
            TriggerKind::Reload => (ActionAnim::Reload, 6, 0.12),
            // Unequip frames then equip frames, one sequence.
            TriggerKind::SwitchWeapon => (ActionAnim::SwitchWeapon, 8, 0.1),
        };
        self.action = action;
        self.restart(frames, duration);
    }

    fn restart(&mut self, frames: u32, duration: f32) {
        self.current_frame = 0;
        self.total_frames = frames;
        self.frame_timer = 0.0;
        self.frame_duration = duration;
        self.finished = false;
    }

    /// The override slot this layer samples right now.
    pub fn slot(&self) -> OverrideSlot {
        match self.action {
            ActionAnim::Attack => {
                if self.crouching {
                    OverrideSlot::CrouchAttack
                } else {
                    OverrideSlot::StandAttack
                }
            }
            ActionAnim::Shoot => {
                if self.crouching {
                    OverrideSlot::CrouchShoot
                } else {
                    OverrideSlot::StandShoot
                }
            }
            ActionAnim::Reload => {
                if self.crouching {
                    OverrideSlot::CrouchReload
                } else {
                    OverrideSlot::StandReload
                }
            }
            ActionAnim::SwitchWeapon => {
                // First half stows the held weapon, second half draws
                // the incoming one.
                let halfway = self.current_frame >= self.total_frames / 2;
                match (halfway, self.crouching) {
                    (false, false) => OverrideSlot::StandUnequip,
                    (false, true) => OverrideSlot::CrouchUnequip,
                    (true, false) => OverrideSlot::StandEquip,
                    (true, true) => OverrideSlot::CrouchEquip,
                }
            }
            ActionAnim::None => {
                if self.crouching {
                    OverrideSlot::CrouchIdle
                } else if self.moving {
                    OverrideSlot::Run
                } else {
                    OverrideSlot::StandIdle
                }
            }
        }
    }

    /// Whether the current animation loops (only the no-action states do).
    pub fn looping(&self) -> bool {
        self.action == ActionAnim::None
    }
}

/// System that steps animation frames based on time.
pub fn update_animation_frames(time: Res<Time>, mut query: Query<&mut AnimationController>) {
    for mut controller in &mut query {
        if controller.finished {
            continue;
        }

        controller.frame_timer += time.delta_secs();

        if controller.frame_timer >= controller.frame_duration {
            controller.frame_timer -= controller.frame_duration;
            controller.current_frame += 1;

            if controller.current_frame >= controller.total_frames {
                if controller.looping() {
                    controller.current_frame = 0;
                } else {
                    controller.current_frame = controller.total_frames - 1;
                    controller.finished = true;
                }
            }
        }
    }
}

/// System that reports finished one-shot actions back to the control
/// core as completion callbacks.
///
/// Only the weapon layer reports: the body layer runs the same frames
/// but the weapon rig owns the timing. The control core tolerates
/// duplicate deliveries regardless.
pub fn report_finished_actions(
    mut query: Query<&mut AnimationController, With<WeaponLayer>>,
    mut reload_done: MessageWriter<ReloadFinished>,
    mut switch_done: MessageWriter<SwitchFinished>,
) {
    for mut controller in &mut query {
        if !controller.finished {
            continue;
        }

        match controller.action {
            ActionAnim::Reload => {
                reload_done.write(ReloadFinished { success: true });
            }
            ActionAnim::SwitchWeapon => {
                switch_done.write(SwitchFinished { success: true });
            }
            ActionAnim::Attack | ActionAnim::Shoot | ActionAnim::None => {}
        }

        controller.action = ActionAnim::None;
        controller.current_frame = 0;
        controller.frame_timer = 0.0;
        controller.finished = false;
    }
}

/// System that resolves each layer's current clip through the override
/// table. A `None` clip blanks the layer rather than holding the last
/// frame of a previous weapon's animation.
pub fn apply_override_clips(
    table: Res<OverrideTable>,
    mut query: Query<(&AnimationController, &mut LayerClip)>,
) {
    for (controller, mut layer_clip) in &mut query {
        let clip = table.get(controller.slot()).map(str::to_string);
        layer_clip.set(clip, controller.current_frame);
    }
}
