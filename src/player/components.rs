//! Player domain: components and weapon-transition state types.

use bevy::prelude::*;

use crate::armory::WeaponClass;

#[derive(Component, Debug)]
pub struct Player;

/// While present on the player, incoming wounds are ignored.
#[derive(Component, Debug)]
pub struct Invulnerable;

/// This tick's resolved behavioral flags.
///
/// Recomputed every tick from raw input and the transition state; the
/// presentation sync mirrors them onto both rig layers.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterFlags {
    pub is_moving: bool,
    pub is_crouching: bool,
    pub is_attacking: bool,
    pub is_reloading: bool,
    pub is_switching: bool,
}

/// The two weapons currently carried, plus which class is in hand.
///
/// Owned by the player entity; mutated only by the deploy equip
/// operation and by a completed switch transition.
#[derive(Component, Debug, Clone)]
pub struct EquippedLoadout {
    pub ranged: String,
    pub melee: String,
    pub active: WeaponClass,
}

impl EquippedLoadout {
    pub fn new(ranged: impl Into<String>, melee: impl Into<String>) -> Self {
        Self {
            ranged: ranged.into(),
            melee: melee.into(),
            active: WeaponClass::Ranged,
        }
    }

    /// Id of the weapon currently in hand.
    pub fn active_id(&self) -> &str {
        match self.active {
            WeaponClass::Ranged => &self.ranged,
            WeaponClass::Melee => &self.melee,
        }
    }
}

/// Outcome of delivering a completion signal to the transition state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The transition completed successfully; apply its effect.
    Applied,
    /// The transition ended without success; state returns to idle
    /// with no effect.
    Discarded,
    /// The signal did not match the current state (duplicate or late
    /// delivery); ignored.
    Stale,
}

/// The weapon-transition state machine.
///
/// Exactly one variant holds at any time, so reloading and switching
/// can never overlap. Begin requests are guarded; completion signals
/// that do not match the current state are no-ops.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionState {
    #[default]
    Idle,
    Reloading,
    SwitchingWeapon,
}

impl TransitionState {
    pub fn is_idle(self) -> bool {
        self == TransitionState::Idle
    }

    /// Attempt to start a reload. Only accepted from idle with the
    /// ranged weapon in hand (melee has no reload).
    pub fn begin_reload(&mut self, active: WeaponClass) -> bool {
        if self.is_idle() && active == WeaponClass::Ranged {
            *self = TransitionState::Reloading;
            true
        } else {
            false
        }
    }

    /// Attempt to start a weapon switch. Only accepted from idle; a
    /// second request while one is in flight is silently rejected.
    pub fn begin_switch(&mut self) -> bool {
        if self.is_idle() {
            *self = TransitionState::SwitchingWeapon;
            true
        } else {
            false
        }
    }

    /// Deliver a reload completion signal.
    pub fn complete_reload(&mut self, success: bool) -> CompletionOutcome {
        if *self != TransitionState::Reloading {
            return CompletionOutcome::Stale;
        }
        *self = TransitionState::Idle;
        if success {
            CompletionOutcome::Applied
        } else {
            CompletionOutcome::Discarded
        }
    }

    /// Deliver a switch completion signal.
    pub fn complete_switch(&mut self, success: bool) -> CompletionOutcome {
        if *self != TransitionState::SwitchingWeapon {
            return CompletionOutcome::Stale;
        }
        *self = TransitionState::Idle;
        if success {
            CompletionOutcome::Applied
        } else {
            CompletionOutcome::Discarded
        }
    }
}

/// Rounds left in the active ranged weapon's clip.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct AmmoClip {
    pub rounds: u32,
}

impl AmmoClip {
    pub fn full(clip_size: u32) -> Self {
        Self { rounds: clip_size }
    }

    /// Restore the clip to full. Called on successful reload only.
    pub fn restock(&mut self, clip_size: u32) {
        self.rounds = clip_size;
    }

    /// Spend one round. An empty clip stays at zero; the shoot trigger
    /// still fires and dry-fire presentation is the rig's concern.
    pub fn fire(&mut self) {
        self.rounds = self.rounds.saturating_sub(1);
    }

    /// Index into the ammo-counter sprite sequence, empty-to-full.
    pub fn counter_index(&self, clip_size: u32, sprite_count: usize) -> usize {
        if clip_size == 0 || sprite_count == 0 {
            return 0;
        }
        let capacity = self.rounds.min(clip_size) as f32 / clip_size as f32;
        (capacity * (sprite_count - 1) as f32).ceil() as usize
    }
}

/// Hits taken this run; the fatal count comes from gameplay defaults.
#[derive(Component, Debug, Clone, Copy)]
pub struct Wounds {
    pub count: u32,
    pub fatal: u32,
}

impl Wounds {
    pub fn new(fatal: u32) -> Self {
        Self { count: 0, fatal }
    }

    /// Record a hit. Returns true exactly once, on the wound that
    /// reaches the fatal count.
    pub fn wound(&mut self) -> bool {
        if self.count >= self.fatal {
            return false;
        }
        self.count += 1;
        self.count == self.fatal
    }
}
