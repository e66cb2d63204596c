//! Player domain: locomotion and wound handling.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::components::{CharacterFlags, Invulnerable, Player, Wounds};
use super::events::{PlayerDied, PlayerWounded};
use crate::armory::GameplayDefaults;
use crate::core::RunConfig;

/// Apply the resolved movement flag to the physics body.
pub(crate) fn apply_movement(
    defaults: Res<GameplayDefaults>,
    mut query: Query<(&CharacterFlags, &mut LinearVelocity), With<Player>>,
) {
    for (flags, mut velocity) in &mut query {
        velocity.x = if flags.is_moving {
            defaults.player.move_speed
        } else {
            0.0
        };
        velocity.y = 0.0;
    }
}

/// Accumulate distance while moving; this feeds the unlock gate shown
/// on the next deploy. Persisting it is outside this core.
pub(crate) fn track_distance(
    time: Res<Time>,
    defaults: Res<GameplayDefaults>,
    mut run: ResMut<RunConfig>,
    query: Query<&CharacterFlags, With<Player>>,
) {
    for flags in &query {
        if flags.is_moving {
            run.distance_traveled += defaults.player.move_speed * time.delta_secs();
        }
    }
}

/// Count wounds and raise the death notification exactly once.
pub(crate) fn handle_wounds(
    mut wounded: MessageReader<PlayerWounded>,
    mut died: MessageWriter<PlayerDied>,
    mut query: Query<(&mut Wounds, Option<&Invulnerable>), With<Player>>,
) {
    let Ok((mut wounds, shielded)) = query.single_mut() else {
        return;
    };

    for _ in wounded.read() {
        if shielded.is_some() {
            continue;
        }
        if wounds.wound() {
            info!("player down after {} wounds", wounds.count);
            died.write(PlayerDied);
        }
    }
}
