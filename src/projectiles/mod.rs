//! Projectiles domain: pooled enemy fire.
//!
//! Peripheral to the control core: spawns incoming rounds on a seeded
//! cadence, reuses pooled entities instead of respawning, and reports
//! player hits as wound notifications.


use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::armory::GameplayDefaults;
use crate::core::{GameState, RunConfig};
use crate::player::{Player, PlayerWounded};
use crate::sprites::SpriteLayer;

/// X coordinate past which an inactive round is parked off-screen.
const DESPAWN_X: f32 = -700.0;
const SPAWN_X: f32 = 700.0;
const SPAWN_Y: f32 = -6.0;

#[derive(Component, Debug, Default)]
pub struct Projectile {
    pub active: bool,
}

#[derive(Resource, Debug, Default)]
pub struct ProjectilePool {
    pub entities: Vec<Entity>,
}

/// Seeded fire cadence for the run.
#[derive(Resource)]
pub struct EnemyFire {
    rng: ChaCha8Rng,
    cooldown: f32,
}

impl EnemyFire {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            cooldown: 1.0,
        }
    }
}

/// Pick a pooled entity to reuse, oldest-first.
/// Returns `None` when every pooled round is still in flight.
pub(crate) fn find_inactive(pool: &[bool]) -> Option<usize> {
    pool.iter().position(|active| !active)
}

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProjectilePool>()
            .add_systems(
                OnEnter(GameState::Run),
                reset_enemy_fire.after(crate::core::systems::initialize_run),
            )
            .add_systems(
                Update,
                (spawn_projectiles, handle_projectile_hits, despawn_offscreen)
                    .chain()
                    .run_if(in_state(GameState::Run)),
            );
    }
}

fn reset_enemy_fire(run: Res<RunConfig>, mut commands: Commands) {
    commands.insert_resource(EnemyFire::from_seed(run.seed));
}

/// Fire a round when the cadence timer expires, reusing a pooled
/// entity when one is free and growing the pool otherwise.
fn spawn_projectiles(
    time: Res<Time>,
    defaults: Res<GameplayDefaults>,
    mut fire: ResMut<EnemyFire>,
    mut pool: ResMut<ProjectilePool>,
    mut query: Query<(&mut Projectile, &mut Transform, &mut LinearVelocity)>,
    mut commands: Commands,
) {
    fire.cooldown -= time.delta_secs();
    if fire.cooldown > 0.0 {
        return;
    }
    fire.cooldown = fire
        .rng
        .random_range(defaults.projectiles.min_interval..defaults.projectiles.max_interval);

    let speed = defaults.projectiles.speed;

    // Reuse before growing, as the original pool does.
    let states: Vec<bool> = pool
        .entities
        .iter()
        .filter_map(|e| query.get(*e).ok().map(|(p, _, _)| p.active))
        .collect();

    if let Some(index) = find_inactive(&states) {
        if let Ok((mut projectile, mut transform, mut velocity)) =
            query.get_mut(pool.entities[index])
        {
            projectile.active = true;
            transform.translation = Vec3::new(SPAWN_X, SPAWN_Y, SpriteLayer::Effect.z_index());
            velocity.x = -speed;
            velocity.y = 0.0;
            return;
        }
    }

    let entity = commands
        .spawn((
            Projectile { active: true },
            Sprite {
                color: Color::srgb(0.9, 0.2, 0.1),
                custom_size: Some(Vec2::new(8.0, 3.0)),
                ..default()
            },
            Transform::from_xyz(SPAWN_X, SPAWN_Y, SpriteLayer::Effect.z_index()),
            RigidBody::Kinematic,
            Collider::rectangle(8.0, 3.0),
            Sensor,
            LinearVelocity(Vec2::new(-speed, 0.0)),
        ))
        .id();
    pool.entities.push(entity);
}

/// A round touching the player wounds them and goes inert.
fn handle_projectile_hits(
    mut collisions: MessageReader<CollisionStart>,
    player: Query<Entity, With<Player>>,
    mut projectiles: Query<(&mut Projectile, &mut LinearVelocity)>,
    mut wounded: MessageWriter<PlayerWounded>,
) {
    let Ok(player_entity) = player.single() else {
        return;
    };

    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (projectile_entity, target) in pairs {
            if target != player_entity {
                continue;
            }
            if let Ok((mut projectile, mut velocity)) = projectiles.get_mut(projectile_entity) {
                if !projectile.active {
                    continue;
                }
                projectile.active = false;
                velocity.x = 0.0;
                wounded.write(PlayerWounded);
            }
        }
    }
}

/// Rounds that cross the left edge return to the pool.
fn despawn_offscreen(
    mut projectiles: Query<(&mut Projectile, &mut Transform, &mut LinearVelocity)>,
) {
    for (mut projectile, mut transform, mut velocity) in &mut projectiles {
        if projectile.active && transform.translation.x < DESPAWN_X {
            projectile.active = false;
            velocity.x = 0.0;
            transform.translation.x = DESPAWN_X;
        }
    }
}
