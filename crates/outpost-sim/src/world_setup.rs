//! Entity spawn factories and ordered views over the simulation world.
//!
//! Every entity is stamped with a `SpawnOrder` so scans can reproduce
//! creation order even though hecs reorders storage on despawn.

use hecs::{Component, Entity, World};

use outpost_core::components::*;
use outpost_core::presets::{EnemyPreset, TowerPreset};
use outpost_core::types::{Position, Velocity};

fn next_order(next_spawn_order: &mut u64) -> SpawnOrder {
    let order = SpawnOrder(*next_spawn_order);
    *next_spawn_order += 1;
    order
}

/// Spawn an enemy at full health from already-scaled stats.
pub fn spawn_enemy(
    world: &mut World,
    next_spawn_order: &mut u64,
    position: Position,
    stats: EnemyPreset,
) -> Entity {
    world.spawn((
        next_order(next_spawn_order),
        position,
        Enemy {
            health: stats.health,
            max_health: stats.health,
            speed: stats.speed,
            damage: stats.damage,
            exp_counted: false,
        },
    ))
}

/// Spawn a tower at full health. `last_shot_secs` seeds the fire cooldown.
pub fn spawn_tower(
    world: &mut World,
    next_spawn_order: &mut u64,
    position: Position,
    preset_index: usize,
    preset: &TowerPreset,
    last_shot_secs: f64,
) -> Entity {
    world.spawn((
        next_order(next_spawn_order),
        position,
        Tower {
            preset: preset_index,
            range: preset.range,
            fire_rate: preset.fire_rate,
            attack: preset.attack,
            base_health: preset.health,
            current_health: preset.health,
            last_shot_secs,
        },
    ))
}

pub fn spawn_projectile(
    world: &mut World,
    next_spawn_order: &mut u64,
    position: Position,
    velocity: Velocity,
    damage: i32,
) -> Entity {
    world.spawn((
        next_order(next_spawn_order),
        position,
        velocity,
        Projectile {
            damage,
            spent: false,
        },
    ))
}

/// Positions of every entity carrying `C`, in creation order.
pub fn ordered_positions<C: Component>(world: &World) -> Vec<(Entity, Position)> {
    let mut found: Vec<(SpawnOrder, Entity, Position)> = world
        .query::<(&SpawnOrder, &Position, &C)>()
        .iter()
        .map(|(entity, (order, pos, _))| (*order, entity, *pos))
        .collect();
    found.sort_by_key(|(order, _, _)| *order);
    found
        .into_iter()
        .map(|(_, entity, pos)| (entity, pos))
        .collect()
}

/// Number of entities carrying `C`.
pub fn count<C: Component>(world: &World) -> usize {
    let mut query = world.query::<&C>();
    query.iter().count()
}
