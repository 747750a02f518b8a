//! Fire control system: towers off cooldown shoot at the first enemy in range.

use hecs::{Entity, World};

use outpost_core::components::{Enemy, SpawnOrder, Tower};
use outpost_core::constants::{PROJECTILE_SPEED, TIMER_EPSILON};
use outpost_core::events::SimEvent;
use outpost_core::types::{Position, Velocity};

use crate::economy::Economy;
use crate::world_setup::{self, ordered_positions};

/// Run the fire control system for one tick. `now` is the sim time after
/// this tick's advance.
pub fn run(
    world: &mut World,
    economy: &Economy,
    now: f64,
    next_spawn_order: &mut u64,
    events: &mut Vec<SimEvent>,
) {
    let enemies = ordered_positions::<Enemy>(world);
    if enemies.is_empty() {
        return;
    }

    let mut towers: Vec<(SpawnOrder, Entity)> = world
        .query::<(&SpawnOrder, &Tower)>()
        .iter()
        .map(|(entity, (order, _))| (*order, entity))
        .collect();
    towers.sort_by_key(|(order, _)| *order);

    let mut shots: Vec<(Position, Velocity, i32)> = Vec::new();
    for (_, entity) in towers {
        let Ok((pos, tower)) = world.query_one_mut::<(&Position, &mut Tower)>(entity) else {
            continue;
        };

        let stats = economy.effective_stats(tower);
        if now - tower.last_shot_secs + TIMER_EPSILON < stats.cooldown_secs() {
            continue;
        }

        // First enemy in creation order, not the nearest. An enemy sitting
        // exactly on the tower gives no aim direction and is passed over.
        let aim = enemies.iter().find_map(|(_, enemy_pos)| {
            if pos.distance_to(enemy_pos) <= stats.range {
                pos.direction_to(enemy_pos)
            } else {
                None
            }
        });

        if let Some(direction) = aim {
            tower.last_shot_secs = now;
            shots.push((
                *pos,
                Velocity::along(direction, PROJECTILE_SPEED),
                stats.attack,
            ));
        }
    }

    for (position, velocity, damage) in shots {
        world_setup::spawn_projectile(world, next_spawn_order, position, velocity, damage);
        events.push(SimEvent::TowerFired { position });
    }
}
