//! Enemy-tower contact and the tower death sweep.

use hecs::{Entity, World};
use tracing::info;

use outpost_core::components::{Enemy, Tower};
use outpost_core::constants::COLLISION_RADIUS;
use outpost_core::events::SimEvent;
use outpost_core::types::Position;

use crate::score::ScoreState;
use crate::world_setup::ordered_positions;

/// Enemies touching a tower deal their damage to the first such tower and
/// are removed. Rammed enemies pay no experience.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let towers = ordered_positions::<Tower>(world);
    if towers.is_empty() {
        return;
    }

    for (enemy_entity, enemy_pos) in ordered_positions::<Enemy>(world) {
        let Some(&(tower_entity, _)) = towers
            .iter()
            .find(|(_, tower_pos)| enemy_pos.distance_to(tower_pos) < COLLISION_RADIUS)
        else {
            continue;
        };

        let damage = world
            .get::<&Enemy>(enemy_entity)
            .map(|enemy| enemy.damage)
            .unwrap_or(0);
        if let Ok(mut tower) = world.get::<&mut Tower>(tower_entity) {
            tower.current_health -= damage;
        }
        despawn_buffer.push(enemy_entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Remove towers whose health has dropped to zero or below.
pub fn sweep_towers(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreState,
) {
    despawn_buffer.clear();

    for (entity, (pos, tower)) in world.query_mut::<(&Position, &Tower)>() {
        if tower.current_health <= 0 {
            info!(x = pos.x(), y = pos.y(), "tower destroyed");
            events.push(SimEvent::TowerDestroyed { position: *pos });
            score.towers_lost = score.towers_lost.saturating_add(1);
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
