//! Cleanup system: removes spent or out-of-bounds projectiles and dead enemies.

use hecs::{Entity, World};

use outpost_core::components::{Enemy, Projectile};
use outpost_core::constants::FIELD_BOUNDS;
use outpost_core::types::Position;

/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, projectile)) in world.query_mut::<(&Position, &Projectile)>() {
        if projectile.spent || !pos.is_within(&FIELD_BOUNDS) {
            despawn_buffer.push(entity);
        }
    }

    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if enemy.health <= 0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
