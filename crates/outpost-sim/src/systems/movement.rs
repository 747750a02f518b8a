//! Enemy movement: every enemy walks straight at the nearest tower, or at
//! the base when no tower is standing.

use hecs::{Entity, World};

use outpost_core::components::{Enemy, Tower};
use outpost_core::constants::{BASE_X, BASE_Y};
use outpost_core::types::Position;

use crate::world_setup::ordered_positions;

pub fn run(world: &mut World, dt: f64) {
    let towers = ordered_positions::<Tower>(world);
    let base = Position::new(BASE_X, BASE_Y);

    for (_entity, (pos, enemy)) in world.query_mut::<(&mut Position, &Enemy)>() {
        let target = nearest_tower(&towers, pos).unwrap_or(base);
        // Already on target: no direction, no movement.
        if let Some(direction) = pos.direction_to(&target) {
            pos.advance(direction, enemy.speed * dt);
        }
    }
}

/// Closest tower position by Euclidean distance. On a tie the earlier tower wins.
pub fn nearest_tower(towers: &[(Entity, Position)], from: &Position) -> Option<Position> {
    let mut best: Option<(f64, Position)> = None;
    for (_, tower_pos) in towers {
        let distance = from.distance_to(tower_pos);
        match best {
            Some((best_distance, _)) if distance >= best_distance => {}
            _ => best = Some((distance, *tower_pos)),
        }
    }
    best.map(|(_, pos)| pos)
}
