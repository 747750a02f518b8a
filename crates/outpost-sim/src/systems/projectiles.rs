//! Projectile flight and impact.
//!
//! Each projectile damages at most one enemy: the first one within
//! `HIT_RADIUS` in creation order. A kill pays `KILL_REWARD` exactly once
//! per enemy, however many hits land after its health reaches zero.

use hecs::World;

use outpost_core::components::{Enemy, Projectile};
use outpost_core::constants::{HIT_RADIUS, KILL_REWARD};
use outpost_core::events::SimEvent;
use outpost_core::types::{Position, Velocity};

use crate::economy::Economy;
use crate::score::ScoreState;
use crate::world_setup::ordered_positions;

pub fn run(
    world: &mut World,
    dt: f64,
    economy: &mut Economy,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
) {
    for (_entity, (pos, vel, _projectile)) in
        world.query_mut::<(&mut Position, &Velocity, &Projectile)>()
    {
        pos.0 += vel.0 * dt;
    }

    let enemies = ordered_positions::<Enemy>(world);
    if enemies.is_empty() {
        return;
    }

    for (projectile_entity, projectile_pos) in ordered_positions::<Projectile>(world) {
        let Some(&(enemy_entity, enemy_pos)) = enemies
            .iter()
            .find(|(_, enemy_pos)| projectile_pos.distance_to(enemy_pos) < HIT_RADIUS)
        else {
            continue;
        };

        let damage = match world.get::<&mut Projectile>(projectile_entity) {
            Ok(mut projectile) if !projectile.spent => {
                projectile.spent = true;
                projectile.damage
            }
            _ => continue,
        };

        let Ok(mut enemy) = world.get::<&mut Enemy>(enemy_entity) else {
            continue;
        };
        enemy.health -= damage;
        if enemy.health <= 0 && !enemy.exp_counted {
            enemy.exp_counted = true;
            economy.award(KILL_REWARD);
            score.enemies_killed = score.enemies_killed.saturating_add(1);
            score.experience_earned = score.experience_earned.saturating_add(KILL_REWARD);
            events.push(SimEvent::EnemyKilled {
                position: enemy_pos,
                reward: KILL_REWARD,
            });
        }
    }
}
