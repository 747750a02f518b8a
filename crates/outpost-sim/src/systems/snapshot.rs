//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only: it never modifies the world.

use hecs::World;

use outpost_core::components::*;
use outpost_core::enums::GamePhase;
use outpost_core::events::SimEvent;
use outpost_core::presets::tower_preset;
use outpost_core::state::*;
use outpost_core::types::{Position, SimTime};

use crate::economy::Economy;
use crate::score::ScoreState;
use crate::systems::wave_spawner::WaveSchedule;
use crate::world_setup;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    economy: &Economy,
    schedule: &WaveSchedule,
    selected_preset: usize,
    events: Vec<SimEvent>,
    score: &ScoreState,
) -> GameStateSnapshot {
    let enemies = build_enemies(world);

    GameStateSnapshot {
        time: *time,
        phase,
        experience: economy.experience(),
        wave: WaveView {
            number: schedule.wave_number(),
            phase: schedule.phase(enemies.len()),
            spawned: schedule.spawned,
            quota: schedule.quota(),
        },
        selected_preset: SelectedPresetView {
            index: selected_preset,
            cost: tower_preset(selected_preset)
                .map(|preset| preset.cost)
                .unwrap_or_default(),
        },
        upgrades: economy.upgrades_view(),
        towers: build_towers(world, economy),
        enemies,
        projectiles: build_projectiles(world),
        events,
        score: ScoreView {
            enemies_killed: score.enemies_killed,
            towers_lost: score.towers_lost,
            experience_earned: score.experience_earned,
        },
    }
}

/// Build TowerView list in placement order, with upgrades applied to range.
fn build_towers(world: &World, economy: &Economy) -> Vec<TowerView> {
    let mut towers: Vec<(SpawnOrder, TowerView)> = world
        .query::<(&SpawnOrder, &Position, &Tower)>()
        .iter()
        .map(|(_, (order, pos, tower))| {
            let stats = economy.effective_stats(tower);
            (
                *order,
                TowerView {
                    position: *pos,
                    effective_range: stats.range,
                    health_ratio: ratio(tower.current_health, tower.base_health),
                    current_health: tower.current_health,
                    base_health: tower.base_health,
                },
            )
        })
        .collect();

    towers.sort_by_key(|(order, _)| *order);
    towers.into_iter().map(|(_, view)| view).collect()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<(SpawnOrder, EnemyView)> = world
        .query::<(&SpawnOrder, &Position, &Enemy)>()
        .iter()
        .map(|(_, (order, pos, enemy))| {
            (
                *order,
                EnemyView {
                    position: *pos,
                    health_ratio: ratio(enemy.health, enemy.max_health),
                },
            )
        })
        .collect();

    enemies.sort_by_key(|(order, _)| *order);
    enemies.into_iter().map(|(_, view)| view).collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world_setup::ordered_positions::<Projectile>(world)
        .into_iter()
        .map(|(_, position)| ProjectileView { position })
        .collect()
}

fn ratio(current: i32, max: i32) -> f64 {
    if max <= 0 {
        return 0.0;
    }
    (current.max(0) as f64) / max as f64
}
