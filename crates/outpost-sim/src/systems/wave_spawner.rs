//! Wave spawning system: spawns each wave's quota around the base, then
//! waits for a clear field before starting the next wave.

use std::f64::consts::TAU;

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use outpost_core::components::Enemy;
use outpost_core::constants::*;
use outpost_core::enums::WavePhase;
use outpost_core::events::SimEvent;
use outpost_core::presets::ENEMY_PRESETS;
use outpost_core::types::Position;

use crate::world_setup;

/// Wave progress for a session.
#[derive(Debug, Clone)]
pub struct WaveSchedule {
    /// Enemy count per wave, in order. Wraps after the last entry.
    pub quotas: Vec<u32>,
    /// 0-based index into `quotas`.
    pub current_wave: usize,
    /// Enemies spawned so far in the current wave.
    pub spawned: u32,
    /// Seconds accumulated toward the next spawn.
    pub spawn_timer: f64,
    /// Seconds the field has been clear after the quota was met.
    pub wait_timer: f64,
}

impl Default for WaveSchedule {
    fn default() -> Self {
        Self::new(WAVE_QUOTAS.to_vec())
    }
}

impl WaveSchedule {
    pub fn new(quotas: Vec<u32>) -> Self {
        Self {
            quotas,
            current_wave: 0,
            spawned: 0,
            spawn_timer: 0.0,
            wait_timer: 0.0,
        }
    }

    /// Enemy quota of the current wave.
    pub fn quota(&self) -> u32 {
        self.quotas.get(self.current_wave).copied().unwrap_or(0)
    }

    /// 1-based wave number for display.
    pub fn wave_number(&self) -> u32 {
        self.current_wave as u32 + 1
    }

    pub fn phase(&self, live_enemies: usize) -> WavePhase {
        if self.spawned < self.quota() {
            WavePhase::Spawning
        } else if live_enemies > 0 {
            WavePhase::WaitingForClear
        } else {
            WavePhase::Cooldown
        }
    }

    /// Move to the next wave (wrapping) and reset all counters.
    fn advance_wave(&mut self) {
        self.current_wave += 1;
        if self.current_wave >= self.quotas.len() {
            self.current_wave = 0;
        }
        self.spawned = 0;
        self.spawn_timer = 0.0;
        self.wait_timer = 0.0;
    }
}

/// Run one tick of the wave state machine.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut WaveSchedule,
    dt: f64,
    next_spawn_order: &mut u64,
    events: &mut Vec<SimEvent>,
) {
    let quota = schedule.quota();

    if schedule.spawned < quota {
        schedule.spawn_timer += dt;
        if schedule.spawn_timer + TIMER_EPSILON >= SPAWN_INTERVAL_SECS {
            let position = spawn_point(schedule.spawned, quota);
            let preset = ENEMY_PRESETS[rng.gen_range(0..ENEMY_PRESETS.len())];
            let stats = preset.scaled(schedule.current_wave as u32);
            world_setup::spawn_enemy(world, next_spawn_order, position, stats);
            debug!(
                wave = schedule.wave_number(),
                index = schedule.spawned,
                health = stats.health,
                "enemy spawned"
            );
            schedule.spawned += 1;
            // Excess time is dropped, not carried over.
            schedule.spawn_timer = 0.0;
        }
        return;
    }

    if world_setup::count::<Enemy>(world) > 0 {
        return;
    }

    schedule.wait_timer += dt;
    if schedule.wait_timer + TIMER_EPSILON >= WAVE_WAIT_SECS {
        schedule.advance_wave();
        info!(wave = schedule.wave_number(), quota = schedule.quota(), "wave started");
        events.push(SimEvent::WaveStarted {
            wave: schedule.wave_number(),
        });
    }
}

/// Point on the spawn circle for the `index`-th enemy of a wave of `quota`.
pub fn spawn_point(index: u32, quota: u32) -> Position {
    let angle = TAU * index as f64 / quota as f64;
    Position::new(
        BASE_X + SPAWN_RADIUS * angle.cos(),
        BASE_Y + SPAWN_RADIUS * angle.sin(),
    )
}
