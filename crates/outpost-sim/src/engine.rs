//! Simulation engine: the frame driver.
//!
//! `SimulationEngine` owns the hecs ECS world, applies player commands at
//! tick boundaries, runs every system in a fixed order, and produces
//! `GameStateSnapshot`s. It has no rendering or windowing dependency, so a
//! run is fully reproducible from its `SimConfig`.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use outpost_core::commands::PlayerCommand;
use outpost_core::constants::{DT, MAX_TIME_SCALE, STARTING_EXPERIENCE};
use outpost_core::enums::GamePhase;
use outpost_core::error::CommandError;
use outpost_core::events::SimEvent;
use outpost_core::presets::tower_preset;
use outpost_core::state::GameStateSnapshot;
use outpost_core::types::{Position, SimTime};

use crate::economy::Economy;
use crate::purchase;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::wave_spawner::WaveSchedule;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    pub starting_experience: u32,
    /// Let newly placed towers fire on their first tick instead of waiting
    /// one full cooldown.
    pub first_shot_ready: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            starting_experience: STARTING_EXPERIENCE,
            first_shot_ready: false,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    first_shot_ready: bool,
    rng: ChaCha8Rng,
    next_spawn_order: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,

    economy: Economy,
    wave_schedule: WaveSchedule,
    selected_preset: usize,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: clamp_time_scale(config.time_scale),
            first_shot_ready: config.first_shot_ready,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_spawn_order: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            economy: Economy::new(config.starting_experience),
            wave_schedule: WaveSchedule::default(),
            selected_preset: 0,
            score: ScoreState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `elapsed_secs` of wall time and return the
    /// resulting snapshot.
    ///
    /// `commands` are applied after anything already queued and before any
    /// system runs. The elapsed time is scaled by the time scale once, and
    /// that single step drives every timer in the tick.
    pub fn advance(
        &mut self,
        elapsed_secs: f64,
        commands: impl IntoIterator<Item = PlayerCommand>,
    ) -> GameStateSnapshot {
        self.queue_commands(commands);
        self.process_commands();

        if self.phase == GamePhase::Active {
            let elapsed = if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
                elapsed_secs
            } else {
                0.0
            };
            let dt = elapsed * self.time_scale;
            self.time.advance(dt);
            self.run_systems(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.economy,
            &self.wave_schedule,
            self.selected_preset,
            events,
            &self.score,
        )
    }

    /// Advance by one nominal 60 Hz step with no new commands.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.advance(DT, std::iter::empty())
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn wave_schedule(&self) -> &WaveSchedule {
        &self.wave_schedule
    }

    /// Index of the tower preset the next placement buys.
    pub fn selected_preset(&self) -> usize {
        self.selected_preset
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Spawn an enemy with explicit stats (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        position: Position,
        stats: outpost_core::presets::EnemyPreset,
    ) -> hecs::Entity {
        crate::world_setup::spawn_enemy(&mut self.world, &mut self.next_spawn_order, position, stats)
    }

    /// Spawn a projectile with explicit velocity and damage (for testing).
    #[cfg(test)]
    pub fn spawn_test_projectile(
        &mut self,
        position: Position,
        velocity: outpost_core::types::Velocity,
        damage: i32,
    ) -> hecs::Entity {
        crate::world_setup::spawn_projectile(
            &mut self.world,
            &mut self.next_spawn_order,
            position,
            velocity,
            damage,
        )
    }

    /// Replace the wave schedule (for testing).
    #[cfg(test)]
    pub fn set_wave_schedule(&mut self, schedule: WaveSchedule) {
        self.wave_schedule = schedule;
    }

    #[cfg(test)]
    pub fn economy_mut(&mut self) -> &mut Economy {
        &mut self.economy
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(&command) {
                debug!(?command, %err, "command rejected");
            }
        }
    }

    /// Handle a single player command. A rejection leaves all state untouched.
    fn handle_command(&mut self, command: &PlayerCommand) -> Result<(), CommandError> {
        match *command {
            PlayerCommand::SelectTowerPreset { index } => {
                tower_preset(index).ok_or(CommandError::UnknownPreset { index })?;
                self.selected_preset = index;
            }
            PlayerCommand::PlaceTower { x, y } => {
                let position = Position::new(x, y);
                let last_shot_secs = if self.first_shot_ready {
                    f64::NEG_INFINITY
                } else {
                    self.time.elapsed_secs
                };
                purchase::place_tower(
                    &mut self.world,
                    &mut self.economy,
                    &mut self.next_spawn_order,
                    self.selected_preset,
                    position,
                    last_shot_secs,
                )?;
                debug!(x, y, preset = self.selected_preset, "tower placed");
                self.events.push(SimEvent::TowerPlaced {
                    position,
                    preset: self.selected_preset,
                });
            }
            PlayerCommand::PurchaseUpgrade { track } => {
                let level = purchase::buy_upgrade(&mut self.world, &mut self.economy, track)?;
                debug!(track = track.as_str(), level, "upgrade purchased");
                self.events
                    .push(SimEvent::UpgradePurchased { track, level });
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = clamp_time_scale(scale);
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
        Ok(())
    }

    /// Run all systems in order. `dt` is already scaled.
    fn run_systems(&mut self, dt: f64) {
        // 1. Wave spawning
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.wave_schedule,
            dt,
            &mut self.next_spawn_order,
            &mut self.events,
        );

        // 2. Enemy movement
        systems::movement::run(&mut self.world, dt);

        // 3. Enemy-tower contact, then remove broken towers
        systems::collision::run(&mut self.world, &mut self.despawn_buffer);
        systems::collision::sweep_towers(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.events,
            &mut self.score,
        );

        // 4. Tower fire control
        systems::fire_control::run(
            &mut self.world,
            &self.economy,
            self.time.elapsed_secs,
            &mut self.next_spawn_order,
            &mut self.events,
        );

        // 5. Projectile flight and impacts
        systems::projectiles::run(
            &mut self.world,
            dt,
            &mut self.economy,
            &mut self.score,
            &mut self.events,
        );

        // 6. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}

/// Non-finite scales freeze the sim rather than poisoning every timer.
fn clamp_time_scale(scale: f64) -> f64 {
    if scale.is_finite() {
        scale.clamp(0.0, MAX_TIME_SCALE)
    } else {
        0.0
    }
}
