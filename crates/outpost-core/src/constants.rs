//! Simulation constants and tuning parameters.

use crate::types::Bounds;

/// Target frame rate of the host loop (Hz).
pub const TICK_RATE: u32 = 60;

/// Nominal seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

/// Playfield width in pixels.
pub const FIELD_WIDTH: f64 = 800.0;

/// Playfield height in pixels.
pub const FIELD_HEIGHT: f64 = 600.0;

/// Projectiles outside this rectangle are discarded.
pub const FIELD_BOUNDS: Bounds = Bounds::new(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT);

/// Base position: enemies head here when no tower is standing.
pub const BASE_X: f64 = FIELD_WIDTH / 2.0;
pub const BASE_Y: f64 = FIELD_HEIGHT / 2.0;

// --- Waves ---

/// Enemy quota for each wave; the schedule wraps to the first entry after the last.
pub const WAVE_QUOTAS: [u32; 10] = [24, 30, 36, 42, 48, 54, 60, 66, 72, 78];

/// Slack for comparing accumulated f64 timers against their thresholds.
/// Sixty steps of `DT` sum to slightly less than one second.
pub const TIMER_EPSILON: f64 = 1e-9;

/// Seconds between consecutive spawns within a wave.
pub const SPAWN_INTERVAL_SECS: f64 = 0.1;

/// Radius of the spawn circle around the base.
pub const SPAWN_RADIUS: f64 = 300.0;

/// Seconds the field must stay clear before the next wave starts.
pub const WAVE_WAIT_SECS: f64 = 3.0;

/// Per-wave increase applied to enemy base stats at spawn, in percent.
pub const ENEMY_SCALING_PERCENT: i64 = 5;

// --- Combat ---

/// Enemy within this distance of a tower rams it.
pub const COLLISION_RADIUS: f64 = 30.0;

/// Projectile within this distance of an enemy hits it.
pub const HIT_RADIUS: f64 = 10.0;

/// Projectile speed (pixels per second).
pub const PROJECTILE_SPEED: f64 = 300.0;

/// Experience granted once per enemy killed by projectile damage.
pub const KILL_REWARD: u32 = 10;

// --- Economy ---

/// Experience balance at the start of a session.
pub const STARTING_EXPERIENCE: u32 = 100;

/// Minimum distance between any two tower positions.
pub const MIN_TOWER_SPACING: f64 = 50.0;

/// First purchase price of every upgrade track.
pub const UPGRADE_BASE_COST: u32 = 50;

/// Price increase after each upgrade purchase.
pub const UPGRADE_COST_INCREMENT: u32 = 10;

/// Effect of one upgrade level (+1%).
pub const UPGRADE_STEP: f64 = 0.01;

// --- Control ---

/// Upper bound for the time scale command.
pub const MAX_TIME_SCALE: f64 = 4.0;
