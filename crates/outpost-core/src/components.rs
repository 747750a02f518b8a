//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// Creation sequence number. Every entity gets one; scans that need a
/// stable "first found" order sort by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);

/// A hostile unit walking toward the nearest tower (or the base).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub health: i32,
    /// Health at creation; never changes.
    pub max_health: i32,
    /// Movement speed (pixels per second), wave scaling already applied.
    pub speed: f64,
    /// Damage dealt to a tower on contact, wave scaling already applied.
    pub damage: i32,
    /// Set once the kill reward for this enemy has been paid.
    pub exp_counted: bool,
}

/// A player-placed tower. Range, fire rate and attack are the preset
/// values; global upgrades are applied on top of them each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub preset: usize,
    pub range: f64,
    /// Shots per second.
    pub fire_rate: f64,
    pub attack: i32,
    pub base_health: i32,
    pub current_health: i32,
    /// Sim time (seconds) of the last shot, or of placement.
    pub last_shot_secs: f64,
}

/// A shot in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Effective attack of the firing tower when the shot was made.
    pub damage: i32,
    /// Set on first enemy contact; the shot is discarded at cleanup.
    pub spent: bool,
}
