//! Immutable stat templates instantiated into towers and enemies.

use serde::{Deserialize, Serialize};

use crate::constants::ENEMY_SCALING_PERCENT;

/// Base stats for a purchasable tower type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerPreset {
    /// Attack range (pixels).
    pub range: f64,
    /// Shots per second.
    pub fire_rate: f64,
    /// Damage carried by each projectile.
    pub attack: i32,
    pub health: i32,
    /// Experience cost to place.
    pub cost: u32,
}

/// Base stats for an enemy type, before wave scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyPreset {
    pub health: i32,
    /// Pixels per second.
    pub speed: f64,
    pub damage: i32,
}

pub const TOWER_PRESETS: [TowerPreset; 3] = [
    // Balanced
    TowerPreset {
        range: 150.0,
        fire_rate: 1.0,
        attack: 50,
        health: 100,
        cost: 20,
    },
    // Long range, sturdy
    TowerPreset {
        range: 200.0,
        fire_rate: 0.8,
        attack: 40,
        health: 150,
        cost: 30,
    },
    // Short range, rapid fire
    TowerPreset {
        range: 100.0,
        fire_rate: 2.0,
        attack: 70,
        health: 80,
        cost: 25,
    },
];

pub const ENEMY_PRESETS: [EnemyPreset; 4] = [
    EnemyPreset {
        health: 100,
        speed: 25.0,
        damage: 20,
    },
    EnemyPreset {
        health: 150,
        speed: 20.0,
        damage: 30,
    },
    EnemyPreset {
        health: 80,
        speed: 35.0,
        damage: 15,
    },
    EnemyPreset {
        health: 200,
        speed: 15.0,
        damage: 40,
    },
];

/// Look up a tower preset by index.
pub fn tower_preset(index: usize) -> Option<&'static TowerPreset> {
    TOWER_PRESETS.get(index)
}

impl EnemyPreset {
    /// Stats for an enemy spawned during `wave` (0-based).
    /// Integer stats are scaled in integer percent and truncate toward zero.
    pub fn scaled(&self, wave: u32) -> EnemyPreset {
        let percent = 100 + ENEMY_SCALING_PERCENT * i64::from(wave);
        EnemyPreset {
            health: scale_percent(self.health, percent),
            speed: self.speed * percent as f64 / 100.0,
            damage: scale_percent(self.damage, percent),
        }
    }
}

fn scale_percent(value: i32, percent: i64) -> i32 {
    i32::try_from(i64::from(value) * percent / 100).unwrap_or(i32::MAX)
}
