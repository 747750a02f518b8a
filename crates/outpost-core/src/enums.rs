//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The four global upgrade tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeTrack {
    /// Scales health of towers alive at purchase time.
    Hp,
    /// Scales tower attack, recomputed every tick.
    Damage,
    /// Scales tower fire rate, recomputed every tick.
    AttackSpeed,
    /// Scales tower range, recomputed every tick.
    Range,
}

impl UpgradeTrack {
    pub const ALL: [UpgradeTrack; 4] = [
        UpgradeTrack::Hp,
        UpgradeTrack::Damage,
        UpgradeTrack::AttackSpeed,
        UpgradeTrack::Range,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Damage => "damage",
            Self::AttackSpeed => "attack_speed",
            Self::Range => "range",
        }
    }
}

/// Wave scheduler state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Quota not yet met; spawning on the interval.
    #[default]
    Spawning,
    /// Quota met, enemies still on the field.
    WaitingForClear,
    /// Field clear, post-wave timer running.
    Cooldown,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
}
