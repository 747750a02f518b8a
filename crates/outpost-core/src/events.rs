//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::UpgradeTrack;
use crate::types::Position;

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A new wave began spawning (1-based for display).
    WaveStarted { wave: u32 },
    /// An enemy was killed by projectile damage and paid out.
    EnemyKilled { position: Position, reward: u32 },
    /// A tower ran out of health and was removed.
    TowerDestroyed { position: Position },
    /// A tower fired a projectile.
    TowerFired { position: Position },
    /// A tower was purchased and placed.
    TowerPlaced { position: Position, preset: usize },
    /// An upgrade level was purchased.
    UpgradePurchased { track: UpgradeTrack, level: u32 },
}
