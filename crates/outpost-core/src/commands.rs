//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::UpgradeTrack;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Purchases ---
    /// Choose which tower preset the next placement buys (0..=2).
    SelectTowerPreset { index: usize },
    /// Buy the selected preset and place it at the given point.
    PlaceTower { x: f64, y: f64 },
    /// Buy one level of an upgrade track.
    PurchaseUpgrade { track: UpgradeTrack },

    // --- Simulation control ---
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = frozen).
    SetTimeScale { scale: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
