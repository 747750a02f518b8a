//! Game state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub experience: u32,
    pub wave: WaveView,
    pub selected_preset: SelectedPresetView,
    pub upgrades: UpgradesView,
    pub towers: Vec<TowerView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<SimEvent>,
    pub score: ScoreView,
}

/// A tower as the renderer needs it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TowerView {
    pub position: Position,
    /// Range with the current range upgrade applied.
    pub effective_range: f64,
    /// current_health / base_health.
    pub health_ratio: f64,
    pub current_health: i32,
    pub base_health: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    /// health / max_health, floored at 0.
    pub health_ratio: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
}

/// Wave progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    /// 1-based wave number for display.
    pub number: u32,
    pub phase: WavePhase,
    pub spawned: u32,
    pub quota: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectedPresetView {
    pub index: usize,
    pub cost: u32,
}

/// Level and next-purchase cost of one upgrade track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeView {
    pub level: u32,
    pub cost: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpgradesView {
    pub hp: UpgradeView,
    pub damage: UpgradeView,
    pub attack_speed: UpgradeView,
    pub range: UpgradeView,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_killed: u32,
    pub towers_lost: u32,
    pub experience_earned: u32,
}
