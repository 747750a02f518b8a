//! Running score tracked by the engine.

/// Counters reported in the snapshot's score view.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub enemies_killed: u32,
    pub towers_lost: u32,
    pub experience_earned: u32,
}
