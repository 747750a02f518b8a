//! Policy rejections for player commands.
//!
//! These never abort a tick: the engine logs them and leaves state untouched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("no tower preset with index {index}")]
    UnknownPreset { index: usize },
    #[error("insufficient experience: have {have}, need {need}")]
    InsufficientExperience { have: u32, need: u32 },
    #[error("too close to an existing tower: {distance:.1} < {min}")]
    PlacementTooClose { distance: f64, min: f64 },
}
