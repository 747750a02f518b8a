//! Simulation engine for OUTPOST.
//!
//! Owns the hecs ECS world, runs systems once per frame,
//! and produces GameStateSnapshots for the renderer.

pub mod economy;
pub mod engine;
pub mod purchase;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use outpost_core as core;
