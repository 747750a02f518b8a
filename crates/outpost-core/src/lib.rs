//! Core types and definitions for the OUTPOST simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, presets, commands, state snapshots, events,
//! errors and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod presets;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
