//! OUTPOST host application.
//!
//! Runs the simulation engine on its own thread at a fixed cadence and
//! exposes it through `AppState`: commands go in over a channel, the latest
//! snapshot comes out through shared state.

pub mod config;
pub mod game_loop;
pub mod state;

pub use outpost_core as core;
