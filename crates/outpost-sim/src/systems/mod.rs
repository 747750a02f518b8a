//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state: entity state lives in components, everything else is
//! passed in by the engine.

pub mod cleanup;
pub mod collision;
pub mod fire_control;
pub mod movement;
pub mod projectiles;
pub mod snapshot;
pub mod wave_spawner;
