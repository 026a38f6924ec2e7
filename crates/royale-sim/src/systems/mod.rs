//! Per-tick systems.
//!
//! Systems are free functions over the world, the obstacles and the players.
//! They do not own state.

pub mod cleanup;
pub mod creeps;
pub mod snapshot;
pub mod structures;
