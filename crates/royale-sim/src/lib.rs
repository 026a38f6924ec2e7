//! Simulation engine for Obstacle Royale.
//!
//! Owns the obstacles, both players and the hecs world of creeps, advances
//! them one tick at a time, and produces WorldSnapshots for the rendering layer.

pub mod engine;
pub mod error;
pub mod obstacle;
pub mod player;
pub mod structures;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use error::CommandError;
pub use royale_core as core;
