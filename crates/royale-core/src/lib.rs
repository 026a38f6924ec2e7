//! Core types and definitions for the Obstacle Royale simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, the creep catalog, components, commands, snapshots, events,
//! rules and constants. It has no dependency on an ECS runtime.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
