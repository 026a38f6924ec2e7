//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::PlayerId;

/// Which structure occupies an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    Mine,
    Tower,
    Barracks,
}

/// Movement and damage policy of a creep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreepBehavior {
    /// Walks to the nearest enemy tower and busts it.
    TowerBusting,
    /// Walks to the enemy king and attacks on contact.
    KingChasing,
}

/// The fixed hero units each player fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroKind {
    King,
    Queen,
    General,
}

/// Match outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Winner(PlayerId),
    Draw,
}

/// Top-level match state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Finished(MatchResult),
}
