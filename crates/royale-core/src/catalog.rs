//! Immutable creep archetype catalog.
//!
//! Barracks train one archetype at a time; the archetype fixes both the
//! creep's stats and which behavior it follows once spawned.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::CreepBehavior;

/// Creep archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreepType {
    /// Fast, fragile, hunts the enemy king.
    #[default]
    Melee,
    /// Slow, heavy, tears down enemy towers.
    Giant,
}

/// Per-archetype stat line. Never mutated after load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreepStats {
    /// Distance covered per tick.
    pub speed: f64,
    /// Edge-to-edge reach for king contact.
    pub attack_range: f64,
    pub radius: f64,
    /// 0 would mean immovable; creeps are always movable.
    pub mass: u32,
    pub max_health: i32,
    /// Ticks of barracks training per batch.
    pub build_time: u32,
    /// Resource price the owning game layer charges for a batch.
    pub cost: i32,
    /// Creeps spawned per completed batch.
    pub count: u32,
}

const MELEE_STATS: CreepStats = CreepStats {
    speed: 100.0,
    attack_range: 0.0,
    radius: 10.0,
    mass: 400,
    max_health: 30,
    build_time: 5,
    cost: 80,
    count: 4,
};

const GIANT_STATS: CreepStats = CreepStats {
    speed: 50.0,
    attack_range: 0.0,
    radius: 20.0,
    mass: 2000,
    max_health: 200,
    build_time: 10,
    cost: 140,
    count: 1,
};

impl CreepType {
    pub const ALL: [CreepType; 2] = [CreepType::Melee, CreepType::Giant];

    pub fn stats(self) -> &'static CreepStats {
        match self {
            CreepType::Melee => &MELEE_STATS,
            CreepType::Giant => &GIANT_STATS,
        }
    }

    /// Behavior a creep of this archetype follows.
    pub fn behavior(self) -> CreepBehavior {
        match self {
            CreepType::Melee => CreepBehavior::KingChasing,
            CreepType::Giant => CreepBehavior::TowerBusting,
        }
    }
}

impl fmt::Display for CreepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreepType::Melee => f.write_str("MELEE"),
            CreepType::Giant => f.write_str("GIANT"),
        }
    }
}
