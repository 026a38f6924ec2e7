//! World snapshot: the complete visible state handed to the rendering layer each tick.

use serde::{Deserialize, Serialize};

use crate::catalog::CreepType;
use crate::enums::GamePhase;
use crate::events::SimEvent;
use crate::types::{ObstacleId, PlayerId, SimTime, Vector2};

/// Complete world state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub players: Vec<PlayerView>,
    pub obstacles: Vec<ObstacleView>,
    pub creeps: Vec<CreepView>,
    pub events: Vec<SimEvent>,
}

/// Per-player bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub health: i32,
    pub resources: i32,
    /// Income collected during this tick.
    pub resources_per_tick: i32,
    pub king: HeroView,
    pub queen: HeroView,
    pub general: HeroView,
    pub active_creeps: u32,
}

/// A fixed hero unit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HeroView {
    pub location: Vector2,
    pub radius: f64,
}

/// A resource node and whatever stands on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: ObstacleId,
    pub location: Vector2,
    pub radius: f64,
    pub minerals: i32,
    pub max_mineral_rate: i32,
    pub structure: Option<StructureView>,
    /// Owner-facing status lines for the tooltip.
    pub tooltip: Vec<String>,
}

/// Structure state for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum StructureView {
    Mine {
        owner: PlayerId,
        income_rate: i32,
    },
    Tower {
        owner: PlayerId,
        health: i32,
        attack_radius: f64,
        /// Where this tick's projectile went, if the tower fired.
        target: Option<Vector2>,
    },
    Barracks {
        owner: PlayerId,
        creep_type: CreepType,
        progress: u32,
        progress_max: u32,
        is_training: bool,
    },
}

/// A live creep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreepView {
    /// Opaque entity id, stable for the creep's lifetime.
    pub id: u64,
    pub owner: PlayerId,
    pub creep_type: CreepType,
    pub location: Vector2,
    pub radius: f64,
    pub health: i32,
    pub max_health: i32,
}
