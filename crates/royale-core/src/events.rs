//! Events emitted by the simulation for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::catalog::CreepType;
use crate::enums::{MatchResult, StructureKind};
use crate::types::{ObstacleId, PlayerId, Vector2};

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A structure reported completion and left its obstacle.
    StructureDestroyed {
        obstacle: ObstacleId,
        owner: PlayerId,
        kind: StructureKind,
    },
    /// A barracks finished a training run.
    CreepTrained {
        obstacle: ObstacleId,
        owner: PlayerId,
        creep_type: CreepType,
        count: u32,
    },
    /// A creep was killed and left its owner's roster.
    CreepKilled { owner: PlayerId, location: Vector2 },
    /// A tower shot at a target this tick (projectile animation hook).
    TowerFired {
        obstacle: ObstacleId,
        owner: PlayerId,
        target: Vector2,
    },
    /// The match ended.
    GameOver { result: MatchResult },
}
