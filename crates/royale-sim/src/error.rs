//! Errors for rejected player commands.
//!
//! Ticks themselves never fail; only host input can be refused.

use thiserror::Error;

use royale_core::enums::StructureKind;
use royale_core::types::{ObstacleId, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("no obstacle {0}")]
    UnknownObstacle(ObstacleId),
    #[error("obstacle {0} is held by an enemy tower")]
    EnemyTower(ObstacleId),
    #[error("structure on obstacle {obstacle} does not belong to {player:?}")]
    NotOwner {
        obstacle: ObstacleId,
        player: PlayerId,
    },
    #[error("obstacle {obstacle} has no {expected:?}")]
    WrongStructure {
        obstacle: ObstacleId,
        expected: StructureKind,
    },
    #[error("tower health must be positive, got {0}")]
    InvalidTowerHealth(i32),
    #[error("barracks on obstacle {0} is still training")]
    BarracksBusy(ObstacleId),
    #[error("the match is over")]
    MatchFinished,
}
