//! Player commands fed into the simulation by the host.
//!
//! Commands are validated and applied at the start of the next tick.

use serde::{Deserialize, Serialize};

use crate::catalog::CreepType;
use crate::enums::HeroKind;
use crate::types::{ObstacleId, PlayerId, Vector2};

/// All possible player intents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Construction ---
    /// Put a mine on an obstacle, replacing whatever the player had there.
    BuildMine {
        player: PlayerId,
        obstacle: ObstacleId,
    },
    /// Put a tower with the given starting health on an obstacle.
    BuildTower {
        player: PlayerId,
        obstacle: ObstacleId,
        health: i32,
    },
    /// Put a barracks training the given archetype on an obstacle.
    BuildBarracks {
        player: PlayerId,
        obstacle: ObstacleId,
        creep_type: CreepType,
    },

    // --- Structure control ---
    /// Change the income rate of one of the player's mines.
    SetMineRate {
        player: PlayerId,
        obstacle: ObstacleId,
        rate: i32,
    },
    /// Start a training run at one of the player's barracks.
    StartTraining {
        player: PlayerId,
        obstacle: ObstacleId,
    },
    /// Switch what an idle barracks trains.
    SetBarracksCreepType {
        player: PlayerId,
        obstacle: ObstacleId,
        creep_type: CreepType,
    },

    // --- Heroes ---
    /// Teleport a hero unit; hero steering itself lives outside the core.
    MoveHero {
        player: PlayerId,
        hero: HeroKind,
        location: Vector2,
    },
}

impl PlayerCommand {
    /// The player issuing this command.
    pub fn player(&self) -> PlayerId {
        match self {
            PlayerCommand::BuildMine { player, .. }
            | PlayerCommand::BuildTower { player, .. }
            | PlayerCommand::BuildBarracks { player, .. }
            | PlayerCommand::SetMineRate { player, .. }
            | PlayerCommand::StartTraining { player, .. }
            | PlayerCommand::SetBarracksCreepType { player, .. }
            | PlayerCommand::MoveHero { player, .. } => *player,
        }
    }
}
