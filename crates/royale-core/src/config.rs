//! Match rules: every tunable the simulation reads.
//!
//! Defaults come from [`crate::constants`]. A host may override any subset
//! through JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::ObstacleId;

/// Errors raised while loading rules.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse rules: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid rule `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
    #[error("obstacle {0} appears more than once in the layout")]
    DuplicateObstacle(ObstacleId),
}

/// Tunable rules for one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub world_width: f64,
    pub world_height: f64,

    pub obstacle_count: u32,
    /// Inclusive radius range sampled per obstacle.
    pub obstacle_radius: (i32, i32),
    /// Inclusive mineral endowment range.
    pub obstacle_minerals: (i32, i32),
    /// Inclusive range of the per-obstacle mine rate cap.
    pub obstacle_max_mineral_rate: (i32, i32),
    pub obstacle_gap: f64,
    pub obstacle_placement_attempts: u32,

    pub mine_base_income_rate: i32,

    pub tower_melt_rate: i32,
    pub tower_coverage_per_hp: f64,
    pub tower_creep_damage_max: f64,
    pub tower_creep_damage_drop_distance: f64,
    pub tower_queen_damage: i32,
    pub tower_general_repel_force: f64,

    pub giant_bust_rate: i32,
    pub melee_threshold: f64,
    pub king_chase_standoff: f64,
    pub king_contact_damage: i32,
    pub creep_spawn_clearance: f64,

    pub player_start_health: i32,
    pub player_start_resources: i32,
    pub hero_radius: f64,
    pub hero_corner_inset: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            obstacle_count: OBSTACLE_COUNT,
            obstacle_radius: (OBSTACLE_RADIUS_MIN, OBSTACLE_RADIUS_MAX),
            obstacle_minerals: (OBSTACLE_MINERAL_MIN, OBSTACLE_MINERAL_MAX),
            obstacle_max_mineral_rate: (
                OBSTACLE_MAX_MINERAL_RATE_MIN,
                OBSTACLE_MAX_MINERAL_RATE_MAX,
            ),
            obstacle_gap: OBSTACLE_GAP,
            obstacle_placement_attempts: OBSTACLE_PLACEMENT_ATTEMPTS,
            mine_base_income_rate: MINE_BASE_INCOME_RATE,
            tower_melt_rate: TOWER_MELT_RATE,
            tower_coverage_per_hp: TOWER_COVERAGE_PER_HP,
            tower_creep_damage_max: TOWER_CREEP_DAMAGE_MAX,
            tower_creep_damage_drop_distance: TOWER_CREEP_DAMAGE_DROP_DISTANCE,
            tower_queen_damage: TOWER_QUEEN_DAMAGE,
            tower_general_repel_force: TOWER_GENERAL_REPEL_FORCE,
            giant_bust_rate: GIANT_BUST_RATE,
            melee_threshold: MELEE_THRESHOLD,
            king_chase_standoff: KING_CHASE_STANDOFF,
            king_contact_damage: KING_CONTACT_DAMAGE,
            creep_spawn_clearance: CREEP_SPAWN_CLEARANCE,
            player_start_health: PLAYER_START_HEALTH,
            player_start_resources: PLAYER_START_RESOURCES,
            hero_radius: HERO_RADIUS,
            hero_corner_inset: HERO_CORNER_INSET,
        }
    }
}

impl Rules {
    /// Parse rules from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let rules: Rules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &'static str, reason: &'static str| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        };

        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return invalid("world_width/world_height", "must be positive");
        }
        if self.obstacle_radius.0 <= 0 || self.obstacle_radius.0 > self.obstacle_radius.1 {
            return invalid("obstacle_radius", "must be a positive, ordered range");
        }
        if self.obstacle_minerals.0 < 0 || self.obstacle_minerals.0 > self.obstacle_minerals.1 {
            return invalid("obstacle_minerals", "must be a non-negative, ordered range");
        }
        if self.obstacle_max_mineral_rate.0 < 1
            || self.obstacle_max_mineral_rate.0 > self.obstacle_max_mineral_rate.1
        {
            return invalid(
                "obstacle_max_mineral_rate",
                "must be an ordered range starting at 1 or more",
            );
        }
        if self.mine_base_income_rate < 1 {
            return invalid("mine_base_income_rate", "must be at least 1");
        }
        if self.tower_melt_rate < 0 {
            return invalid("tower_melt_rate", "must not be negative");
        }
        if self.tower_coverage_per_hp < 0.0 {
            return invalid("tower_coverage_per_hp", "must not be negative");
        }
        if self.tower_creep_damage_drop_distance <= 0.0 {
            return invalid("tower_creep_damage_drop_distance", "must be positive");
        }
        if self.player_start_health <= 0 {
            return invalid("player_start_health", "must be positive");
        }
        Ok(())
    }
}
