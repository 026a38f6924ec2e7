//! ECS components for creep entities.
//!
//! Components are plain data structs with no methods.
//! Creep logic lives in the sim crate's systems and in `royale-creep-ai`.

use serde::{Deserialize, Serialize};

use crate::catalog::CreepType;
use crate::enums::CreepBehavior;
use crate::types::{PlayerId, Vector2};

/// Identity of a creep: who owns it and what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreepUnit {
    pub owner: PlayerId,
    pub creep_type: CreepType,
    pub behavior: CreepBehavior,
}

/// Current position of a mobile unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location(pub Vector2);

/// Hit points. The creep is dead once `current <= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }
}
