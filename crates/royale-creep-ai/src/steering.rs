//! Per-behavior creep steering.
//!
//! Each function looks at one creep and the relevant targets and decides
//! where the creep stands after this tick's move.

use royale_core::types::Vector2;

use crate::targeting::nearest;
use crate::Circle;

/// Movement-relevant view of one creep.
#[derive(Debug, Clone, Copy)]
pub struct CreepContext {
    pub body: Circle,
    pub speed: f64,
    pub attack_range: f64,
}

/// Outcome of a steering decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Steering {
    Hold,
    MoveTo(Vector2),
}

/// Tower busters walk toward the centre of the nearest enemy tower obstacle.
/// With no enemy tower on the map they stay put.
pub fn tower_busting(creep: &CreepContext, enemy_towers: &[Circle]) -> Steering {
    let candidates = enemy_towers.iter().map(|tower| (tower.location, tower.location));
    match nearest(creep.body.location, candidates) {
        Some((target, _)) => Steering::MoveTo(creep.body.location.towards(target, creep.speed)),
        None => Steering::Hold,
    }
}

/// King chasers close in until the edge gap to the king is within attack range.
///
/// They aim at a point `standoff` away from the king's centre on their own
/// side, so the approach never overshoots through the king.
pub fn king_chasing(creep: &CreepContext, king: &Circle, standoff: f64) -> Steering {
    if creep.body.gap_to(king) <= creep.attack_range {
        return Steering::Hold;
    }
    let aim = king.location + (creep.body.location - king.location).resized_to(standoff);
    Steering::MoveTo(creep.body.location.towards(aim, creep.speed))
}
