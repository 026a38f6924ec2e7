//! Melee reach checks.

use crate::Circle;

/// King contact: the edge gap is strictly inside the creep's attack range.
///
/// Pairs with [`crate::steering::king_chasing`], which holds at
/// `gap <= attack_range`; a creep parked exactly on the boundary neither
/// moves nor hits.
pub fn in_king_contact(creep: &Circle, attack_range: f64, king: &Circle) -> bool {
    creep.gap_to(king) < attack_range
}

/// Index of the first tower whose edge is closer than `threshold`.
pub fn adjacent_tower(creep: &Circle, towers: &[Circle], threshold: f64) -> Option<usize> {
    towers.iter().position(|tower| creep.gap_to(tower) < threshold)
}
