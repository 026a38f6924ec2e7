//! Creep AI for Obstacle Royale.
//!
//! Pure steering and melee-reach policies for the two creep behaviors,
//! plus the nearest-target search shared with tower targeting.

pub mod melee;
pub mod steering;
pub mod targeting;

pub use royale_core as core;

/// A circular body on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub location: royale_core::types::Vector2,
    pub radius: f64,
}

impl Circle {
    pub fn new(location: royale_core::types::Vector2, radius: f64) -> Self {
        Self { location, radius }
    }

    /// Edge-to-edge distance; negative when the bodies overlap.
    pub fn gap_to(&self, other: &Circle) -> f64 {
        self.location.distance_to(other.location) - self.radius - other.radius
    }
}

#[cfg(test)]
mod tests;
