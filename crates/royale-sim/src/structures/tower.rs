//! Tower: shoots the nearest enemy creep (or the enemy queen) and melts.
//!
//! The attack radius is derived from health every tick:
//! `sqrt((health * coverage_per_hp + obstacle_area) / pi)`, so a tower's
//! reach shrinks as it melts.

use std::f64::consts::PI;

use hecs::Entity;

use royale_core::components::Location;
use royale_core::config::Rules;
use royale_core::events::SimEvent;
use royale_core::types::{PlayerId, Vector2};
use royale_creep_ai::targeting::nearest;

use super::{Site, TickContext};

#[derive(Debug, Clone, PartialEq)]
pub struct Tower {
    pub owner: PlayerId,
    pub health: i32,
    attack_radius: f64,
    attack_target: Option<Vector2>,
}

impl Tower {
    pub fn new(owner: PlayerId, health: i32, site: &Site, rules: &Rules) -> Self {
        Self {
            owner,
            health,
            attack_radius: attack_radius(health, site.area, rules.tower_coverage_per_hp),
            attack_target: None,
        }
    }

    pub fn attack_radius(&self) -> f64 {
        self.attack_radius
    }

    /// Where the last shot landed, if the tower fired on its last act.
    pub fn attack_target(&self) -> Option<Vector2> {
        self.attack_target
    }

    /// Siege damage from an adjacent tower buster.
    ///
    /// Only health drops. The attack radius keeps its value until the next
    /// act, so a tower busted to zero or below still takes one last shot
    /// with it before melting away. Until then it still stands and still
    /// blocks enemy building.
    pub fn bust(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Fire, repel, melt. Returns `true` once health is gone.
    pub fn act(&mut self, site: &Site, ctx: &mut TickContext) -> bool {
        let enemy = self.owner.enemy();
        self.attack_target = self.pick_and_shoot(site, enemy, ctx);
        if let Some(target) = self.attack_target {
            ctx.events.push(SimEvent::TowerFired {
                obstacle: site.id,
                owner: self.owner,
                target,
            });
        }

        let general = &mut ctx.players[enemy].general;
        if general.location.distance_to(site.location) < self.attack_radius {
            general.location += (general.location - site.location)
                .resized_to(ctx.rules.tower_general_repel_force);
        }

        self.health -= ctx.rules.tower_melt_rate;
        self.attack_radius =
            attack_radius(self.health, site.area, ctx.rules.tower_coverage_per_hp);

        self.health <= 0
    }

    /// Nearest enemy creep in range takes priority; otherwise the enemy queen.
    fn pick_and_shoot(
        &self,
        site: &Site,
        enemy: PlayerId,
        ctx: &mut TickContext,
    ) -> Option<Vector2> {
        let candidates: Vec<(Entity, Vector2)> = ctx.players[enemy]
            .active_creeps
            .iter()
            .filter_map(|&entity| {
                ctx.world
                    .get::<&Location>(entity)
                    .ok()
                    .map(|location| (entity, location.0))
            })
            .collect();

        let nearest_creep = nearest(
            site.location,
            candidates
                .iter()
                .map(|&(entity, location)| ((entity, location), location)),
        );
        if let Some(((entity, location), distance)) = nearest_creep {
            if distance < self.attack_radius {
                let damage = creep_damage(distance, site.radius, ctx.rules);
                ctx.damage_creep(entity, damage);
                return Some(location);
            }
        }

        let queen = ctx.players[enemy].queen;
        if queen.location.distance_to(site.location) < self.attack_radius {
            ctx.players[enemy].health -= ctx.rules.tower_queen_damage;
            return Some(queen.location);
        }

        None
    }

    pub fn extra_tooltip_lines(&self) -> Vec<String> {
        vec![
            "TOWER".to_string(),
            format!("Range: {}", self.attack_radius as i32),
            format!("Health: {}", self.health),
        ]
    }
}

/// Attack radius for a given health on an obstacle of the given area.
/// A negative radicand (deeply melted tower) yields zero.
pub fn attack_radius(health: i32, obstacle_area: f64, coverage_per_hp: f64) -> f64 {
    let radicand = (f64::from(health) * coverage_per_hp + obstacle_area) / PI;
    if radicand > 0.0 {
        radicand.sqrt()
    } else {
        0.0
    }
}

/// Damage to a creep `distance` away from the obstacle centre. Falls off
/// linearly with standoff from the obstacle edge, never below zero.
pub fn creep_damage(distance: f64, obstacle_radius: f64, rules: &Rules) -> i32 {
    let standoff = distance - obstacle_radius;
    let damage = rules.tower_creep_damage_max - standoff / rules.tower_creep_damage_drop_distance;
    damage.max(0.0).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_radius_grows_with_health() {
        let area = PI * 60.0 * 60.0;
        let small = attack_radius(10, area, 1000.0);
        let large = attack_radius(100, area, 1000.0);
        assert!(large > small);
        // Zero health leaves exactly the obstacle footprint.
        assert!((attack_radius(0, area, 1000.0) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_attack_radius_never_nan() {
        let radius = attack_radius(-1_000, 100.0, 1000.0);
        assert_eq!(radius, 0.0);
    }

    #[test]
    fn test_creep_damage_falloff() {
        let rules = Rules::default();
        // At the foot of the obstacle: full damage.
        assert_eq!(creep_damage(60.0, 60.0, &rules), 15);
        // 100 px of standoff at 50 px per point: 2 points lost.
        assert_eq!(creep_damage(160.0, 60.0, &rules), 13);
        // Far beyond the drop-off: clamped to zero.
        assert_eq!(creep_damage(10_000.0, 60.0, &rules), 0);
    }
}
