//! World setup: obstacle placement and creep spawning.
//!
//! Map layout draws from any `Rng`, so the host decides the random source;
//! the engine passes its seeded `ChaCha8Rng`.

use std::f64::consts::TAU;

use hecs::{Entity, World};
use rand::Rng;
use tracing::{debug, info};

use royale_core::catalog::CreepType;
use royale_core::components::{CreepUnit, Health, Location};
use royale_core::config::Rules;
use royale_core::types::{ObstacleId, PlayerId, Vector2};

use crate::obstacle::Obstacle;
use crate::player::Players;
use crate::structures::Site;

/// Place up to `rules.obstacle_count` non-overlapping obstacles.
///
/// Each obstacle gets a sampled radius, mineral endowment and mine rate cap,
/// then a position is rejection-sampled until it keeps `rules.obstacle_gap`
/// clear of every obstacle placed so far. An obstacle that finds no spot in
/// `rules.obstacle_placement_attempts` tries is dropped. Ids are dense.
pub fn place_obstacles<R: Rng + ?Sized>(rng: &mut R, rules: &Rules) -> Vec<Obstacle> {
    let mut obstacles: Vec<Obstacle> = Vec::with_capacity(rules.obstacle_count as usize);

    for _ in 0..rules.obstacle_count {
        let radius = f64::from(rng.gen_range(rules.obstacle_radius.0..=rules.obstacle_radius.1));
        let minerals = rng.gen_range(rules.obstacle_minerals.0..=rules.obstacle_minerals.1);
        let max_rate =
            rng.gen_range(rules.obstacle_max_mineral_rate.0..=rules.obstacle_max_mineral_rate.1);

        let free_width = rules.world_width - 2.0 * radius;
        let free_height = rules.world_height - 2.0 * radius;
        if free_width <= 0.0 || free_height <= 0.0 {
            debug!(radius, "obstacle does not fit in the world, skipping");
            continue;
        }

        let spot = (0..rules.obstacle_placement_attempts)
            .map(|_| {
                Vector2::random(&mut *rng, free_width, free_height) + Vector2::new(radius, radius)
            })
            .find(|candidate| {
                obstacles.iter().all(|other| {
                    candidate.distance_to(other.location())
                        >= radius + other.radius() + rules.obstacle_gap
                })
            });

        match spot {
            Some(location) => {
                let id = ObstacleId(obstacles.len() as u32);
                obstacles.push(Obstacle::new(id, location, radius, minerals, max_rate));
            }
            None => debug!(radius, "no free spot for obstacle, skipping"),
        }
    }

    info!(
        placed = obstacles.len(),
        requested = rules.obstacle_count,
        "obstacles placed"
    );
    obstacles
}

/// Spawn one creep and enrol it in its owner's roster.
pub fn spawn_creep(
    world: &mut World,
    players: &mut Players,
    owner: PlayerId,
    creep_type: CreepType,
    location: Vector2,
) -> Entity {
    let entity = world.spawn((
        CreepUnit {
            owner,
            creep_type,
            behavior: creep_type.behavior(),
        },
        Location(location),
        Health::full(creep_type.stats().max_health),
    ));
    players[owner].active_creeps.push(entity);
    entity
}

/// Spawn a finished barracks batch evenly around the barracks' obstacle,
/// just outside its edge. Returns the number of creeps spawned.
pub fn spawn_trained_batch(
    world: &mut World,
    players: &mut Players,
    rules: &Rules,
    site: &Site,
    owner: PlayerId,
    creep_type: CreepType,
) -> u32 {
    let stats = creep_type.stats();
    let distance = site.radius + stats.radius + rules.creep_spawn_clearance;

    for i in 0..stats.count {
        let angle = TAU * f64::from(i) / f64::from(stats.count);
        let offset = Vector2::new(angle.cos(), angle.sin()) * distance;
        spawn_creep(world, players, owner, creep_type, site.location + offset);
    }
    stats.count
}
