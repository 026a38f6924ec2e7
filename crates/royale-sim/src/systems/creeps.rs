//! Creep systems: movement, melee damage, and taking damage.
//!
//! Every tick all creeps move (red roster, then blue, each in spawn order),
//! then all creeps deal damage in the same order.

use hecs::{Entity, World};
use tracing::debug;

use royale_core::components::{CreepUnit, Health, Location};
use royale_core::config::Rules;
use royale_core::enums::CreepBehavior;
use royale_core::events::SimEvent;
use royale_core::types::PlayerId;
use royale_creep_ai::melee;
use royale_creep_ai::steering::{self, CreepContext, Steering};
use royale_creep_ai::Circle;

use crate::obstacle::Obstacle;
use crate::player::Players;
use crate::structures::Structure;

/// Move every live creep.
pub fn run_movement(world: &mut World, players: &Players, obstacles: &[Obstacle], rules: &Rules) {
    for entity in players.all_creeps() {
        move_creep(world, players, obstacles, rules, entity);
    }
}

/// Let every live creep deal its melee damage.
pub fn run_damage(
    world: &mut World,
    players: &mut Players,
    obstacles: &mut [Obstacle],
    rules: &Rules,
) {
    for entity in players.all_creeps() {
        deal_damage(world, players, obstacles, rules, entity);
    }
}

/// Step one creep according to its behavior.
pub fn move_creep(
    world: &mut World,
    players: &Players,
    obstacles: &[Obstacle],
    rules: &Rules,
    entity: Entity,
) {
    let Ok((unit, location)) = world.query_one_mut::<(&CreepUnit, &mut Location)>(entity) else {
        return;
    };
    let stats = unit.creep_type.stats();
    let enemy = &players[unit.owner.enemy()];
    let ctx = CreepContext {
        body: Circle::new(location.0, stats.radius),
        speed: stats.speed,
        attack_range: stats.attack_range,
    };

    let decision = match unit.behavior {
        CreepBehavior::TowerBusting => {
            let towers: Vec<Circle> = enemy_towers(obstacles, enemy.id)
                .into_iter()
                .map(|(_, body)| body)
                .collect();
            steering::tower_busting(&ctx, &towers)
        }
        CreepBehavior::KingChasing => {
            steering::king_chasing(&ctx, &enemy.king.body(), rules.king_chase_standoff)
        }
    };

    if let Steering::MoveTo(next) = decision {
        location.0 = next;
    }
}

/// Apply one creep's melee effects to the enemy.
pub fn deal_damage(
    world: &mut World,
    players: &mut Players,
    obstacles: &mut [Obstacle],
    rules: &Rules,
    entity: Entity,
) {
    let Ok((unit, location)) = world.query_one_mut::<(&CreepUnit, &Location)>(entity) else {
        return;
    };
    let stats = unit.creep_type.stats();
    let body = Circle::new(location.0, stats.radius);
    let enemy = unit.owner.enemy();

    if unit.behavior == CreepBehavior::TowerBusting {
        let towers = enemy_towers(obstacles, enemy);
        let bodies: Vec<Circle> = towers.iter().map(|&(_, body)| body).collect();
        if let Some(hit) = melee::adjacent_tower(&body, &bodies, rules.melee_threshold) {
            if let Some(Structure::Tower(tower)) = obstacles[towers[hit].0].structure_mut() {
                tower.bust(rules.giant_bust_rate);
            }
        }
    }

    let king = players[enemy].king.body();
    if melee::in_king_contact(&body, stats.attack_range, &king) {
        players[enemy].health -= rules.king_contact_damage;
    }
}

/// Reduce a creep's health. A creep that drops to zero or below leaves its
/// owner's roster immediately and is queued for despawn.
///
/// Returns `true` if this call killed the creep. Creeps that are no longer
/// on a roster are ignored.
pub fn damage(
    world: &mut World,
    players: &mut Players,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
    entity: Entity,
    amount: i32,
) -> bool {
    let Ok((unit, health, location)) =
        world.query_one_mut::<(&CreepUnit, &mut Health, &Location)>(entity)
    else {
        return false;
    };
    let roster = &mut players[unit.owner].active_creeps;
    let Some(index) = roster.iter().position(|&e| e == entity) else {
        return false;
    };

    health.current -= amount;
    if health.current > 0 {
        return false;
    }

    roster.remove(index);
    despawn_buffer.push(entity);
    debug!(owner = ?unit.owner, creep_type = ?unit.creep_type, "creep killed");
    events.push(SimEvent::CreepKilled {
        owner: unit.owner,
        location: location.0,
    });
    true
}

/// Obstacles holding a standing tower owned by `owner`, in obstacle order.
fn enemy_towers(obstacles: &[Obstacle], owner: PlayerId) -> Vec<(usize, Circle)> {
    obstacles
        .iter()
        .enumerate()
        .filter(|(_, obstacle)| {
            obstacle
                .tower_of(owner)
                .is_some_and(|tower| tower.health > 0)
        })
        .map(|(index, obstacle)| (index, obstacle.body()))
        .collect()
}
