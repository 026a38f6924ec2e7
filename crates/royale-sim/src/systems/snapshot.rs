//! Snapshot system: builds the complete WorldSnapshot for the rendering layer.
//!
//! Read-only. It never modifies the world.

use hecs::World;

use royale_core::components::{CreepUnit, Health, Location};
use royale_core::enums::GamePhase;
use royale_core::events::SimEvent;
use royale_core::state::{CreepView, WorldSnapshot};
use royale_core::types::SimTime;

use crate::obstacle::Obstacle;
use crate::player::Players;

pub fn build_snapshot(
    world: &World,
    time: SimTime,
    phase: GamePhase,
    players: &Players,
    obstacles: &[Obstacle],
    events: Vec<SimEvent>,
) -> WorldSnapshot {
    WorldSnapshot {
        time,
        phase,
        players: players.iter().map(|p| p.view()).collect(),
        obstacles: obstacles.iter().map(Obstacle::view).collect(),
        creeps: build_creeps(world, players),
        events,
    }
}

/// Live creeps in roster order.
fn build_creeps(world: &World, players: &Players) -> Vec<CreepView> {
    players
        .all_creeps()
        .into_iter()
        .filter_map(|entity| {
            let mut query = world
                .query_one::<(&CreepUnit, &Location, &Health)>(entity)
                .ok()?;
            let (unit, location, health) = query.get()?;
            Some(CreepView {
                id: entity.to_bits().get(),
                owner: unit.owner,
                creep_type: unit.creep_type,
                location: location.0,
                radius: unit.creep_type.stats().radius,
                health: health.current,
                max_health: health.max,
            })
        })
        .collect()
}
