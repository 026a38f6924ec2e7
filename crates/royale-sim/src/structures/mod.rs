//! Structures: the buildings an obstacle can host.
//!
//! Exactly three variants exist. Each `act` runs once per tick from the
//! owning obstacle and returns `true` when the structure should be removed.

pub mod barracks;
pub mod mine;
pub mod tower;

use hecs::{Entity, World};

use royale_core::config::Rules;
use royale_core::enums::StructureKind;
use royale_core::events::SimEvent;
use royale_core::state::StructureView;
use royale_core::types::{ObstacleId, PlayerId, Vector2};

use crate::player::Players;
use crate::systems::creeps;
use crate::world_setup;

pub use barracks::Barracks;
pub use mine::Mine;
pub use tower::Tower;

/// Fixed geometry of the obstacle a structure stands on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    pub id: ObstacleId,
    pub location: Vector2,
    pub radius: f64,
    pub area: f64,
}

/// Mutable world state a structure may touch while acting.
pub struct TickContext<'a> {
    pub world: &'a mut World,
    pub players: &'a mut Players,
    pub rules: &'a Rules,
    pub events: &'a mut Vec<SimEvent>,
    pub despawn_buffer: &'a mut Vec<Entity>,
}

impl TickContext<'_> {
    /// Damage a creep, removing it from its roster if it dies.
    pub fn damage_creep(&mut self, entity: Entity, amount: i32) -> bool {
        creeps::damage(
            self.world,
            self.players,
            self.despawn_buffer,
            self.events,
            entity,
            amount,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Structure {
    Mine(Mine),
    Tower(Tower),
    Barracks(Barracks),
}

impl Structure {
    pub fn owner(&self) -> PlayerId {
        match self {
            Structure::Mine(mine) => mine.owner,
            Structure::Tower(tower) => tower.owner,
            Structure::Barracks(barracks) => barracks.owner,
        }
    }

    pub fn kind(&self) -> StructureKind {
        match self {
            Structure::Mine(_) => StructureKind::Mine,
            Structure::Tower(_) => StructureKind::Tower,
            Structure::Barracks(_) => StructureKind::Barracks,
        }
    }

    /// Advance one tick. Returns `true` if the structure should be destroyed.
    pub fn act(&mut self, site: &Site, minerals: &mut i32, ctx: &mut TickContext) -> bool {
        match self {
            Structure::Mine(mine) => mine.act(minerals, ctx.players),
            Structure::Tower(tower) => tower.act(site, ctx),
            Structure::Barracks(barracks) => {
                let owner = barracks.owner;
                barracks.act(|creep_type| {
                    let count = world_setup::spawn_trained_batch(
                        ctx.world,
                        ctx.players,
                        ctx.rules,
                        site,
                        owner,
                        creep_type,
                    );
                    tracing::debug!(obstacle = site.id.0, ?owner, ?creep_type, count, "creeps trained");
                    ctx.events.push(SimEvent::CreepTrained {
                        obstacle: site.id,
                        owner,
                        creep_type,
                        count,
                    });
                })
            }
        }
    }

    /// Owner-facing status lines for the tooltip.
    pub fn extra_tooltip_lines(&self, minerals: i32) -> Vec<String> {
        match self {
            Structure::Mine(mine) => mine.extra_tooltip_lines(minerals),
            Structure::Tower(tower) => tower.extra_tooltip_lines(),
            Structure::Barracks(barracks) => barracks.extra_tooltip_lines(),
        }
    }

    pub fn view(&self) -> StructureView {
        match self {
            Structure::Mine(mine) => StructureView::Mine {
                owner: mine.owner,
                income_rate: mine.income_rate(),
            },
            Structure::Tower(tower) => StructureView::Tower {
                owner: tower.owner,
                health: tower.health,
                attack_radius: tower.attack_radius(),
                target: tower.attack_target(),
            },
            Structure::Barracks(barracks) => StructureView::Barracks {
                owner: barracks.owner,
                creep_type: barracks.creep_type(),
                progress: barracks.progress(),
                progress_max: barracks.progress_max(),
                is_training: barracks.is_training(),
            },
        }
    }
}
