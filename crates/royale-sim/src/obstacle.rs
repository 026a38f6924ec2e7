//! Obstacle: a fixed resource node that can host one structure.
//!
//! The obstacle owns its structure outright. Attaching a new one drops the
//! old one, so there is never more than one per node.

use std::f64::consts::PI;

use royale_core::catalog::CreepType;
use royale_core::config::Rules;
use royale_core::enums::StructureKind;
use royale_core::state::ObstacleView;
use royale_core::types::{ObstacleId, PlayerId, Vector2};
use royale_creep_ai::Circle;

use crate::structures::{Barracks, Mine, Site, Structure, TickContext, Tower};

#[derive(Debug, Clone)]
pub struct Obstacle {
    id: ObstacleId,
    location: Vector2,
    radius: f64,
    area: f64,
    /// Never replenished. May go negative under a mine.
    pub minerals: i32,
    max_mineral_rate: i32,
    structure: Option<Structure>,
}

impl Obstacle {
    pub fn new(
        id: ObstacleId,
        location: Vector2,
        radius: f64,
        minerals: i32,
        max_mineral_rate: i32,
    ) -> Self {
        Self {
            id,
            location,
            radius,
            area: PI * radius * radius,
            minerals,
            max_mineral_rate,
            structure: None,
        }
    }

    pub fn id(&self) -> ObstacleId {
        self.id
    }

    pub fn location(&self) -> Vector2 {
        self.location
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn max_mineral_rate(&self) -> i32 {
        self.max_mineral_rate
    }

    pub fn body(&self) -> Circle {
        Circle::new(self.location, self.radius)
    }

    pub fn site(&self) -> Site {
        Site {
            id: self.id,
            location: self.location,
            radius: self.radius,
            area: self.area,
        }
    }

    pub fn structure(&self) -> Option<&Structure> {
        self.structure.as_ref()
    }

    pub fn structure_mut(&mut self) -> Option<&mut Structure> {
        self.structure.as_mut()
    }

    /// Owner of the attached structure, if any.
    pub fn owner(&self) -> Option<PlayerId> {
        self.structure.as_ref().map(Structure::owner)
    }

    /// The attached tower, if this obstacle holds one owned by `owner`.
    pub fn tower_of(&self, owner: PlayerId) -> Option<&Tower> {
        match &self.structure {
            Some(Structure::Tower(tower)) if tower.owner == owner => Some(tower),
            _ => None,
        }
    }

    /// Advance the attached structure one tick. If it reports completion
    /// the slot is emptied and the removed structure returned.
    pub fn act(&mut self, ctx: &mut TickContext) -> Option<Structure> {
        let site = self.site();
        let structure = self.structure.as_mut()?;
        if structure.act(&site, &mut self.minerals, ctx) {
            self.structure.take()
        } else {
            None
        }
    }

    pub fn set_mine(&mut self, owner: PlayerId, rules: &Rules) {
        let rate = rules.mine_base_income_rate.min(self.max_mineral_rate.max(1));
        self.structure = Some(Structure::Mine(Mine::new(owner, rate)));
    }

    pub fn set_tower(&mut self, owner: PlayerId, health: i32, rules: &Rules) {
        let tower = Tower::new(owner, health, &self.site(), rules);
        self.structure = Some(Structure::Tower(tower));
    }

    pub fn set_barracks(&mut self, owner: PlayerId, creep_type: CreepType) {
        self.structure = Some(Structure::Barracks(Barracks::new(owner, creep_type)));
    }

    /// Detach whatever stands here.
    pub fn clear_structure(&mut self) -> Option<Structure> {
        self.structure.take()
    }

    pub fn extra_tooltip_lines(&self) -> Vec<String> {
        match &self.structure {
            Some(structure) => structure.extra_tooltip_lines(self.minerals),
            None => vec![format!("Remaining resources: {}", self.minerals)],
        }
    }

    pub fn structure_kind(&self) -> Option<StructureKind> {
        self.structure.as_ref().map(Structure::kind)
    }

    pub fn view(&self) -> ObstacleView {
        ObstacleView {
            id: self.id,
            location: self.location,
            radius: self.radius,
            minerals: self.minerals,
            max_mineral_rate: self.max_mineral_rate,
            structure: self.structure.as_ref().map(Structure::view),
            tooltip: self.extra_tooltip_lines(),
        }
    }
}
