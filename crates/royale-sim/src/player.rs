//! Per-side state: economy, health, hero units and the creep roster.
//!
//! Both players live in one fixed [`Players`] pair owned by the engine. The
//! enemy link is a [`PlayerId`], so there is no reference cycle.

use std::ops::{Index, IndexMut};

use hecs::Entity;

use royale_core::config::Rules;
use royale_core::enums::HeroKind;
use royale_core::state::{HeroView, PlayerView};
use royale_core::types::{PlayerId, Vector2};
use royale_creep_ai::Circle;

/// A fixed hero unit (king, queen or general). Its own steering lives
/// outside the core; the simulation only reads and shoves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroUnit {
    pub kind: HeroKind,
    pub location: Vector2,
    pub radius: f64,
}

impl HeroUnit {
    pub fn body(&self) -> Circle {
        Circle::new(self.location, self.radius)
    }

    fn view(&self) -> HeroView {
        HeroView {
            location: self.location,
            radius: self.radius,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    /// Only ever grows inside the core; spending is the host's business.
    pub resources: i32,
    /// Income collected during the current tick.
    pub resources_per_tick: i32,
    pub health: i32,
    /// Live creeps in spawn order. A creep leaves this list the moment it dies.
    pub active_creeps: Vec<Entity>,
    pub king: HeroUnit,
    pub queen: HeroUnit,
    pub general: HeroUnit,
}

impl Player {
    /// A fresh player with heroes at their home positions.
    pub fn new(id: PlayerId, rules: &Rules) -> Self {
        let inset = rules.hero_corner_inset;
        let home = |x: f64, y: f64| match id {
            PlayerId::Red => Vector2::new(x, y),
            PlayerId::Blue => Vector2::new(rules.world_width - x, rules.world_height - y),
        };
        let hero = |kind, location| HeroUnit {
            kind,
            location,
            radius: rules.hero_radius,
        };

        Self {
            id,
            resources: rules.player_start_resources,
            resources_per_tick: 0,
            health: rules.player_start_health,
            active_creeps: Vec::new(),
            king: hero(HeroKind::King, home(inset, rules.world_height / 2.0)),
            queen: hero(HeroKind::Queen, home(inset, inset)),
            general: hero(HeroKind::General, home(inset, rules.world_height - inset)),
        }
    }

    pub fn enemy(&self) -> PlayerId {
        self.id.enemy()
    }

    pub fn hero(&self, kind: HeroKind) -> &HeroUnit {
        match kind {
            HeroKind::King => &self.king,
            HeroKind::Queen => &self.queen,
            HeroKind::General => &self.general,
        }
    }

    pub fn hero_mut(&mut self, kind: HeroKind) -> &mut HeroUnit {
        match kind {
            HeroKind::King => &mut self.king,
            HeroKind::Queen => &mut self.queen,
            HeroKind::General => &mut self.general,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            id: self.id,
            health: self.health,
            resources: self.resources,
            resources_per_tick: self.resources_per_tick,
            king: self.king.view(),
            queen: self.queen.view(),
            general: self.general.view(),
            active_creeps: self.active_creeps.len() as u32,
        }
    }
}

/// The two players, indexed by [`PlayerId`].
#[derive(Debug, Clone)]
pub struct Players([Player; 2]);

impl Players {
    pub fn new(rules: &Rules) -> Self {
        Self([
            Player::new(PlayerId::Red, rules),
            Player::new(PlayerId::Blue, rules),
        ])
    }

    /// Players in fixed order: red, then blue.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.0.iter_mut()
    }

    /// Every live creep, red roster first, each in spawn order.
    pub fn all_creeps(&self) -> Vec<Entity> {
        self.0
            .iter()
            .flat_map(|p| p.active_creeps.iter().copied())
            .collect()
    }
}

impl Index<PlayerId> for Players {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Player {
        &self.0[id.index()]
    }
}

impl IndexMut<PlayerId> for Players {
    fn index_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.0[id.index()]
    }
}
