//! Mine: moves minerals from its obstacle into the owner's stock.

use royale_core::types::PlayerId;

use crate::player::Players;

#[derive(Debug, Clone, PartialEq)]
pub struct Mine {
    pub owner: PlayerId,
    income_rate: i32,
}

impl Mine {
    pub fn new(owner: PlayerId, income_rate: i32) -> Self {
        Self {
            owner,
            income_rate,
        }
    }

    pub fn income_rate(&self) -> i32 {
        self.income_rate
    }

    /// Set the income rate, clamped to `1..=max_rate`.
    pub fn set_income_rate(&mut self, rate: i32, max_rate: i32) {
        self.income_rate = rate.clamp(1, max_rate.max(1));
    }

    /// One income tick. The stock is not clamped: it may go negative, and
    /// any stock at or below zero ends the mine.
    pub fn act(&mut self, minerals: &mut i32, players: &mut Players) -> bool {
        let owner = &mut players[self.owner];
        owner.resources_per_tick += self.income_rate;
        owner.resources += self.income_rate;
        *minerals -= self.income_rate;
        *minerals <= 0
    }

    pub fn extra_tooltip_lines(&self, minerals: i32) -> Vec<String> {
        vec![
            format!("MINE (+{})", self.income_rate),
            format!("Remaining resources: {minerals}"),
        ]
    }
}
