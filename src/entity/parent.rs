//! The parent: the player's own resources

use super::stat::adjust_percent;
use serde::Serialize;
use std::fmt;

/// Starting patience (0 is stressed out, 100 is zen)
pub const START_PATIENCE: i32 = 100;
pub const START_MONEY: i32 = 1000;
pub const START_ENERGY: i32 = 75;
/// Energy the parent loses every day regardless of choices
pub const DAILY_FATIGUE: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parent {
    pub name: String,
    pub patience: i32,
    /// Unbounded; running out ends the game
    pub money: i32,
    pub energy: i32,
}

impl Parent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            patience: START_PATIENCE,
            money: START_MONEY,
            energy: START_ENERGY,
        }
    }

    /// End-of-day tiredness
    #[inline]
    pub fn tire(&mut self) {
        self.energy = adjust_percent(self.energy, -DAILY_FATIGUE);
    }
}

impl fmt::Display for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} (Parent) ---", self.name)?;
        writeln!(f, "Patience: {}%", self.patience)?;
        writeln!(f, "Energy: {}%", self.energy)?;
        write!(f, "Money: ${}", self.money)
    }
}
