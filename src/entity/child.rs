//! The child being raised and its passive decay

use super::stat::adjust_percent;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

/// Starting hunger (0 is full, 100 is starving)
pub const START_HUNGER: i32 = 50;
/// Starting energy (0 is exhausted, 100 is full of energy)
pub const START_ENERGY: i32 = 50;
/// Starting happiness (0 is miserable, 100 is ecstatic)
pub const START_HAPPINESS: i32 = 75;
/// Starting trust in the parent
pub const START_TRUST: i32 = 75;

/// Per-day hunger growth
pub const HUNGER_GROWTH: RangeInclusive<i32> = 5..=15;
/// Per-day energy loss
pub const ENERGY_LOSS: RangeInclusive<i32> = 5..=15;
/// Per-day happiness loss
pub const HAPPINESS_LOSS: RangeInclusive<i32> = 2..=8;
/// Extra trust loss on a day the child is neglected
pub const NEGLECT_TRUST_LOSS: RangeInclusive<i32> = 5..=10;

/// Hunger above this counts as neglect
pub const NEGLECT_HUNGER: i32 = 80;
/// Energy below this counts as neglect
pub const NEGLECT_ENERGY: i32 = 20;

/// A child whose needs drift every day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Child {
    pub name: String,
    pub age: i32,
    pub hunger: i32,
    pub energy: i32,
    pub happiness: i32,
    /// Accumulated knowledge points, unbounded and may go negative
    pub knowledge: i32,
    pub trust_level: i32,
}

/// Amounts drawn by one call to [`Child::pass_time`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decay {
    pub hunger: i32,
    pub energy: i32,
    pub happiness: i32,
    /// Zero when the child was not neglected
    pub trust: i32,
}

impl Child {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
            hunger: START_HUNGER,
            energy: START_ENERGY,
            happiness: START_HAPPINESS,
            knowledge: 0,
            trust_level: START_TRUST,
        }
    }

    /// Whether the child's needs are unmet badly enough to erode trust
    #[inline]
    pub fn is_neglected(&self) -> bool {
        self.hunger > NEGLECT_HUNGER || self.energy < NEGLECT_ENERGY
    }

    /// Simulate one day passing: the child gets hungrier, more tired and
    /// less happy, and loses trust if neglected.
    ///
    /// The neglect check sees the hunger and energy values after this
    /// day's drift.
    pub fn pass_time<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Decay {
        let mut decay = Decay {
            hunger: rng.gen_range(HUNGER_GROWTH),
            energy: rng.gen_range(ENERGY_LOSS),
            happiness: rng.gen_range(HAPPINESS_LOSS),
            trust: 0,
        };

        self.hunger = adjust_percent(self.hunger, decay.hunger);
        self.energy = adjust_percent(self.energy, -decay.energy);
        self.happiness = adjust_percent(self.happiness, -decay.happiness);

        if self.is_neglected() {
            decay.trust = rng.gen_range(NEGLECT_TRUST_LOSS);
            self.trust_level = adjust_percent(self.trust_level, -decay.trust);
        }

        decay
    }
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} (Age: {}) ---", self.name, self.age)?;
        writeln!(f, "Hunger: {}%", self.hunger)?;
        writeln!(f, "Energy: {}%", self.energy)?;
        writeln!(f, "Happiness: {}%", self.happiness)?;
        writeln!(f, "Knowledge: {}", self.knowledge)?;
        write!(f, "Trust: {}%", self.trust_level)
    }
}
