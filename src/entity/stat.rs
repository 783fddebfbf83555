//! Stat keys and the bounded-percentage arithmetic shared by every mutation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound for percentage attributes
pub const PERCENT_MIN: i32 = 0;
/// Upper bound for percentage attributes
pub const PERCENT_MAX: i32 = 100;

/// Every attribute an effect can target.
///
/// The serialized names are the keys used by the event catalog data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    ChildHappiness,
    ChildHunger,
    ChildEnergy,
    ChildTrust,
    ChildKnowledge,
    ParentPatience,
    ParentMoney,
    ParentEnergy,
}

impl Stat {
    /// All stats in display order
    pub const ALL: [Stat; 8] = [
        Stat::ChildHappiness,
        Stat::ChildHunger,
        Stat::ChildEnergy,
        Stat::ChildTrust,
        Stat::ChildKnowledge,
        Stat::ParentPatience,
        Stat::ParentMoney,
        Stat::ParentEnergy,
    ];

    /// Whether the attribute is clamped to [0,100]. Knowledge and money are not.
    #[inline]
    pub fn is_bounded(self) -> bool {
        !matches!(self, Stat::ChildKnowledge | Stat::ParentMoney)
    }

    /// Catalog key for this stat
    pub fn key(self) -> &'static str {
        match self {
            Stat::ChildHappiness => "child_happiness",
            Stat::ChildHunger => "child_hunger",
            Stat::ChildEnergy => "child_energy",
            Stat::ChildTrust => "child_trust",
            Stat::ChildKnowledge => "child_knowledge",
            Stat::ParentPatience => "parent_patience",
            Stat::ParentMoney => "parent_money",
            Stat::ParentEnergy => "parent_energy",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Add `delta` to a percentage attribute and clamp the result to [0,100]
#[inline]
pub fn adjust_percent(current: i32, delta: i32) -> i32 {
    current.saturating_add(delta).clamp(PERCENT_MIN, PERCENT_MAX)
}
