//! Termination checks and ending classification

use super::GameState;
use crate::entity::{Child, Parent};
use serde::Serialize;

/// Age at which the child is grown and the game is won
pub const ADULT_AGE: i32 = 18;

/// Why the game ended. Only one reason is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    OutOfPatience,
    OutOfMoney,
    TrustLost,
    /// The child reached adulthood
    Grown(Legacy),
}

/// How the child turned out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Legacy {
    WellRoundedSuccess,
    Academic,
    HappyGoLucky,
    Survivor,
    Standard,
}

impl Ending {
    #[inline]
    pub fn is_victory(&self) -> bool {
        matches!(self, Ending::Grown(_))
    }

    pub fn title(&self) -> &'static str {
        match self {
            Ending::OutOfPatience => "out of patience",
            Ending::OutOfMoney => "out of money",
            Ending::TrustLost => "trust lost",
            Ending::Grown(legacy) => legacy.title(),
        }
    }

    /// Final line shown to the player
    pub fn message(&self) -> &'static str {
        match self {
            Ending::OutOfPatience => {
                "GAME OVER: You've run out of patience. You've decided to move to a remote monastery and take up gardening."
            }
            Ending::OutOfMoney => {
                "GAME OVER: You've run out of money. You had to sell your child to a circus to pay off debts. (Just kidding, you're just really, really broke.)"
            }
            Ending::TrustLost => {
                "GAME OVER: Your child no longer trusts you. They've decided to go live with their more 'understanding' friend's family."
            }
            Ending::Grown(legacy) => legacy.narrative(),
        }
    }
}

impl Legacy {
    pub fn title(&self) -> &'static str {
        match self {
            Legacy::WellRoundedSuccess => "Well-Rounded Success",
            Legacy::Academic => "The Academic",
            Legacy::HappyGoLucky => "Happy-Go-Lucky",
            Legacy::Survivor => "The Survivor",
            Legacy::Standard => "Standard Outcome",
        }
    }

    pub fn narrative(&self) -> &'static str {
        match self {
            Legacy::WellRoundedSuccess => {
                "Ending: The Well-Rounded Success. Your child is happy, smart, and well-adjusted. They credit you for their success."
            }
            Legacy::Academic => {
                "Ending: The Academic. Your child is a genius but might be a bit socially awkward. They got a full scholarship to MIT."
            }
            Legacy::HappyGoLucky => {
                "Ending: The Happy-Go-Lucky. Your child is full of joy and loves life. They're pursuing their passion for... something. They'll figure it out."
            }
            Legacy::Survivor => {
                "Ending: The Survivor. You made it, but just barely. You and your child have a bond forged in the fires of chaos. You need a long vacation."
            }
            Legacy::Standard => {
                "Ending: The Standard Outcome. Your child is... fine. A perfectly normal, average human being. You did okay."
            }
        }
    }
}

/// Check whether the game is over. Failures take precedence over adulthood,
/// and the first matching reason wins.
pub fn check_ending(state: &GameState) -> Option<Ending> {
    let child = &state.child;
    let parent = &state.parent;

    if parent.patience <= 0 {
        Some(Ending::OutOfPatience)
    } else if parent.money <= 0 {
        Some(Ending::OutOfMoney)
    } else if child.trust_level <= 0 {
        Some(Ending::TrustLost)
    } else if child.age >= ADULT_AGE {
        Some(Ending::Grown(classify_legacy(child, parent)))
    } else {
        None
    }
}

/// Pick the narrative for a grown child; first matching rule wins
pub fn classify_legacy(child: &Child, parent: &Parent) -> Legacy {
    if child.happiness > 80 && child.knowledge > 100 {
        Legacy::WellRoundedSuccess
    } else if child.knowledge > 150 {
        Legacy::Academic
    } else if child.happiness > 90 {
        Legacy::HappyGoLucky
    } else if parent.patience < 20 {
        Legacy::Survivor
    } else {
        Legacy::Standard
    }
}
