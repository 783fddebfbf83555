//! Game state: the family and the calendar

use super::Ending;
use crate::entity::{Child, Parent};

/// Whether the game is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver(Ending),
}

/// Everything one game mutates, passed explicitly through each day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub child: Child,
    pub parent: Parent,
    /// Current day, starting at 1
    pub day: u32,
    pub status: GameStatus,
}

impl GameState {
    pub fn new(child_name: impl Into<String>, child_age: i32, parent_name: impl Into<String>) -> Self {
        Self::from_family(Child::new(child_name, child_age), Parent::new(parent_name))
    }

    pub fn from_family(child: Child, parent: Parent) -> Self {
        Self {
            child,
            parent,
            day: 1,
            status: GameStatus::Running,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }

    pub fn ending(&self) -> Option<Ending> {
        match self.status {
            GameStatus::GameOver(ending) => Some(ending),
            GameStatus::Running => None,
        }
    }

    /// Days fully played so far
    #[inline]
    pub fn days_played(&self) -> u32 {
        self.day.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new("Sam", 5, "Alex");
        assert_eq!(state.day, 1);
        assert_eq!(state.status, GameStatus::Running);
        assert!(!state.is_over());
        assert_eq!(state.ending(), None);
        assert_eq!(state.days_played(), 0);
        assert_eq!(state.child.name, "Sam");
        assert_eq!(state.parent.name, "Alex");
    }

    #[test]
    fn test_game_over_status() {
        let mut state = GameState::new("Sam", 5, "Alex");
        state.status = GameStatus::GameOver(Ending::OutOfMoney);
        assert!(state.is_over());
        assert_eq!(state.ending(), Some(Ending::OutOfMoney));
    }
}
