//! Game summary for the end-of-game report

use super::{DayReport, Ending, GameState};
use crate::entity::{Child, Parent};
use crate::event::ChoiceOutcome;
use serde::Serialize;
use std::collections::BTreeMap;

/// Running tally of what happened during a game
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    event_counts: BTreeMap<String, u32>,
    hesitations: u32,
    birthdays: u32,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one resolved day
    pub fn record(&mut self, report: &DayReport) {
        *self.event_counts.entry(report.event_id.clone()).or_insert(0) += 1;
        if report.outcome == ChoiceOutcome::Hesitated {
            self.hesitations += 1;
        }
        if report.birthday.is_some() {
            self.birthdays += 1;
        }
    }

    /// Build the final summary once the game is over
    pub fn summarize(&self, state: &GameState, ending: Ending) -> GameSummary {
        GameSummary {
            child: state.child.clone(),
            parent: state.parent.clone(),
            days_played: state.days_played(),
            ending,
            ending_title: ending.title().to_string(),
            event_counts: self.event_counts.clone(),
            hesitations: self.hesitations,
            birthdays: self.birthdays,
        }
    }
}

/// Final report of a finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub child: Child,
    pub parent: Parent,
    pub days_played: u32,
    pub ending: Ending,
    pub ending_title: String,
    /// How many times each event was drawn
    pub event_counts: BTreeMap<String, u32>,
    pub hesitations: u32,
    pub birthdays: u32,
}

impl GameSummary {
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
