//! Resolving the player's answer to an event

use super::Event;
use crate::effect::{apply_delta, apply_effect};
use crate::entity::Stat;
use crate::simulator::GameState;

/// Patience lost when the player answers with something that is not a choice
pub const HESITATION_PATIENCE_COST: i32 = 5;

/// What happened when the player answered an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// A listed choice was taken and its effect applied
    Chosen { label: String, action: String },
    /// The input matched no choice; only the parent's patience suffered
    Hesitated,
}

impl ChoiceOutcome {
    /// Line shown to the player after answering
    pub fn message(&self) -> &'static str {
        match self {
            ChoiceOutcome::Chosen { .. } => "Choice made. Time passes...",
            ChoiceOutcome::Hesitated => "You hesitated and did nothing, which is also a choice.",
        }
    }
}

/// Apply the player's `input` to `state` for `event`
pub fn process_selection(state: &mut GameState, event: &Event, input: &str) -> ChoiceOutcome {
    match event.choice(input) {
        Some(choice) => {
            apply_effect(state, &choice.effect);
            ChoiceOutcome::Chosen {
                label: choice.label.clone(),
                action: choice.action.clone(),
            }
        }
        None => {
            apply_delta(state, Stat::ParentPatience, -HESITATION_PATIENCE_COST);
            ChoiceOutcome::Hesitated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventCatalog;

    fn tantrum() -> &'static Event {
        EventCatalog::builtin().unwrap().get("tantrum").unwrap()
    }

    #[test]
    fn test_give_in_to_tantrum() {
        let mut state = GameState::new("Sam", 5, "Alex");
        let outcome = process_selection(&mut state, tantrum(), "1");

        assert_eq!(
            outcome,
            ChoiceOutcome::Chosen {
                label: "1".to_string(),
                action: "Give in and buy the candy".to_string(),
            }
        );
        assert_eq!(state.child.happiness, 95);
        assert_eq!(state.parent.patience, 95);
        assert_eq!(state.parent.money, 990);
        assert_eq!(outcome.message(), "Choice made. Time passes...");
    }

    #[test]
    fn test_out_of_range_choice_hesitates() {
        let mut state = GameState::new("Sam", 5, "Alex");
        let child_before = state.child.clone();
        let outcome = process_selection(&mut state, tantrum(), "9");

        assert_eq!(outcome, ChoiceOutcome::Hesitated);
        assert_eq!(state.child, child_before);
        assert_eq!(state.parent.patience, 95);
        assert_eq!(state.parent.money, 1000);
    }

    #[test]
    fn test_hesitation_clamps_patience() {
        let mut state = GameState::new("Sam", 5, "Alex");
        state.parent.patience = 3;
        process_selection(&mut state, tantrum(), "give in");
        assert_eq!(state.parent.patience, 0);
    }
}
