//! Start-of-game prompts

use super::{GameState, LineDecider};
use crate::error::{RaiseKidsError, Result};
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome to the 'Raising Kids' Simulator!";

/// Answers supplied up front; missing ones are prompted for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupAnswers {
    pub child_name: Option<String>,
    pub child_age: Option<i32>,
    pub parent_name: Option<String>,
}

/// Parse a starting age: a non-negative whole number
pub fn parse_age(input: &str) -> Result<i32> {
    let trimmed = input.trim();
    let age: i32 = trimmed.parse().map_err(|_| {
        RaiseKidsError::InvalidInput(format!("age must be a whole number, got {:?}", trimmed))
    })?;
    if age < 0 {
        return Err(RaiseKidsError::InvalidInput(format!(
            "age cannot be negative, got {}",
            age
        )));
    }
    Ok(age)
}

/// Greet the player and build the initial state, prompting for whatever
/// `answers` leaves out. An invalid age is reported and asked again.
pub fn setup_game<B: BufRead, W: Write>(
    lines: &mut LineDecider<B>,
    out: &mut W,
    answers: SetupAnswers,
) -> Result<GameState> {
    writeln!(out, "{}", WELCOME)?;

    let child_name = match answers.child_name {
        Some(name) => name,
        None => prompt(lines, out, "Enter your child's name: ")?,
    };

    let child_age = match answers.child_age {
        Some(age) => age,
        None => loop {
            let raw = prompt(lines, out, &format!("Enter {}'s starting age: ", child_name))?;
            match parse_age(&raw) {
                Ok(age) => break age,
                Err(err) => {
                    tracing::warn!(input = %raw, "rejected starting age");
                    writeln!(out, "{}", err)?;
                }
            }
        },
    };

    let parent_name = match answers.parent_name {
        Some(name) => name,
        None => prompt(lines, out, "Enter your name (the parent's): ")?,
    };

    tracing::info!(child = %child_name, age = child_age, parent = %parent_name, "new game");
    Ok(GameState::new(child_name, child_age, parent_name))
}

fn prompt<B: BufRead, W: Write>(lines: &mut LineDecider<B>, out: &mut W, text: &str) -> Result<String> {
    write!(out, "{}", text)?;
    out.flush()?;
    Ok(lines.read_line()?.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("7").unwrap(), 7);
        assert_eq!(parse_age(" 12 \n").unwrap(), 12);
        assert!(matches!(parse_age("seven"), Err(RaiseKidsError::InvalidInput(_))));
        assert!(matches!(parse_age("-3"), Err(RaiseKidsError::InvalidInput(_))));
        assert!(matches!(parse_age(""), Err(RaiseKidsError::InvalidInput(_))));
    }

    #[test]
    fn test_prompts_for_everything() {
        let mut lines = LineDecider::new(Cursor::new("Mia\n4\nJo\n"));
        let mut out = Vec::new();
        let state = setup_game(&mut lines, &mut out, SetupAnswers::default()).unwrap();

        assert_eq!(state.child.name, "Mia");
        assert_eq!(state.child.age, 4);
        assert_eq!(state.parent.name, "Jo");

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(WELCOME));
        assert!(text.contains("Enter Mia's starting age: "));
    }

    #[test]
    fn test_reprompts_on_bad_age() {
        let mut lines = LineDecider::new(Cursor::new("Mia\nfour\n-1\n4\nJo\n"));
        let mut out = Vec::new();
        let state = setup_game(&mut lines, &mut out, SetupAnswers::default()).unwrap();

        assert_eq!(state.child.age, 4);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Enter Mia's starting age: ").count(), 3);
        assert!(text.contains("Invalid input: age must be a whole number"));
    }

    #[test]
    fn test_preset_answers_skip_prompts() {
        let mut lines = LineDecider::new(Cursor::new(""));
        let mut out = Vec::new();
        let answers = SetupAnswers {
            child_name: Some("Mia".to_string()),
            child_age: Some(4),
            parent_name: Some("Jo".to_string()),
        };
        let state = setup_game(&mut lines, &mut out, answers).unwrap();
        assert_eq!(state, GameState::new("Mia", 4, "Jo"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut lines = LineDecider::new(Cursor::new("Mia\n"));
        let mut out = Vec::new();
        let err = setup_game(&mut lines, &mut out, SetupAnswers::default()).unwrap_err();
        assert!(matches!(err, RaiseKidsError::InputClosed));
    }
}
