//! Sources of the player's answers

use super::GameState;
use crate::error::{RaiseKidsError, Result};
use crate::event::Event;
use rand::Rng;
use std::io::BufRead;

/// Something that answers events on the parent's behalf
pub trait Decider {
    /// Produce the raw answer to `event`. It need not be a valid label.
    fn decide(&mut self, event: &Event, state: &GameState) -> Result<String>;

    /// Whether the engine should print the answer, since no one typed it
    fn echoes_input(&self) -> bool {
        false
    }
}

impl<D: Decider + ?Sized> Decider for &mut D {
    fn decide(&mut self, event: &Event, state: &GameState) -> Result<String> {
        (**self).decide(event, state)
    }

    fn echoes_input(&self) -> bool {
        (**self).echoes_input()
    }
}

/// Reads one line per answer, e.g. from stdin
#[derive(Debug)]
pub struct LineDecider<B> {
    input: B,
}

impl<B: BufRead> LineDecider<B> {
    pub fn new(input: B) -> Self {
        Self { input }
    }

    /// Read one line without its line ending. End of input is an error.
    ///
    /// Bytes that are not UTF-8 become replacement characters, so such a
    /// line never matches a choice and counts as hesitation.
    pub fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(RaiseKidsError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<B: BufRead> Decider for LineDecider<B> {
    fn decide(&mut self, _event: &Event, _state: &GameState) -> Result<String> {
        self.read_line()
    }
}

/// Picks one of the event's choices uniformly at random
#[derive(Debug)]
pub struct RandomDecider<R> {
    rng: R,
}

impl<R: Rng> RandomDecider<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Decider for RandomDecider<R> {
    fn decide(&mut self, event: &Event, _state: &GameState) -> Result<String> {
        let index = self.rng.gen_range(0..event.choices.len());
        Ok(event.choices[index].label.clone())
    }

    fn echoes_input(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventCatalog;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Cursor;

    #[test]
    fn test_line_decider_reads_lines() {
        let catalog = EventCatalog::builtin().unwrap();
        let event = catalog.get("sick").unwrap();
        let state = GameState::new("Sam", 5, "Alex");
        let mut decider = LineDecider::new(Cursor::new("1\r\n 3 \n"));

        assert_eq!(decider.decide(event, &state).unwrap(), "1");
        assert_eq!(decider.decide(event, &state).unwrap(), " 3 ");
        assert!(matches!(
            decider.decide(event, &state),
            Err(RaiseKidsError::InputClosed)
        ));
        assert!(!decider.echoes_input());
    }

    #[test]
    fn test_line_decider_tolerates_invalid_utf8() {
        let catalog = EventCatalog::builtin().unwrap();
        let event = catalog.get("tantrum").unwrap();
        let state = GameState::new("Sam", 5, "Alex");
        let mut decider = LineDecider::new(Cursor::new(&b"\xff\n1\n"[..]));

        let garbled = decider.decide(event, &state).unwrap();
        assert_eq!(garbled, "\u{fffd}");
        assert!(event.choice(&garbled).is_none());
        assert_eq!(decider.decide(event, &state).unwrap(), "1");
    }

    #[test]
    fn test_random_decider_picks_valid_labels() {
        let catalog = EventCatalog::builtin().unwrap();
        let state = GameState::new("Sam", 5, "Alex");
        let mut decider = RandomDecider::new(ChaCha8Rng::seed_from_u64(9));

        for event in catalog.events() {
            for _ in 0..10 {
                let answer = decider.decide(event, &state).unwrap();
                assert!(event.choice(&answer).is_some());
            }
        }
        assert!(decider.echoes_input());
    }
}
