//! Main simulation engine

use super::{
    check_ending, Decider, Ending, GameState, GameStatus, GameSummary, SessionLog, ADULT_AGE,
};
use crate::entity::Decay;
use crate::error::Result;
use crate::event::{process_selection, select_event, ChoiceOutcome, Event, EventCatalog};
use rand::Rng;
use std::io::Write;
use std::time::Duration;

/// The child has a birthday every this many days
pub const BIRTHDAY_INTERVAL: u32 = 10;

const RULE: &str = "========================================";

/// Everything that happened on one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReport {
    /// The day that was played
    pub day: u32,
    pub event_id: String,
    pub outcome: ChoiceOutcome,
    pub decay: Decay,
    /// The child's new age, if they had a birthday
    pub birthday: Option<i32>,
    pub ending: Option<Ending>,
}

/// Resolve one day after the event has been drawn and answered.
///
/// In order: apply the answer, let time pass for the child, tire the parent,
/// age the child on every tenth day, advance the calendar, then check for
/// the end of the game. The caller must not pass a finished game.
pub fn advance_day<R: Rng + ?Sized>(
    state: &mut GameState,
    event: &Event,
    input: &str,
    rng: &mut R,
) -> DayReport {
    debug_assert!(!state.is_over(), "advance_day called on a finished game");
    let day = state.day;

    let outcome = process_selection(state, event, input);
    let decay = state.child.pass_time(rng);
    state.parent.tire();

    let birthday = if day % BIRTHDAY_INTERVAL == 0 {
        state.child.age += 1;
        Some(state.child.age)
    } else {
        None
    };

    state.day += 1;

    let ending = check_ending(state);
    if let Some(ending) = ending {
        state.status = GameStatus::GameOver(ending);
    }

    DayReport {
        day,
        event_id: event.id.clone(),
        outcome,
        decay,
        birthday,
        ending,
    }
}

/// Drives a game: draws events, asks the decider, narrates to `out`
pub struct Engine<'c, R, D, W> {
    catalog: &'c EventCatalog,
    rng: R,
    decider: D,
    out: W,
    pacing: Duration,
    log: SessionLog,
}

impl<'c, R: Rng, D: Decider, W: Write> Engine<'c, R, D, W> {
    pub fn new(catalog: &'c EventCatalog, rng: R, decider: D, out: W) -> Self {
        Self {
            catalog,
            rng,
            decider,
            out,
            pacing: Duration::ZERO,
            log: SessionLog::new(),
        }
    }

    /// Pause for `pacing` after each day
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Play until the game ends and return the summary
    pub fn run(&mut self, state: &mut GameState) -> Result<GameSummary> {
        loop {
            if let Some(ending) = state.ending() {
                return Ok(self.log.summarize(state, ending));
            }

            self.play_day(state)?;

            if !self.pacing.is_zero() && !state.is_over() {
                std::thread::sleep(self.pacing);
            }
        }
    }

    /// Play a single day: show status, draw and present an event, read the
    /// answer, resolve the day and narrate the result
    pub fn play_day(&mut self, state: &mut GameState) -> Result<DayReport> {
        self.display_status(state)?;

        let event = select_event(self.catalog, &mut self.rng);
        self.present(event, state)?;

        let input = self.decider.decide(event, state)?;
        if self.decider.echoes_input() {
            writeln!(self.out, "{}", input)?;
        }

        let report = advance_day(state, event, &input, &mut self.rng);
        self.log.record(&report);

        match &report.outcome {
            ChoiceOutcome::Chosen { label, action } => {
                tracing::debug!(day = report.day, event = %event.id, %label, %action, "choice made");
            }
            ChoiceOutcome::Hesitated => {
                tracing::warn!(day = report.day, event = %event.id, input = %input, "parent hesitated");
            }
        }
        tracing::trace!(day = report.day, decay = ?report.decay, "time passed");

        self.narrate(&report, state)?;
        Ok(report)
    }

    fn display_status(&mut self, state: &GameState) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "--- Day {} ---", state.day)?;
        writeln!(self.out, "{}", state.parent)?;
        writeln!(self.out, "{}", state.child)?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn present(&mut self, event: &Event, state: &GameState) -> Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            ">>> EVENT: {}",
            event.describe(&state.child, &state.parent)
        )?;
        for choice in &event.choices {
            writeln!(self.out, "  {}. {}", choice.label, choice.action)?;
        }
        write!(self.out, "What do you do? (Enter number): ")?;
        self.out.flush()?;
        Ok(())
    }

    fn narrate(&mut self, report: &DayReport, state: &GameState) -> Result<()> {
        writeln!(self.out, "{}", report.outcome.message())?;

        if let Some(age) = report.birthday {
            tracing::info!(age, "birthday");
            writeln!(self.out)?;
            writeln!(
                self.out,
                ">>> {} had a birthday! They are now {} years old. <<<",
                state.child.name, age
            )?;
        }

        if let Some(ending) = report.ending {
            tracing::info!(ending = ending.title(), days = state.days_played(), "game over");
            self.announce_ending(ending, state)?;
        }

        self.out.flush()?;
        Ok(())
    }

    fn announce_ending(&mut self, ending: Ending, state: &GameState) -> Result<()> {
        writeln!(self.out)?;
        if ending.is_victory() {
            writeln!(self.out, "{}", RULE)?;
            writeln!(
                self.out,
                "CONGRATULATIONS! {} has turned {} and is now an adult!",
                state.child.name, ADULT_AGE
            )?;
            writeln!(
                self.out,
                "You have successfully raised your child. Here is the final report:"
            )?;
            writeln!(self.out, "{}", state.child)?;
            writeln!(self.out, "{}", state.parent)?;
            writeln!(self.out)?;
        }
        writeln!(self.out, "{}", ending.message())?;
        Ok(())
    }
}
