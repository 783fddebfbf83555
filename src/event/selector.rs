//! Event selection logic

use super::{Event, EventCatalog};
use rand::Rng;

/// Draw one event uniformly at random, with replacement
#[inline]
pub fn select_event<'a, R: Rng + ?Sized>(catalog: &'a EventCatalog, rng: &mut R) -> &'a Event {
    let events = catalog.events();
    &events[rng.gen_range(0..events.len())]
}
