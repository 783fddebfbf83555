//! Choice effects as plain data, and the routine that applies them

mod applicator;

pub use applicator::*;

use crate::entity::Stat;
use smallvec::SmallVec;
use std::fmt;

/// A sparse bundle of signed deltas keyed by stat.
///
/// Stats that are not listed have a zero delta. Catalog choices touch two to
/// four stats, so the deltas live inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effect {
    deltas: SmallVec<[(Stat, i32); 4]>,
}

impl Effect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` to `stat`, merging with any delta already present
    pub fn with(mut self, stat: Stat, delta: i32) -> Self {
        self.add(stat, delta);
        self
    }

    fn add(&mut self, stat: Stat, delta: i32) {
        if let Some(entry) = self.deltas.iter_mut().find(|(s, _)| *s == stat) {
            entry.1 = entry.1.saturating_add(delta);
        } else {
            self.deltas.push((stat, delta));
        }
        self.deltas.retain(|(_, d)| *d != 0);
    }

    /// Delta for `stat`, zero when unspecified
    #[inline]
    pub fn delta(&self, stat: Stat) -> i32 {
        self.deltas
            .iter()
            .find(|(s, _)| *s == stat)
            .map(|(_, d)| *d)
            .unwrap_or(0)
    }

    /// Non-zero deltas in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        self.deltas.iter().copied()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.deltas.len()
    }
}

impl FromIterator<(Stat, i32)> for Effect {
    fn from_iter<I: IntoIterator<Item = (Stat, i32)>>(iter: I) -> Self {
        let mut effect = Effect::new();
        for (stat, delta) in iter {
            effect.add(stat, delta);
        }
        effect
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.deltas.is_empty() {
            return f.write_str("no effect");
        }
        for (i, (stat, delta)) in self.deltas.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}{:+}", stat, delta)?;
        }
        Ok(())
    }
}
