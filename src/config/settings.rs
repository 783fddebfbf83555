//! Run settings for the game engine

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Pause between days, for dramatic effect
pub const DEFAULT_DELAY_MS: u64 = 2000;

/// Settings that shape a run without changing the rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Seed for a reproducible game; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Real-time pause after each day
    pub pacing: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            seed: None,
            pacing: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }
}

impl EngineSettings {
    /// Settings for headless runs: no pause, fixed seed
    pub fn headless(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            pacing: Duration::ZERO,
        }
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.pacing = Duration::from_millis(delay_ms);
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Build the random source for a run
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
