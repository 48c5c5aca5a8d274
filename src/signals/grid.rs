//! Simulated demand-response events from the grid operator.

use chrono::NaiveDateTime;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Default probability of an event over a whole day.
pub const EVENT_CHANCE_PER_DAY: f32 = 0.05;

/// Minutes in a day, used to spread the daily chance over the index.
const MINUTES_PER_DAY: f32 = 24.0 * 60.0;

/// Independent Bernoulli event trigger per minute.
#[derive(Debug, Clone)]
pub struct GridEvents {
    /// Per-minute trigger probability.
    per_minute_chance: f32,
    rng: StdRng,
}

impl GridEvents {
    /// Creates a generator from a whole-day event chance.
    ///
    /// The daily chance is divided evenly across the day's minutes and
    /// clamped to [0, 1].
    pub fn new(event_chance_per_day: f32, seed: u64) -> Self {
        Self {
            per_minute_chance: (event_chance_per_day / MINUTES_PER_DAY).clamp(0.0, 1.0),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator with the stock daily event chance.
    pub fn with_defaults(seed: u64) -> Self {
        Self::new(EVENT_CHANCE_PER_DAY, seed)
    }

    /// Draws one event flag per index timestamp.
    pub fn generate(&mut self, index: &[NaiveDateTime]) -> Vec<bool> {
        index
            .iter()
            .map(|_| self.rng.random::<f32>() < self.per_minute_chance)
            .collect()
    }
}
