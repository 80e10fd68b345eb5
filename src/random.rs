//! Injectable uniform random sources for food placement.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Yields uniform samples in `[0, 1)`.
///
/// Sources travel inside the game state, so cloning a state also clones
/// the position in its random stream.
pub trait RandomSource {
    /// Returns the next sample.
    fn next_unit(&mut self) -> f64;
}

/// Seeded pseudo-random source used for real play.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Creates a reproducible source from `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    /// Creates a source over `values`; an empty list always yields `0.0`.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Returns how many samples were drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }

        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
