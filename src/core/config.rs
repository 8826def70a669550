//! Scramble configuration.

use serde::{Deserialize, Serialize};

/// Parameters for a reproducible scramble.
///
/// The same seed and length always produce the same cube.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// RNG seed.
    pub seed: u64,

    /// Number of random turns to apply.
    pub length: usize,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            length: 25,
        }
    }
}

impl ScrambleConfig {
    /// Create a scramble config.
    #[must_use]
    pub fn new(seed: u64, length: usize) -> Self {
        Self { seed, length }
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of turns.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }
}
