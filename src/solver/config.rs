//! Solver configuration parameters.

use serde::{Deserialize, Serialize};

use super::phase::Phase;

/// Solver configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Attempts allowed per phase, indexed by `Phase::number() - 1`.
    /// A phase that is still incomplete after its attempts fails.
    pub attempts: [u32; 8],

    /// Maximum turns a single phase may issue (0 = unlimited).
    /// Legal cubes stay far below the default; hitting it means the
    /// input cannot be solved by this method.
    pub turn_ceiling: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            attempts: Phase::ALL.map(Phase::default_attempts),
            turn_ceiling: 10_000,
        }
    }
}

impl SolverConfig {
    /// Attempts allowed for `phase`.
    #[must_use]
    pub fn attempts_for(&self, phase: Phase) -> u32 {
        self.attempts[phase.number() - 1]
    }

    /// Set the attempts allowed for one phase.
    #[must_use]
    pub fn with_attempts(mut self, phase: Phase, attempts: u32) -> Self {
        self.attempts[phase.number() - 1] = attempts;
        self
    }

    /// Set the per-phase turn ceiling.
    #[must_use]
    pub fn with_turn_ceiling(mut self, ceiling: u32) -> Self {
        self.turn_ceiling = ceiling;
        self
    }
}
