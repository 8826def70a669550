//! Solve statistics for diagnostics.

use serde::{Deserialize, Serialize};

use super::phase::Phase;

/// Statistics collected during a solve.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Turns issued per phase, indexed by `Phase::number() - 1`.
    pub turns: [u32; 8],

    /// Attempts used per phase (0 = skipped).
    pub attempts: [u32; 8],

    /// Length of the compacted move history at the end.
    pub history_len: usize,
}

impl SolveStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Turns issued in `phase`.
    #[must_use]
    pub fn turns_in(&self, phase: Phase) -> u32 {
        self.turns[phase.number() - 1]
    }

    /// Attempts used in `phase`.
    #[must_use]
    pub fn attempts_in(&self, phase: Phase) -> u32 {
        self.attempts[phase.number() - 1]
    }

    /// Turns issued across all phases, before history compaction.
    #[must_use]
    pub fn total_turns(&self) -> u32 {
        self.turns.iter().sum()
    }

    pub(crate) fn record_turn(&mut self, phase: Phase) {
        self.turns[phase.number() - 1] += 1;
    }

    pub(crate) fn record_attempt(&mut self, phase: Phase) {
        self.attempts[phase.number() - 1] += 1;
    }
}
