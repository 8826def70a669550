//! Solver failures.
//!
//! Both kinds are fatal: `solve()` stops at the first one and leaves the
//! cube in whatever state it had reached. Neither is expected for a cube
//! that was scrambled by turning faces.

use thiserror::Error;

use super::phase::Phase;

/// A cube configuration the method assumes cannot occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("exactly three Up-face corners are oriented")]
    ThreeCornersOriented,
    #[error("no side shows a solved Up-layer row")]
    NoSolvedRow,
    #[error("more than {limit} turns issued without converging")]
    TurnCeilingExceeded { limit: u32 },
}

/// Errors returned by `CubeSolver::solve`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("phase {phase}: structural invariant violated: {violation}")]
    StructuralInvariantViolation { phase: Phase, violation: Violation },
    #[error("phase {phase} did not complete after {attempts} attempt(s)")]
    PhaseConvergenceFailure { phase: Phase, attempts: u32 },
}

impl SolveError {
    /// The phase that failed.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            SolveError::StructuralInvariantViolation { phase, .. }
            | SolveError::PhaseConvergenceFailure { phase, .. } => *phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SolveError::StructuralInvariantViolation {
            phase: Phase::UpFace,
            violation: Violation::ThreeCornersOriented,
        };
        assert_eq!(
            err.to_string(),
            "phase 6 (up face): structural invariant violated: exactly three Up-face corners are oriented"
        );
        assert_eq!(err.phase(), Phase::UpFace);

        let err = SolveError::PhaseConvergenceFailure {
            phase: Phase::Daisy,
            attempts: 4,
        };
        assert_eq!(err.to_string(), "phase 1 (daisy) did not complete after 4 attempt(s)");
    }

    #[test]
    fn test_ceiling_message() {
        let violation = Violation::TurnCeilingExceeded { limit: 10 };
        assert_eq!(violation.to_string(), "more than 10 turns issued without converging");
    }
}
