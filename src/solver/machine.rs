//! The phase state machine.
//!
//! `CubeSolver` borrows a rotation engine exclusively, turns faces through
//! its public interface only, and re-reads the serialized grids after
//! every turn. Each phase body lives in its own module as an extra
//! `impl` block on `CubeSolver`.

use tracing::{debug, info, trace, warn};

use crate::core::{Face, Move, MoveHistory};
use crate::cube::{RotationEngine, SerializedCube};

use super::config::SolverConfig;
use super::error::{SolveError, Violation};
use super::phase::Phase;
use super::stats::SolveStats;

/// Solves one cube with the layer-by-layer method.
///
/// Generic over the rotation engine. Holds the engine for its whole
/// lifetime, so nothing else can turn the cube mid-solve.
pub struct CubeSolver<'a, E: RotationEngine> {
    /// The cube being solved.
    engine: &'a mut E,

    /// Grids as of the last turn.
    snapshot: SerializedCube,

    /// Compacted record of every turn issued.
    history: MoveHistory,

    /// Solver configuration.
    config: SolverConfig,

    /// Solve statistics.
    stats: SolveStats,

    /// Phase currently running, for turn accounting.
    phase: Phase,

    /// Turns issued by the running phase.
    phase_turns: u32,
}

impl<'a, E: RotationEngine> CubeSolver<'a, E> {
    /// Bind a solver to `engine` with the default configuration.
    pub fn new(engine: &'a mut E) -> Self {
        Self::with_config(engine, SolverConfig::default())
    }

    /// Bind a solver to `engine`.
    pub fn with_config(engine: &'a mut E, config: SolverConfig) -> Self {
        let snapshot = engine.serialize();
        Self {
            engine,
            snapshot,
            history: MoveHistory::new(),
            config,
            stats: SolveStats::default(),
            phase: Phase::Daisy,
            phase_turns: 0,
        }
    }

    /// Turn a face and record it.
    ///
    /// The history entry merges with the previous one when both turn the
    /// same face; moves that cancel out leave no entry.
    pub fn apply_move(&mut self, face: Face, count: i32) -> &mut Self {
        self.engine.turn(face, count);
        self.snapshot = self.engine.serialize();
        self.history.push(Move::new(face, count));
        self
    }

    /// Drive the cube through every phase until it is solved.
    ///
    /// Phases already reached are skipped, so a solved cube issues no
    /// turns. On error the cube is left wherever the failing phase
    /// stopped.
    pub fn solve(&mut self) -> Result<bool, SolveError> {
        self.stats.reset();

        for phase in Phase::ALL {
            if phase.is_reached(&self.snapshot) {
                debug!(%phase, "phase already reached, skipping");
                continue;
            }

            debug!(%phase, "phase starting");
            self.phase = phase;
            self.phase_turns = 0;

            let attempts = self.config.attempts_for(phase);
            for _ in 0..attempts {
                if phase.is_reached(&self.snapshot) {
                    break;
                }
                self.stats.record_attempt(phase);
                if let Err(err) = self.run_phase(phase) {
                    warn!(%err, "solve aborted");
                    return Err(err);
                }
            }

            if !phase.is_reached(&self.snapshot) {
                let err = SolveError::PhaseConvergenceFailure { phase, attempts };
                warn!(%err, "solve aborted");
                return Err(err);
            }
        }

        self.stats.history_len = self.history.len();
        info!(
            turns = self.stats.total_turns(),
            history = self.history.len(),
            "cube solved"
        );
        Ok(Phase::UpEdges.is_complete(&self.snapshot))
    }

    /// Moves recorded so far.
    #[must_use]
    pub fn move_history(&self) -> &MoveHistory {
        &self.history
    }

    /// Release the engine and keep the history.
    #[must_use]
    pub fn into_history(self) -> MoveHistory {
        self.history
    }

    /// Statistics from the last `solve()`.
    #[must_use]
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// The solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Grids as of the last turn.
    #[must_use]
    pub fn snapshot(&self) -> &SerializedCube {
        &self.snapshot
    }

    fn run_phase(&mut self, phase: Phase) -> Result<(), SolveError> {
        match phase {
            Phase::Daisy => self.form_daisy(),
            Phase::Cross => self.form_cross(),
            Phase::FirstLayer => self.solve_first_layer(),
            Phase::MiddleLayer => self.solve_middle_layer(),
            Phase::UpCross => self.form_up_cross(),
            Phase::UpFace => self.orient_up_corners(),
            Phase::UpCorners => self.permute_up_corners(),
            Phase::UpEdges => self.permute_up_edges(),
        }
    }

    // === Helpers for the phase bodies ===

    /// Issue one turn on behalf of the running phase.
    pub(super) fn turn(&mut self, face: Face, count: i32) -> Result<(), SolveError> {
        let limit = self.config.turn_ceiling;
        if limit != 0 && self.phase_turns >= limit {
            return Err(self.violation(Violation::TurnCeilingExceeded { limit }));
        }
        self.phase_turns += 1;
        self.stats.record_turn(self.phase);
        trace!(phase = %self.phase, mv = %Move::new(face, count), "turn");
        self.apply_move(face, count);
        Ok(())
    }

    /// Issue a fixed sequence.
    pub(super) fn run(&mut self, moves: &[Move]) -> Result<(), SolveError> {
        for mv in moves {
            self.turn(mv.face, mv.count)?;
        }
        Ok(())
    }

    /// Label at `cell` of `face`.
    pub(super) fn at(&self, face: Face, cell: usize) -> Face {
        self.snapshot.get(face, cell)
    }

    /// Check the label at `cell` of `face`.
    pub(super) fn is(&self, face: Face, cell: usize, label: Face) -> bool {
        self.snapshot.is(face, cell, label)
    }

    pub(super) fn violation(&self, violation: Violation) -> SolveError {
        SolveError::StructuralInvariantViolation {
            phase: self.phase,
            violation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScrambleConfig;
    use crate::cube::Cube;

    #[test]
    fn test_solved_cube_needs_no_moves() {
        let mut cube = Cube::new();
        let mut solver = CubeSolver::new(&mut cube);

        assert_eq!(solver.solve(), Ok(true));
        assert!(solver.move_history().is_empty());
        assert_eq!(solver.stats().total_turns(), 0);
        assert_eq!(solver.stats().attempts, [0; 8]);
    }

    #[test]
    fn test_apply_move_cancels() {
        let mut cube = Cube::new();
        let mut solver = CubeSolver::new(&mut cube);

        solver.apply_move(Face::Front, 1).apply_move(Face::Front, -1);
        assert!(solver.move_history().is_empty());
        assert!(solver.snapshot().is_solved());
    }

    #[test]
    fn test_apply_move_merges_to_inverse() {
        let mut cube = Cube::new();
        let mut solver = CubeSolver::new(&mut cube);

        solver
            .apply_move(Face::Front, 1)
            .apply_move(Face::Front, 1)
            .apply_move(Face::Front, 1);
        assert_eq!(solver.move_history().as_slice(), &[Move::new(Face::Front, -1)]);
    }

    #[test]
    fn test_solve_scrambled_cube() {
        let mut cube = Cube::new();
        cube.scramble(&ScrambleConfig::new(7, 20));
        assert!(!cube.is_solved());

        let mut solver = CubeSolver::new(&mut cube);
        assert_eq!(solver.solve(), Ok(true));
        assert!(solver.snapshot().is_solved());
        assert!(solver.stats().total_turns() > 0);
        assert_eq!(solver.stats().history_len, solver.move_history().len());

        drop(solver);
        assert!(cube.is_solved());
    }

    #[test]
    fn test_solve_after_manual_moves() {
        let mut cube = Cube::new();
        let mut solver = CubeSolver::new(&mut cube);
        solver.apply_move(Face::Right, 1).apply_move(Face::Up, 1);

        assert_eq!(solver.solve(), Ok(true));
        assert!(solver.snapshot().is_solved());
    }

    #[test]
    fn test_turn_ceiling_aborts() {
        let mut cube = Cube::new();
        cube.scramble(&ScrambleConfig::new(3, 30));

        let config = SolverConfig::default().with_turn_ceiling(1);
        let mut solver = CubeSolver::with_config(&mut cube, config);
        let err = solver.solve().unwrap_err();

        assert!(matches!(
            err,
            SolveError::StructuralInvariantViolation {
                violation: Violation::TurnCeilingExceeded { limit: 1 },
                ..
            }
        ));
    }

    #[test]
    fn test_zero_attempts_fails_first_unreached_phase() {
        let mut cube = Cube::new();
        cube.scramble(&ScrambleConfig::new(5, 30));

        let config = SolverConfig::default().with_attempts(Phase::Daisy, 0);
        let mut solver = CubeSolver::with_config(&mut cube, config);
        let err = solver.solve().unwrap_err();

        assert_eq!(
            err,
            SolveError::PhaseConvergenceFailure {
                phase: Phase::Daisy,
                attempts: 0,
            }
        );
        assert!(solver.move_history().is_empty());
    }
}
