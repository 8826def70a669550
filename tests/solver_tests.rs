//! Solver integration tests.

use proptest::prelude::*;
use rust_cube::core::{Face, Move, MoveHistory, ScrambleConfig};
use rust_cube::cube::{Cube, CubeState};
use rust_cube::solver::{CubeSolver, Phase, SolveError, SolveStats, SolverConfig, Violation};

fn scrambled(seed: u64, length: usize) -> Cube {
    let mut cube = Cube::new();
    cube.scramble(&ScrambleConfig::new(seed, length));
    cube
}

// =============================================================================
// Convergence Tests
// =============================================================================

#[test]
fn test_solved_cube_terminates_immediately() {
    let mut cube = Cube::new();
    let grids = cube.serialize();
    for phase in Phase::ALL {
        assert!(phase.is_reached(&grids));
    }

    let mut solver = CubeSolver::new(&mut cube);
    assert_eq!(solver.solve(), Ok(true));
    assert!(solver.move_history().is_empty());
}

#[test]
fn test_fixed_scramble_is_solved() {
    let mut cube = Cube::new();
    cube.scramble(&ScrambleConfig::new(2024, 20));
    assert!(!cube.is_solved());

    let mut solver = CubeSolver::new(&mut cube);
    assert_eq!(solver.solve(), Ok(true));
    drop(solver);

    let grids = cube.serialize();
    for face in Face::ALL {
        assert!(grids.face(face).0.iter().all(|&label| label == face));
    }
}

#[test]
fn test_many_seeds_solve() {
    for seed in 0..200 {
        let mut cube = scrambled(seed, 40);
        let mut solver = CubeSolver::new(&mut cube);

        match solver.solve() {
            Ok(true) => {}
            other => panic!("seed {}: {:?}", seed, other),
        }
        assert!(solver.snapshot().is_solved());
    }
}

#[test]
fn test_solve_twice_is_noop() {
    let mut cube = scrambled(8, 30);
    let mut solver = CubeSolver::new(&mut cube);

    solver.solve().unwrap();
    let history = solver.move_history().clone();
    solver.solve().unwrap();

    assert_eq!(solver.move_history(), &history);
    assert_eq!(solver.stats(), &SolveStats {
        history_len: history.len(),
        ..SolveStats::default()
    });
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every scramble reachable by turning faces gets solved.
    #[test]
    fn prop_random_scramble_solves(seed: u64, length in 0usize..120) {
        let mut cube = scrambled(seed, length);
        let mut solver = CubeSolver::new(&mut cube);

        prop_assert_eq!(solver.solve(), Ok(true));
        prop_assert!(solver.snapshot().is_solved());
    }

    /// The history never holds adjacent entries on the same face, nor
    /// identity entries.
    #[test]
    fn prop_history_is_compacted(seed: u64) {
        let mut cube = scrambled(seed, 30);
        let mut solver = CubeSolver::new(&mut cube);
        solver.solve().unwrap();

        let moves = solver.move_history().as_slice();
        prop_assert!(moves.iter().all(|mv| [-1, 1, 2].contains(&mv.count)));
        prop_assert!(moves.windows(2).all(|pair| pair[0].face != pair[1].face));
    }

    /// Unwinding the solution from the solved cube recreates the scramble.
    #[test]
    fn prop_unwind_replays_scramble(seed: u64) {
        let start = scrambled(seed, 25);
        let mut cube = start.clone();
        let mut solver = CubeSolver::new(&mut cube);
        solver.solve().unwrap();
        let history = solver.into_history();

        for mv in history.unwind() {
            cube.apply(mv);
        }
        prop_assert_eq!(cube, start);
    }
}

// =============================================================================
// History Tests
// =============================================================================

#[test]
fn test_self_cancelling_moves_leave_no_history() {
    let mut cube = Cube::new();
    let mut solver = CubeSolver::new(&mut cube);

    solver.apply_move(Face::Front, 1);
    solver.apply_move(Face::Front, -1);

    assert!(solver.move_history().is_empty());
}

#[test]
fn test_three_quarter_turns_merge() {
    let mut cube = Cube::new();
    let mut solver = CubeSolver::new(&mut cube);

    solver.apply_move(Face::Front, 1);
    solver.apply_move(Face::Front, 1);
    solver.apply_move(Face::Front, 1);

    assert_eq!(solver.move_history().as_slice(), &[Move::new(Face::Front, -1)]);
}

#[test]
fn test_history_prints_steps() {
    let mut cube = Cube::new();
    let mut solver = CubeSolver::new(&mut cube);
    solver
        .apply_move(Face::Right, 1)
        .apply_move(Face::Up, -1)
        .apply_move(Face::Up, -1);

    let steps: Vec<String> = solver
        .move_history()
        .iter()
        .enumerate()
        .map(|(i, mv)| format!("Step {} - Move: {}", i + 1, mv))
        .collect();

    assert_eq!(steps, vec!["Step 1 - Move: R", "Step 2 - Move: U2"]);
}

#[test]
fn test_history_serialization() {
    let mut cube = scrambled(12, 20);
    let mut solver = CubeSolver::new(&mut cube);
    solver.solve().unwrap();
    let history = solver.into_history();

    let json = serde_json::to_string(&history).unwrap();
    let restored: MoveHistory = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, history);
}

// =============================================================================
// Configuration and Failure Tests
// =============================================================================

#[test]
fn test_stats_account_for_every_turn() {
    let mut cube = scrambled(31, 40);
    let mut solver = CubeSolver::new(&mut cube);
    solver.solve().unwrap();

    let stats = solver.stats();
    assert!(stats.total_turns() as usize >= stats.history_len);
    assert_eq!(stats.history_len, solver.move_history().len());
    for phase in Phase::ALL {
        assert!(stats.attempts_in(phase) <= phase.default_attempts());
    }
}

#[test]
fn test_turn_ceiling_is_structural_violation() {
    let mut cube = scrambled(1, 30);
    let config = SolverConfig::default().with_turn_ceiling(2);
    let mut solver = CubeSolver::with_config(&mut cube, config);

    let err = solver.solve().unwrap_err();

    assert!(matches!(
        err,
        SolveError::StructuralInvariantViolation {
            violation: Violation::TurnCeilingExceeded { limit: 2 },
            ..
        }
    ));
}

#[test]
fn test_hand_built_edge_flip_fails() {
    // A single flipped edge cannot be produced by turning faces.
    let mut rings = Face::ALL.map(|face| [face; 8]);
    // The Up-Front edge: Up ring 1, Front ring 1.
    rings[Face::Up.index()][1] = Face::Front;
    rings[Face::Front.index()][1] = Face::Up;
    let mut cube = Cube::from_state(CubeState::from_rings(rings));

    let mut solver = CubeSolver::new(&mut cube);
    let err = solver.solve().unwrap_err();

    assert!(err.phase() >= Phase::UpCross);
    assert!(!solver.snapshot().is_solved());
}

/// Solved cube with one edge sticker on each side face relabelled, in
/// Front, Right, Back, Left order. Every label still appears nine times.
fn side_edges_relabelled(labels: [Face; 4]) -> Cube {
    let mut rings = Face::ALL.map(|face| [face; 8]);
    rings[Face::Front.index()][1] = labels[0];
    rings[Face::Right.index()][3] = labels[1];
    rings[Face::Back.index()][1] = labels[2];
    rings[Face::Left.index()][7] = labels[3];
    Cube::from_state(CubeState::from_rings(rings))
}

#[test]
fn test_cycled_edges_without_solved_row_fail() {
    let mut cube = side_edges_relabelled([Face::Right, Face::Back, Face::Left, Face::Front]);
    let mut solver = CubeSolver::new(&mut cube);

    assert_eq!(
        solver.solve(),
        Err(SolveError::StructuralInvariantViolation {
            phase: Phase::UpEdges,
            violation: Violation::NoSolvedRow,
        })
    );
}

#[test]
fn test_cycled_edges_exhaust_attempts() {
    let mut cube = side_edges_relabelled([Face::Left, Face::Front, Face::Right, Face::Back]);
    let mut solver = CubeSolver::new(&mut cube);

    assert_eq!(
        solver.solve(),
        Err(SolveError::PhaseConvergenceFailure {
            phase: Phase::UpEdges,
            attempts: 2,
        })
    );
    assert_eq!(solver.stats().attempts_in(Phase::UpEdges), 2);
}

#[test]
fn test_error_display_names_phase() {
    let err = SolveError::PhaseConvergenceFailure {
        phase: Phase::UpCorners,
        attempts: 2,
    };
    assert_eq!(err.to_string(), "phase 7 (up corners) did not complete after 2 attempt(s)");
}
