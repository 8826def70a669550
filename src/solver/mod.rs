//! Layer-by-layer solver for rust-cube.
//!
//! ## Overview
//!
//! `CubeSolver` drives any `RotationEngine` through eight fixed phases of
//! the beginner's method:
//!
//! 1. **Daisy**: Down-labeled edges around the Up center
//! 2. **Cross**: Petals dropped onto the Down face, aligned with the sides
//! 3. **First layer**: Down corners inserted with three-move triggers
//! 4. **Middle layer**: Edges inserted left or right from the Up layer
//! 5. **Up cross**: Dot, elbow and bar cases turned into a cross
//! 6. **Up face**: Corners twisted until the Up face is one colour
//! 7. **Up corners**: Corners permuted into matching pairs
//! 8. **Up edges**: A final edge three-cycle
//!
//! Every phase reads only the serialized grids and turns faces only
//! through the engine's `turn`. Phases that are already reached are
//! skipped, so solving a solved cube issues no moves.
//!
//! ## Usage
//!
//! ```rust
//! use rust_cube::core::ScrambleConfig;
//! use rust_cube::cube::Cube;
//! use rust_cube::solver::CubeSolver;
//!
//! let mut cube = Cube::new();
//! cube.scramble(&ScrambleConfig::new(42, 20));
//!
//! let mut solver = CubeSolver::new(&mut cube);
//! assert_eq!(solver.solve(), Ok(true));
//!
//! for (step, mv) in solver.move_history().iter().enumerate() {
//!     println!("Step {} - Move: {}", step + 1, mv);
//! }
//! ```
//!
//! ## Failures
//!
//! A cube assembled by hand rather than by turning faces can defeat the
//! method. `solve()` then returns a `SolveError` naming the phase, and the
//! cube keeps whatever turns were already made.

pub mod config;
pub mod error;
pub mod phase;
pub mod stats;
pub mod tables;
pub mod machine;

mod daisy;
mod first_layer;
mod middle_layer;
mod last_layer;

// Re-export main types
pub use config::SolverConfig;
pub use error::{SolveError, Violation};
pub use phase::Phase;
pub use stats::SolveStats;
pub use machine::CubeSolver;
