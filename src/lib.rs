//! # rust-cube
//!
//! A 3×3×3 cube model and a deterministic layer-by-layer solver.
//!
//! ## Design Principles
//!
//! 1. **One Mutator**: Only `Cube::turn` writes cube state. Everything else
//!    reads serialized snapshots.
//!
//! 2. **Narrow Seam**: The solver is generic over `RotationEngine` and
//!    touches a cube only through `turn` and `serialize`.
//!
//! 3. **Fixed Method**: Eight ordered phases with bounded retries, not a
//!    search. Fatal states surface as `SolveError`, never as a sentinel.
//!
//! ## Architecture
//!
//! - **Ring Storage**: Each face keeps its 8 non-center stickers clockwise;
//!   a turn rotates the ring by two and cycles four neighbour strips.
//!
//! - **Compacted History**: Consecutive turns of one face merge, and turns
//!   that cancel leave no entry, so the history is already simplified.
//!
//! ## Modules
//!
//! - `core`: Faces, moves and notation, move history, RNG, scramble config
//! - `cube`: Cube state, adjacency table, rotation engine, serialized grids
//! - `solver`: Phase state machine, tables, errors, configuration, stats

pub mod core;
pub mod cube;
pub mod solver;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Face, Move, MoveHistory, NotationError,
    CubeRng, ScrambleConfig,
    parse_sequence,
};

pub use crate::cube::{
    Cube, CubeState, RotationEngine,
    SerializedCube, SerializedFace,
    Palette, sticker_layout,
};

pub use crate::solver::{CubeSolver, Phase, SolveError, SolveStats, SolverConfig};
