//! Core types: faces, moves, move history, RNG, scramble configuration.
//!
//! These are shared by the rotation engine and the solver and carry no
//! cube logic of their own.

pub mod face;
pub mod moves;
pub mod rng;
pub mod config;

pub use face::Face;
pub use moves::{normalize_count, parse_sequence, Move, MoveHistory, NotationError};
pub use rng::CubeRng;
pub use config::ScrambleConfig;
