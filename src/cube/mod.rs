//! The cube model and its rotation engine.
//!
//! ## Layout
//!
//! - `adjacency`: Fixed table of which neighbour strips move with each face
//! - `state`: Six 8-sticker rings, the only mutable cube data
//! - `serialized`: 3×3 grids derived from the rings
//! - `engine`: `Cube`, the sole mutator, and the `RotationEngine` trait
//! - `layout`: Flat 54-sticker order and colour palettes for renderers

pub mod adjacency;
pub mod state;
pub mod serialized;
pub mod engine;
pub mod layout;

pub use adjacency::{neighbours, Strip, ADJACENCY};
pub use state::{CubeState, StateCodecError};
pub use serialized::{SerializedCube, SerializedFace};
pub use engine::{Cube, RotationEngine};
pub use layout::{sticker_layout, Palette, LAYOUT_ORDER, ROTATED_BLOCK, STICKER_COUNT};
