//! Serialized faces: the 3×3 grids handed to renderers and to the solver.
//!
//! A serialized face is the ring plus its synthesized center, laid out row
//! by row:
//!
//! ```text
//! ring[0] ring[1] ring[2]
//! ring[7] center  ring[3]
//! ring[6] ring[5] ring[4]
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Face;

use super::state::CubeState;

/// Grid cell → ring position, with `None` for the center.
const CELL_TO_RING: [Option<usize>; 9] = [
    Some(0),
    Some(1),
    Some(2),
    Some(7),
    None,
    Some(3),
    Some(6),
    Some(5),
    Some(4),
];

/// One face as a row-major 3×3 grid of labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SerializedFace(pub [Face; 9]);

impl SerializedFace {
    /// Build the grid for `face` from its ring.
    #[must_use]
    pub fn from_ring(face: Face, ring: &[Face; 8]) -> Self {
        Self(CELL_TO_RING.map(|pos| match pos {
            Some(pos) => ring[pos],
            None => face,
        }))
    }

    /// The label in cell `index` (0-8, row-major).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    #[must_use]
    pub fn cell(&self, index: usize) -> Face {
        self.0[index]
    }

    /// The center label, which is always the face's own identity.
    #[must_use]
    pub fn center(&self) -> Face {
        self.0[4]
    }

    /// The three rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Face]> {
        self.0.chunks(3)
    }

    /// Check if all nine cells carry the center's label.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.0.iter().all(|&label| label == self.center())
    }
}

impl std::fmt::Display for SerializedFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for label in row {
                write!(f, "{}", label)?;
            }
        }
        Ok(())
    }
}

/// A read-only snapshot of all six faces.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SerializedCube {
    /// Grids indexed by `Face::index()`.
    faces: [SerializedFace; 6],
}

impl SerializedCube {
    /// Serialize a cube state.
    #[must_use]
    pub fn from_state(state: &CubeState) -> Self {
        Self {
            faces: Face::ALL.map(|face| SerializedFace::from_ring(face, state.ring(face))),
        }
    }

    /// The grid of `face`.
    #[must_use]
    pub fn face(&self, face: Face) -> &SerializedFace {
        &self.faces[face.index()]
    }

    /// The label in cell `index` of `face`.
    #[must_use]
    pub fn get(&self, face: Face, index: usize) -> Face {
        self.faces[face.index()].cell(index)
    }

    /// Check if `face` shows `label` in `index`.
    #[must_use]
    pub fn is(&self, face: Face, index: usize, label: Face) -> bool {
        self.get(face, index) == label
    }

    /// Check if every face is uniform.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(SerializedFace::is_uniform)
    }

    /// Iterate over `(face, grid)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &SerializedFace)> {
        Face::ALL.into_iter().zip(self.faces.iter())
    }
}
