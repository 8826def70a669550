//! Cube state: six rings of eight stickers.
//!
//! Each face stores only its 8 non-center stickers, clockwise from the
//! top-left corner:
//!
//! ```text
//! 0 1 2
//! 7 · 3
//! 6 5 4
//! ```
//!
//! The center never moves and always carries the face's own label, so it
//! is synthesized on serialization rather than stored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Face;

/// Errors from encoding or decoding a state snapshot.
#[derive(Error, Debug)]
pub enum StateCodecError {
    #[error("state snapshot codec failed: {0}")]
    Codec(#[from] bincode::Error),
}

/// The mutable stickers of all six faces.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeState {
    /// Rings indexed by `Face::index()`.
    pub(super) rings: [[Face; 8]; 6],
}

impl CubeState {
    /// The solved state: every ring filled with its own face's label.
    #[must_use]
    pub fn solved() -> Self {
        Self {
            rings: Face::ALL.map(|face| [face; 8]),
        }
    }

    /// Build a state from explicit rings, indexed by `Face::index()`.
    ///
    /// No reachability check is made: any arrangement is accepted.
    #[must_use]
    pub fn from_rings(rings: [[Face; 8]; 6]) -> Self {
        Self { rings }
    }

    /// The ring of `face`.
    #[must_use]
    pub fn ring(&self, face: Face) -> &[Face; 8] {
        &self.rings[face.index()]
    }

    /// Check if every ring shows only its own label.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Face::ALL
            .iter()
            .all(|&face| self.ring(face).iter().all(|&label| label == face))
    }

    /// Sticker count per label, including the six centers.
    ///
    /// Indexed by `Face::index()`. A state reachable by turns always has
    /// nine of each.
    #[must_use]
    pub fn label_counts(&self) -> [usize; 6] {
        let mut counts = [1; 6];
        for ring in &self.rings {
            for label in ring {
                counts[label.index()] += 1;
            }
        }
        counts
    }

    /// Encode a compact binary snapshot.
    pub fn encode(&self) -> Result<Vec<u8>, StateCodecError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`CubeState::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, StateCodecError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}
