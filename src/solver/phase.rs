//! The eight solving phases and their completion predicates.
//!
//! Every predicate is a pure function of a serialized snapshot. From the
//! first layer onward each predicate also demands everything the earlier
//! phases built, so a later phase can never quietly undo an earlier one.
//! The daisy is the exception: it parks the Down stickers on the Up face,
//! which the cross then moves away.
//!
//! A phase counts as *reached* when its own predicate or any later one
//! holds. On a solved cube every phase is reached.

use serde::{Deserialize, Serialize};

use crate::core::Face;
use crate::cube::SerializedCube;

use super::tables::{side_cells, DOWN_EDGES, UP_EDGES};

/// A step of the layer-by-layer method, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    /// Down-labeled edges gathered around the Up center.
    Daisy,
    /// Down cross, aligned with the side centers.
    Cross,
    /// Whole Down layer.
    FirstLayer,
    /// Middle-layer edges.
    MiddleLayer,
    /// Up-face cross.
    UpCross,
    /// All Up-face corners oriented.
    UpFace,
    /// Up-layer corners paired on every side.
    UpCorners,
    /// Up-layer edges permuted: solved.
    UpEdges,
}

impl Phase {
    /// All phases in execution order.
    pub const ALL: [Phase; 8] = [
        Phase::Daisy,
        Phase::Cross,
        Phase::FirstLayer,
        Phase::MiddleLayer,
        Phase::UpCross,
        Phase::UpFace,
        Phase::UpCorners,
        Phase::UpEdges,
    ];

    /// 1-based position in the ladder.
    #[must_use]
    pub const fn number(self) -> usize {
        self as usize + 1
    }

    /// Short human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Daisy => "daisy",
            Phase::Cross => "cross",
            Phase::FirstLayer => "first layer",
            Phase::MiddleLayer => "middle layer",
            Phase::UpCross => "up cross",
            Phase::UpFace => "up face",
            Phase::UpCorners => "up corners",
            Phase::UpEdges => "up edges",
        }
    }

    /// How many times the phase body may run before giving up.
    #[must_use]
    pub const fn default_attempts(self) -> u32 {
        match self {
            Phase::Daisy => 4,
            Phase::UpFace | Phase::UpCorners | Phase::UpEdges => 2,
            _ => 1,
        }
    }

    /// Check this phase's own goal.
    #[must_use]
    pub fn is_complete(self, cube: &SerializedCube) -> bool {
        match self {
            Phase::Daisy => daisy_formed(cube),
            Phase::Cross => cross_formed(cube),
            Phase::FirstLayer => first_layer_solved(cube),
            Phase::MiddleLayer => middle_layer_solved(cube),
            Phase::UpCross => up_cross_formed(cube),
            Phase::UpFace => up_face_solved(cube),
            Phase::UpCorners => up_corners_paired(cube),
            Phase::UpEdges => cube.is_solved(),
        }
    }

    /// Check whether this phase or any later one is complete.
    #[must_use]
    pub fn is_reached(self, cube: &SerializedCube) -> bool {
        Phase::ALL[self as usize..]
            .iter()
            .any(|phase| phase.is_complete(cube))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number(), self.name())
    }
}

fn daisy_formed(cube: &SerializedCube) -> bool {
    UP_EDGES.iter().all(|&cell| cube.is(Face::Up, cell, Face::Down))
}

fn cross_formed(cube: &SerializedCube) -> bool {
    DOWN_EDGES.iter().all(|&cell| cube.is(Face::Down, cell, Face::Down))
        && Face::SIDES
            .iter()
            .all(|&face| cube.is(face, side_cells(face).bottom_edge, face))
}

fn first_layer_solved(cube: &SerializedCube) -> bool {
    cross_formed(cube)
        && cube.face(Face::Down).is_uniform()
        && Face::SIDES.iter().all(|&face| {
            side_cells(face)
                .bottom_row
                .iter()
                .all(|&cell| cube.is(face, cell, face))
        })
}

fn middle_layer_solved(cube: &SerializedCube) -> bool {
    first_layer_solved(cube)
        && Face::SIDES.iter().all(|&face| {
            let cells = side_cells(face);
            cube.is(face, cells.left_edge, face) && cube.is(face, cells.right_edge, face)
        })
}

fn up_cross_formed(cube: &SerializedCube) -> bool {
    middle_layer_solved(cube) && UP_EDGES.iter().all(|&cell| cube.is(Face::Up, cell, Face::Up))
}

fn up_face_solved(cube: &SerializedCube) -> bool {
    up_cross_formed(cube) && cube.face(Face::Up).is_uniform()
}

fn up_corners_paired(cube: &SerializedCube) -> bool {
    up_face_solved(cube)
        && Face::SIDES.iter().all(|&face| {
            let cells = side_cells(face);
            cube.get(face, cells.top_left) == cube.get(face, cells.top_right)
        })
}
