//! Face identifiers.
//!
//! A `Face` names one of the six surfaces of the cube and doubles as a
//! sticker label: a solved face shows nothing but its own label. The
//! ordering of `Face::ALL` (F, B, R, L, U, D) is the storage order used by
//! `CubeState` and `SerializedCube`.
//!
//! The four side faces form a ring around the Up/Down axis. Looking down
//! at the Up face, the ring runs Front → Right → Back → Left.

use serde::{Deserialize, Serialize};

/// One of the six cube faces, also used as a sticker label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Front,
    Back,
    Right,
    Left,
    Up,
    Down,
}

impl Face {
    /// All faces in storage order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Right,
        Face::Left,
        Face::Up,
        Face::Down,
    ];

    /// Side faces in ring order (Front, Right, Back, Left), as seen from Up.
    pub const SIDES: [Face; 4] = [Face::Front, Face::Right, Face::Back, Face::Left];

    /// Storage index (0-5), matching `Face::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter label (`F`, `B`, `R`, `L`, `U`, `D`).
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Right => 'R',
            Face::Left => 'L',
            Face::Up => 'U',
            Face::Down => 'D',
        }
    }

    /// Parse a single-letter label.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Face> {
        match c {
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            'R' => Some(Face::Right),
            'L' => Some(Face::Left),
            'U' => Some(Face::Up),
            'D' => Some(Face::Down),
            _ => None,
        }
    }

    /// The face on the opposite side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
        }
    }

    /// The side face to the right of this one, viewed with Up on top.
    ///
    /// Up and Down have no side neighbour and map to themselves.
    #[must_use]
    pub const fn right_of(self) -> Face {
        match self {
            Face::Front => Face::Right,
            Face::Right => Face::Back,
            Face::Back => Face::Left,
            Face::Left => Face::Front,
            other => other,
        }
    }

    /// The side face to the left of this one, viewed with Up on top.
    ///
    /// Up and Down have no side neighbour and map to themselves.
    #[must_use]
    pub const fn left_of(self) -> Face {
        match self {
            Face::Front => Face::Left,
            Face::Left => Face::Back,
            Face::Back => Face::Right,
            Face::Right => Face::Front,
            other => other,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
