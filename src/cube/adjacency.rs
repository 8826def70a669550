//! The adjacency table: which neighbour stickers move with each face.
//!
//! For every face, the table lists its four neighbours in the order a
//! clockwise turn visits them, each paired with the three ring positions of
//! that neighbour's strip that ride along with the turn. On a clockwise
//! turn every strip receives the stickers of the strip listed before it;
//! the first strip receives the last.
//!
//! Ring positions index the 8 non-center stickers of a face, clockwise
//! from the top-left corner (see `CubeState`).

use crate::core::Face;

/// A three-sticker strip on a neighbouring face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strip {
    /// The neighbouring face.
    pub face: Face,
    /// Ring positions of the three stickers, in transfer order.
    pub ring: [usize; 3],
}

const fn strip(face: Face, ring: [usize; 3]) -> Strip {
    Strip { face, ring }
}

/// Neighbour strips per face, indexed by `Face::index()`.
pub const ADJACENCY: [[Strip; 4]; 6] = [
    // Front
    [
        strip(Face::Up, [0, 1, 2]),
        strip(Face::Right, [0, 1, 2]),
        strip(Face::Down, [0, 1, 2]),
        strip(Face::Left, [0, 1, 2]),
    ],
    // Back
    [
        strip(Face::Up, [4, 5, 6]),
        strip(Face::Left, [4, 5, 6]),
        strip(Face::Down, [4, 5, 6]),
        strip(Face::Right, [4, 5, 6]),
    ],
    // Right
    [
        strip(Face::Up, [6, 7, 0]),
        strip(Face::Back, [6, 7, 0]),
        strip(Face::Down, [2, 3, 4]),
        strip(Face::Front, [2, 3, 4]),
    ],
    // Left
    [
        strip(Face::Up, [2, 3, 4]),
        strip(Face::Front, [6, 7, 0]),
        strip(Face::Down, [6, 7, 0]),
        strip(Face::Back, [2, 3, 4]),
    ],
    // Up
    [
        strip(Face::Front, [0, 1, 2]),
        strip(Face::Left, [6, 7, 0]),
        strip(Face::Back, [0, 1, 2]),
        strip(Face::Right, [2, 3, 4]),
    ],
    // Down
    [
        strip(Face::Front, [4, 5, 6]),
        strip(Face::Right, [6, 7, 0]),
        strip(Face::Back, [4, 5, 6]),
        strip(Face::Left, [2, 3, 4]),
    ],
];

/// The four neighbour strips of `face`, in clockwise visiting order.
#[must_use]
pub const fn neighbours(face: Face) -> &'static [Strip; 4] {
    &ADJACENCY[face.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours_exclude_self_and_opposite() {
        for face in Face::ALL {
            for strip in neighbours(face) {
                assert_ne!(strip.face, face);
                assert_ne!(strip.face, face.opposite());
            }
        }
    }

    #[test]
    fn test_each_neighbour_appears_once() {
        for face in Face::ALL {
            let mut seen: Vec<Face> = neighbours(face).iter().map(|s| s.face).collect();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), 4, "face {} has a repeated neighbour", face);
        }
    }

    #[test]
    fn test_ring_positions_in_range() {
        for row in &ADJACENCY {
            for strip in row {
                assert!(strip.ring.iter().all(|&i| i < 8));
            }
        }
    }

    #[test]
    fn test_up_turn_visits_sides_front_left_back_right() {
        let order: Vec<Face> = neighbours(Face::Up).iter().map(|s| s.face).collect();
        assert_eq!(order, vec![Face::Front, Face::Left, Face::Back, Face::Right]);
    }
}
