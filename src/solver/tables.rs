//! Fixed lookup tables and move sequences for the solving phases.
//!
//! All positions are cell indices (0-8, row-major) into serialized faces.
//! The serialized grids are not all drawn the same way up: Front, Back and
//! Down read with Up at the top, but Right's Up edge is its right column
//! and Left's Up edge is its left column, and the Up grid has Front along
//! its top row. The tables below bake those orientations in.

use smallvec::SmallVec;

use crate::core::{Face, Move};

/// A short move sequence built at runtime.
pub type Sequence = SmallVec<[Move; 12]>;

const fn mv(face: Face, count: i32) -> Move {
    Move::new(face, count)
}

/// Which way a three-move trigger turns the Up face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    /// `X' U' X`
    Left,
    /// `X U X'`
    Right,
}

/// The three-move trigger on `face`.
#[must_use]
pub fn trigger(face: Face, hand: Hand) -> [Move; 3] {
    match hand {
        Hand::Left => [mv(face, -1), mv(Face::Up, -1), mv(face, 1)],
        Hand::Right => [mv(face, 1), mv(Face::Up, 1), mv(face, -1)],
    }
}

// === Per-side cell positions ===

/// Cell positions on and around one side face.
///
/// "Left" and "right" are as seen looking at the side face with Up on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideCells {
    /// Up-layer corner on the left.
    pub top_left: usize,
    /// Up-layer edge.
    pub top_edge: usize,
    /// Up-layer corner on the right.
    pub top_right: usize,
    /// Middle-layer edge on the left.
    pub left_edge: usize,
    /// Middle-layer edge on the right.
    pub right_edge: usize,
    /// The Down-layer row.
    pub bottom_row: [usize; 3],
    /// Down-layer edge.
    pub bottom_edge: usize,
    /// Up-face cell of the Up-layer edge.
    pub up_edge: usize,
    /// Up-face cell of the Up-layer corner on the left.
    pub up_corner: usize,
    /// Cell on the right-hand neighbour sharing the middle-layer edge.
    pub right_partner: usize,
}

const FRONT_CELLS: SideCells = SideCells {
    top_left: 0,
    top_edge: 1,
    top_right: 2,
    left_edge: 3,
    right_edge: 5,
    bottom_row: [6, 7, 8],
    bottom_edge: 7,
    up_edge: 1,
    up_corner: 2,
    right_partner: 1,
};

const RIGHT_CELLS: SideCells = SideCells {
    top_left: 2,
    top_edge: 5,
    top_right: 8,
    left_edge: 1,
    right_edge: 7,
    bottom_row: [0, 3, 6],
    bottom_edge: 3,
    up_edge: 3,
    up_corner: 0,
    right_partner: 3,
};

const BACK_CELLS: SideCells = SideCells {
    top_left: 0,
    top_edge: 1,
    top_right: 2,
    left_edge: 3,
    right_edge: 5,
    bottom_row: [6, 7, 8],
    bottom_edge: 7,
    up_edge: 7,
    up_corner: 6,
    right_partner: 7,
};

const LEFT_CELLS: SideCells = SideCells {
    top_left: 6,
    top_edge: 3,
    top_right: 0,
    left_edge: 7,
    right_edge: 1,
    bottom_row: [2, 5, 8],
    bottom_edge: 5,
    up_edge: 5,
    up_corner: 8,
    right_partner: 3,
};

/// Cell positions for a side face.
///
/// Up and Down have no side cells; they fall back to Front's, which no
/// caller relies on.
#[must_use]
pub const fn side_cells(face: Face) -> &'static SideCells {
    match face {
        Face::Right => &RIGHT_CELLS,
        Face::Back => &BACK_CELLS,
        Face::Left => &LEFT_CELLS,
        _ => &FRONT_CELLS,
    }
}

/// Up-face edge cells.
pub const UP_EDGES: [usize; 4] = [1, 3, 5, 7];

/// Down-face edge cells.
pub const DOWN_EDGES: [usize; 4] = [1, 3, 5, 7];

// === Phase 1: daisy ===

/// Petals lying on the Down face: (Down cell, Up cell above it, face to half-turn).
pub const PETALS_ON_DOWN_FACE: [(usize, usize, Face); 4] = [
    (1, 1, Face::Front),
    (5, 3, Face::Right),
    (3, 5, Face::Left),
    (7, 7, Face::Back),
];

/// Petals in the Down layer facing sideways:
/// (face, cell, Up cell to clear, neighbour turned the other way).
pub const PETALS_ON_DOWN_LAYER: [(Face, usize, usize, Face); 4] = [
    (Face::Left, 5, 7, Face::Back),
    (Face::Back, 7, 3, Face::Right),
    (Face::Right, 3, 1, Face::Front),
    (Face::Front, 7, 5, Face::Left),
];

/// Petals in the middle layer: (face, cell, Up cell to clear, face to turn, count).
pub const PETALS_ON_MIDDLE_LAYER: [(Face, usize, usize, Face, i32); 8] = [
    (Face::Left, 1, 1, Face::Front, 1),
    (Face::Left, 7, 7, Face::Back, -1),
    (Face::Back, 5, 5, Face::Left, 1),
    (Face::Back, 3, 3, Face::Right, -1),
    (Face::Right, 7, 7, Face::Back, 1),
    (Face::Right, 1, 1, Face::Front, -1),
    (Face::Front, 5, 3, Face::Right, 1),
    (Face::Front, 3, 5, Face::Left, -1),
];

/// Petals in the Up layer facing sideways:
/// (face, cell, Up cell to clear, neighbour that lifts it).
pub const PETALS_ON_UP_LAYER: [(Face, usize, usize, Face); 4] = [
    (Face::Left, 3, 1, Face::Front),
    (Face::Back, 1, 5, Face::Left),
    (Face::Right, 5, 7, Face::Back),
    (Face::Front, 1, 3, Face::Right),
];

// === Phase 2: cross ===

/// Daisy petals and their side faces: (Up cell, side cell, side face).
pub const CROSS_PETALS: [(usize, usize, Face); 4] = [
    (1, 1, Face::Front),
    (3, 5, Face::Right),
    (7, 1, Face::Back),
    (5, 3, Face::Left),
];

// === Phase 3: first layer ===

/// Up-layer corners ready to drop in:
/// (face whose label matches, its cell, face holding the Down sticker, that cell, hand).
pub const CORNER_TRIGGERS: [(Face, usize, Face, usize, Hand); 8] = [
    (Face::Front, 0, Face::Left, 0, Hand::Left),
    (Face::Front, 2, Face::Right, 2, Hand::Right),
    (Face::Right, 2, Face::Front, 2, Hand::Left),
    (Face::Right, 8, Face::Back, 0, Hand::Right),
    (Face::Back, 0, Face::Right, 8, Hand::Left),
    (Face::Back, 2, Face::Left, 6, Hand::Right),
    (Face::Left, 6, Face::Back, 2, Hand::Left),
    (Face::Left, 0, Face::Front, 0, Hand::Right),
];

/// Down stickers stuck facing sideways in the Down layer:
/// (face, cell, face to trigger, hand).
pub const STUCK_CORNERS: [(Face, usize, Face, Hand); 8] = [
    (Face::Front, 6, Face::Left, Hand::Left),
    (Face::Front, 8, Face::Right, Hand::Right),
    (Face::Right, 0, Face::Front, Hand::Left),
    (Face::Right, 6, Face::Back, Hand::Right),
    (Face::Back, 6, Face::Right, Hand::Left),
    (Face::Back, 8, Face::Left, Hand::Right),
    (Face::Left, 8, Face::Back, Hand::Left),
    (Face::Left, 2, Face::Front, Hand::Right),
];

/// Down stickers facing up above an unsolved slot: (Up cell, Down cell, face).
pub const UP_FACING_CORNERS: [(usize, usize, Face); 4] = [
    (0, 2, Face::Right),
    (2, 0, Face::Front),
    (8, 6, Face::Left),
    (6, 8, Face::Back),
];

/// Down-layer corner slots: (face, cell, other face, other cell).
pub const CORNER_SLOTS: [(Face, usize, Face, usize); 4] = [
    (Face::Front, 6, Face::Left, 2),
    (Face::Right, 0, Face::Front, 8),
    (Face::Back, 6, Face::Right, 6),
    (Face::Left, 8, Face::Back, 8),
];

// === Phase 4: middle layer ===

/// Move the Up-layer edge above `front` into the slot on its right.
#[must_use]
pub fn insert_right(front: Face) -> Sequence {
    let right = front.right_of();
    SmallVec::from_slice(&[
        mv(Face::Up, 1),
        mv(right, 1),
        mv(Face::Up, -1),
        mv(right, -1),
        mv(Face::Up, -1),
        mv(front, -1),
        mv(Face::Up, 1),
        mv(front, 1),
    ])
}

/// Move the Up-layer edge above `front` into the slot on its left.
#[must_use]
pub fn insert_left(front: Face) -> Sequence {
    let left = front.left_of();
    SmallVec::from_slice(&[
        mv(Face::Up, -1),
        mv(left, -1),
        mv(Face::Up, 1),
        mv(left, 1),
        mv(Face::Up, 1),
        mv(front, 1),
        mv(Face::Up, -1),
        mv(front, -1),
    ])
}

// === Phase 5: Up cross ===

/// Turns a dot into an elbow and a horizontal bar into the cross.
pub const CROSS_FROM_BAR: [Move; 6] = [
    mv(Face::Front, 1),
    mv(Face::Right, 1),
    mv(Face::Up, 1),
    mv(Face::Right, -1),
    mv(Face::Up, -1),
    mv(Face::Front, -1),
];

/// Turns an elbow at Back and Left into the cross.
pub const CROSS_FROM_ELBOW: [Move; 6] = [
    mv(Face::Front, 1),
    mv(Face::Up, 1),
    mv(Face::Right, 1),
    mv(Face::Up, -1),
    mv(Face::Right, -1),
    mv(Face::Front, -1),
];

// === Phase 6: Up face ===

/// Corner twist: `R U R' U R U2 R'`.
pub const CORNER_TWIST: [Move; 7] = [
    mv(Face::Right, 1),
    mv(Face::Up, 1),
    mv(Face::Right, -1),
    mv(Face::Up, 1),
    mv(Face::Right, 1),
    mv(Face::Up, 2),
    mv(Face::Right, -1),
];

/// Alignment target before the twist, by number of oriented corners:
/// the (face, cell) that must show the Up label.
#[must_use]
pub const fn twist_alignment(oriented: usize) -> (Face, usize) {
    match oriented {
        0 => (Face::Left, 0),
        1 => (Face::Up, 2),
        _ => (Face::Front, 0),
    }
}

// === Phase 7: Up corners ===

/// Corner permutation: `R' F R' B2 R F' R' B2 R2`, headlights on Back.
pub const CORNER_CYCLE: [Move; 9] = [
    mv(Face::Right, -1),
    mv(Face::Front, 1),
    mv(Face::Right, -1),
    mv(Face::Back, 2),
    mv(Face::Right, 1),
    mv(Face::Front, -1),
    mv(Face::Right, -1),
    mv(Face::Back, 2),
    mv(Face::Right, 2),
];

/// The side that must show headlights before the corner cycle.
pub const HEADLIGHTS_FACE: Face = Face::Back;

// === Phase 8: Up edges ===

/// Edge three-cycle with the solved row opposite `front`:
/// `F2 U L R' F2 L' R U F2`.
#[must_use]
pub fn edge_cycle(front: Face) -> Sequence {
    let left = front.left_of();
    let right = front.right_of();
    SmallVec::from_slice(&[
        mv(front, 2),
        mv(Face::Up, 1),
        mv(left, 1),
        mv(right, -1),
        mv(front, 2),
        mv(left, -1),
        mv(right, 1),
        mv(Face::Up, 1),
        mv(front, 2),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Cube;

    fn run(cube: &mut Cube, moves: &[Move]) {
        cube.apply_all(moves);
    }

    #[test]
    fn test_trigger_hands_are_inverse_shaped() {
        let left = trigger(Face::Front, Hand::Left);
        let right = trigger(Face::Front, Hand::Right);
        assert_eq!(left[0], right[2]);
        assert_eq!(left[1], right[1].inverse());
    }

    #[test]
    fn test_side_cells_bottom_edge_in_bottom_row() {
        for face in Face::SIDES {
            let cells = side_cells(face);
            assert!(cells.bottom_row.contains(&cells.bottom_edge));
            assert!(!cells.bottom_row.contains(&cells.top_edge));
        }
    }

    #[test]
    fn test_side_cells_read_solved_grid() {
        let mut cube = Cube::new();
        // A single U turn moves the top row of every side onto its left neighbour.
        cube.up(1);
        let grids = cube.serialize();
        for face in Face::SIDES {
            let cells = side_cells(face);
            let arrived = face.right_of();
            assert_eq!(grids.get(face, cells.top_left), arrived);
            assert_eq!(grids.get(face, cells.top_edge), arrived);
            assert_eq!(grids.get(face, cells.top_right), arrived);
            assert_eq!(grids.get(face, cells.left_edge), face);
            assert_eq!(grids.get(face, cells.right_edge), face);
            for cell in cells.bottom_row {
                assert_eq!(grids.get(face, cell), face);
            }
        }
    }

    #[test]
    fn test_corner_twist_order() {
        // Sune has order 6 on a solved cube.
        let mut cube = Cube::new();
        for _ in 0..6 {
            run(&mut cube, &CORNER_TWIST);
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn test_corner_cycle_keeps_first_two_layers() {
        let mut cube = Cube::new();
        run(&mut cube, &CORNER_CYCLE);
        let grids = cube.serialize();
        assert!(grids.face(Face::Down).is_uniform());
        for face in Face::SIDES {
            let cells = side_cells(face);
            assert_eq!(grids.get(face, cells.left_edge), face);
            assert_eq!(grids.get(face, cells.right_edge), face);
            assert_eq!(grids.get(face, cells.top_edge), face);
        }
        // Three applications restore the cube.
        run(&mut cube, &CORNER_CYCLE);
        run(&mut cube, &CORNER_CYCLE);
        assert!(cube.is_solved());
    }

    #[test]
    fn test_edge_cycle_preserves_opposite_row() {
        for front in Face::SIDES {
            let mut cube = Cube::new();
            run(&mut cube, &edge_cycle(front));
            let grids = cube.serialize();
            let back = front.opposite();
            let cells = side_cells(back);
            assert_eq!(grids.get(back, cells.top_left), back);
            assert_eq!(grids.get(back, cells.top_edge), back);
            assert_eq!(grids.get(back, cells.top_right), back);
            // Only the three other Up-layer edges move.
            assert_ne!(grids.get(front, side_cells(front).top_edge), front);
            assert!(grids.face(Face::Up).is_uniform());
        }
    }

    #[test]
    fn test_insertions_are_mirror_images() {
        for front in Face::SIDES {
            let right = insert_right(front);
            let left = insert_left(front);
            assert_eq!(right.len(), 8);
            assert_eq!(left.len(), 8);
            for (r, l) in right.iter().zip(left.iter()) {
                if r.face == Face::Up || r.face == front {
                    assert_eq!(r.face, l.face);
                    assert_eq!(r.count, -l.count);
                }
            }
        }
    }
}
