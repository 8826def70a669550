//! Phase 4: the middle-layer edges.

use crate::core::Face;
use crate::cube::RotationEngine;

use super::error::SolveError;
use super::machine::CubeSolver;
use super::phase::Phase;
use super::tables::{insert_left, insert_right, side_cells};

impl<E: RotationEngine> CubeSolver<'_, E> {
    /// Insert every Up-layer edge that belongs in the middle layer. When
    /// none is left but a slot is still wrong, the first bad slot is
    /// kicked out into the Up layer and the sweep starts over.
    pub(super) fn solve_middle_layer(&mut self) -> Result<(), SolveError> {
        while !Phase::MiddleLayer.is_complete(self.snapshot()) {
            self.insert_matched_edges()?;

            if let Some(face) = Face::SIDES.into_iter().find(|&f| self.right_slot_wrong(f)) {
                self.run(&insert_right(face))?;
            }
        }
        Ok(())
    }

    fn insert_matched_edges(&mut self) -> Result<(), SolveError> {
        let mut inserted = true;
        while inserted {
            inserted = false;
            for _ in 0..4 {
                for face in Face::SIDES {
                    let cells = side_cells(face);
                    let up = self.at(Face::Up, cells.up_edge);
                    if !self.is(face, cells.top_edge, face) || up == Face::Up {
                        continue;
                    }
                    if up == face.right_of() {
                        self.run(&insert_right(face))?;
                        inserted = true;
                    } else if up == face.left_of() {
                        self.run(&insert_left(face))?;
                        inserted = true;
                    }
                }
                self.turn(Face::Up, 1)?;
            }
        }
        Ok(())
    }

    /// Check the edge between `face` and its right-hand neighbour.
    fn right_slot_wrong(&self, face: Face) -> bool {
        let cells = side_cells(face);
        let right = face.right_of();
        !self.is(face, cells.right_edge, face) || !self.is(right, cells.right_partner, right)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{parse_sequence, Face};
    use crate::cube::Cube;
    use crate::solver::{CubeSolver, Phase};

    #[test]
    fn test_reinserts_edge_from_up_layer() {
        let mut cube = Cube::new();
        // Take the Front-Right edge out into the Up layer.
        let moves = parse_sequence("U R U' R' U' F' U F").unwrap();
        cube.apply_all(&moves);
        let mut solver = CubeSolver::new(&mut cube);
        assert!(Phase::FirstLayer.is_complete(solver.snapshot()));
        assert!(!Phase::MiddleLayer.is_complete(solver.snapshot()));

        solver.solve_middle_layer().unwrap();
        assert!(Phase::MiddleLayer.is_complete(solver.snapshot()));
    }

    #[test]
    fn test_misplaced_edges_are_kicked_out() {
        let mut cube = Cube::new();
        // Insertions into two different slots mix up the middle layer.
        let front = parse_sequence("U R U' R' U' F' U F").unwrap();
        let back = parse_sequence("U L U' L' U' B' U B").unwrap();
        cube.apply_all(&front).apply_all(&back);
        let mut solver = CubeSolver::new(&mut cube);
        assert!(Phase::FirstLayer.is_complete(solver.snapshot()));

        solver.solve_middle_layer().unwrap();
        assert!(Phase::MiddleLayer.is_complete(solver.snapshot()));
        assert!(!solver.move_history().is_empty());
        assert!(Face::SIDES
            .iter()
            .all(|&face| solver.snapshot().face(face).cell(4) == face));
    }
}
