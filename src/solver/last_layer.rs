//! Phases 5 to 8: the Up layer.
//!
//! Each step inspects a small pattern on the Up layer, turns Up to bring
//! it into a canonical position and applies one fixed sequence. All the
//! sequences leave the first two layers intact.

use crate::core::Face;
use crate::cube::RotationEngine;

use super::error::{SolveError, Violation};
use super::machine::CubeSolver;
use super::tables::{
    edge_cycle, side_cells, twist_alignment, CORNER_CYCLE, CORNER_TWIST, CROSS_FROM_BAR,
    CROSS_FROM_ELBOW, HEADLIGHTS_FACE,
};

impl<E: RotationEngine> CubeSolver<'_, E> {
    // === Phase 5 ===

    /// Dot becomes elbow, elbow or bar becomes cross.
    pub(super) fn form_up_cross(&mut self) -> Result<(), SolveError> {
        if self.up_edge_flags() == [false; 4] {
            self.run(&CROSS_FROM_BAR)?;
        }

        // Flags are ordered Front, Right, Back, Left.
        let flags = self.up_edge_flags();
        let shown = flags.iter().filter(|&&up| up).count();
        if shown != 2 {
            return Ok(());
        }

        if flags[0] == flags[2] {
            if flags[0] {
                self.turn(Face::Up, 1)?;
            }
            self.run(&CROSS_FROM_BAR)
        } else {
            while !(self.up_edge_shows_up(Face::Back) && self.up_edge_shows_up(Face::Left)) {
                self.turn(Face::Up, 1)?;
            }
            self.run(&CROSS_FROM_ELBOW)
        }
    }

    fn up_edge_shows_up(&self, side: Face) -> bool {
        self.is(Face::Up, side_cells(side).up_edge, Face::Up)
    }

    fn up_edge_flags(&self) -> [bool; 4] {
        Face::SIDES.map(|side| self.up_edge_shows_up(side))
    }

    // === Phase 6 ===

    /// Twist until one corner is oriented, then once more for all four.
    pub(super) fn orient_up_corners(&mut self) -> Result<(), SolveError> {
        let mut oriented = self.oriented_up_corners();
        while oriented != 1 {
            match oriented {
                3 => return Err(self.violation(Violation::ThreeCornersOriented)),
                4 => return Ok(()),
                _ => {}
            }
            self.align_for_twist(oriented)?;
            self.run(&CORNER_TWIST)?;
            oriented = self.oriented_up_corners();
        }

        self.align_for_twist(1)?;
        self.run(&CORNER_TWIST)
    }

    fn oriented_up_corners(&self) -> usize {
        Face::SIDES
            .iter()
            .filter(|&&side| self.is(Face::Up, side_cells(side).up_corner, Face::Up))
            .count()
    }

    fn align_for_twist(&mut self, oriented: usize) -> Result<(), SolveError> {
        let (face, cell) = twist_alignment(oriented);
        while !self.is(face, cell, Face::Up) {
            self.turn(Face::Up, 1)?;
        }
        Ok(())
    }

    // === Phase 7 ===

    /// Put a pair of matching corners at the back, then cycle the rest.
    pub(super) fn permute_up_corners(&mut self) -> Result<(), SolveError> {
        let cells = side_cells(HEADLIGHTS_FACE);
        for _ in 0..4 {
            if self.at(HEADLIGHTS_FACE, cells.top_left) == self.at(HEADLIGHTS_FACE, cells.top_right)
            {
                break;
            }
            self.turn(Face::Up, 1)?;
        }
        self.run(&CORNER_CYCLE)
    }

    // === Phase 8 ===

    /// Align the corners, then cycle three edges around the solved row.
    pub(super) fn permute_up_edges(&mut self) -> Result<(), SolveError> {
        let front = side_cells(Face::Front);
        while !self.is(Face::Front, front.top_left, Face::Front) {
            self.turn(Face::Up, 1)?;
        }
        if self.snapshot().is_solved() {
            return Ok(());
        }

        if !Face::SIDES.iter().any(|&side| self.top_row_solved(side)) {
            self.run(&edge_cycle(Face::Front))?;
        }

        let Some(solved) = Face::SIDES.into_iter().find(|&side| self.top_row_solved(side)) else {
            return Err(self.violation(Violation::NoSolvedRow));
        };
        self.run(&edge_cycle(solved.opposite()))
    }

    fn top_row_solved(&self, side: Face) -> bool {
        let cells = side_cells(side);
        [cells.top_left, cells.top_edge, cells.top_right]
            .iter()
            .all(|&cell| self.is(side, cell, side))
    }
}
