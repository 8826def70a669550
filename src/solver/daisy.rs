//! Phases 1 and 2: the daisy and the Down cross.
//!
//! The daisy gathers the four Down-labeled edges around the Up center.
//! Each petal is then half-turned down once its side sticker sits over
//! the matching center, which yields an aligned cross.

use crate::core::Face;
use crate::cube::RotationEngine;

use super::error::SolveError;
use super::machine::CubeSolver;
use super::tables::{
    CROSS_PETALS, PETALS_ON_DOWN_FACE, PETALS_ON_DOWN_LAYER, PETALS_ON_MIDDLE_LAYER,
    PETALS_ON_UP_LAYER,
};

impl<E: RotationEngine> CubeSolver<'_, E> {
    /// One pass over every place a petal can hide, lifting each to the Up face.
    pub(super) fn form_daisy(&mut self) -> Result<(), SolveError> {
        for &(down_cell, up_cell, face) in &PETALS_ON_DOWN_FACE {
            if self.is(Face::Down, down_cell, Face::Down) {
                self.clear_petal_spot(up_cell)?;
                self.turn(face, 2)?;
            }
        }

        for &(face, cell, up_cell, helper) in &PETALS_ON_DOWN_LAYER {
            if self.is(face, cell, Face::Down) {
                self.clear_petal_spot(up_cell)?;
                self.turn(face, 1)?;
                self.turn(helper, -1)?;
                self.turn(face, -1)?;
            }
        }

        for &(face, cell, up_cell, turned, count) in &PETALS_ON_MIDDLE_LAYER {
            if self.is(face, cell, Face::Down) {
                self.clear_petal_spot(up_cell)?;
                self.turn(turned, count)?;
            }
        }

        for &(face, cell, up_cell, lifter) in &PETALS_ON_UP_LAYER {
            if self.is(face, cell, Face::Down) {
                self.turn(face, 1)?;
                self.clear_petal_spot(up_cell)?;
                self.turn(lifter, 1)?;
            }
        }

        Ok(())
    }

    /// Four rounds of dropping matched petals, turning Up between rounds.
    pub(super) fn form_cross(&mut self) -> Result<(), SolveError> {
        for _ in 0..4 {
            for &(up_cell, side_cell, face) in &CROSS_PETALS {
                if self.is(Face::Up, up_cell, Face::Down) && self.is(face, side_cell, face) {
                    self.turn(face, 2)?;
                }
            }
            self.turn(Face::Up, 1)?;
        }
        Ok(())
    }

    /// Turn Up until `up_cell` no longer holds a petal.
    fn clear_petal_spot(&mut self, up_cell: usize) -> Result<(), SolveError> {
        while self.is(Face::Up, up_cell, Face::Down) {
            self.turn(Face::Up, 1)?;
        }
        Ok(())
    }
}
