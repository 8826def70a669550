//! Phase 3: the Down-layer corners.
//!
//! Corners are dropped in with three-move triggers. Down stickers that
//! end up facing sideways in the Down layer, or facing up from the Up
//! layer, are lifted out and dropped again. A final sweep kicks out any
//! corner sitting in the wrong slot, and the whole thing repeats until
//! nothing moves.

use crate::core::Face;
use crate::cube::RotationEngine;

use super::error::SolveError;
use super::machine::CubeSolver;
use super::tables::{
    trigger, Hand, CORNER_SLOTS, CORNER_TRIGGERS, STUCK_CORNERS, UP_FACING_CORNERS,
};

impl<E: RotationEngine> CubeSolver<'_, E> {
    pub(super) fn solve_first_layer(&mut self) -> Result<(), SolveError> {
        loop {
            self.seat_corners()?;

            let mut evicted = false;
            for &(face, cell, other, other_cell) in &CORNER_SLOTS {
                if !self.is(face, cell, face) || !self.is(other, other_cell, other) {
                    evicted = true;
                    self.run(&trigger(face, Hand::Right))?;
                }
            }
            if !evicted {
                return Ok(());
            }
        }
    }

    /// Drop corners, freeing stuck and up-facing ones, until none move.
    fn seat_corners(&mut self) -> Result<(), SolveError> {
        loop {
            self.drop_and_free_corners()?;

            let mut lifted = false;
            for _ in 0..4 {
                for &(up_cell, down_cell, face) in &UP_FACING_CORNERS {
                    if self.is(Face::Up, up_cell, Face::Down)
                        && !self.is(Face::Down, down_cell, Face::Down)
                    {
                        lifted = true;
                        self.turn(face, 1)?;
                        self.turn(Face::Up, 2)?;
                        self.turn(face, -1)?;
                    }
                }
                self.turn(Face::Up, 1)?;
            }
            if !lifted {
                return Ok(());
            }
        }
    }

    fn drop_and_free_corners(&mut self) -> Result<(), SolveError> {
        loop {
            self.drop_corners()?;

            let mut freed = false;
            for &(face, cell, trigger_face, hand) in &STUCK_CORNERS {
                if self.is(face, cell, Face::Down) {
                    freed = true;
                    self.run(&trigger(trigger_face, hand))?;
                }
            }
            if !freed {
                return Ok(());
            }
        }
    }

    /// Sweep the Up layer four times per round, dropping every corner
    /// whose side sticker matches the center below it.
    fn drop_corners(&mut self) -> Result<(), SolveError> {
        loop {
            let mut dropped = false;
            for _ in 0..4 {
                for &(face, cell, holder, holder_cell, hand) in &CORNER_TRIGGERS {
                    if self.is(face, cell, face) && self.is(holder, holder_cell, Face::Down) {
                        dropped = true;
                        self.run(&trigger(holder, hand))?;
                    }
                }
                self.turn(Face::Up, 1)?;
            }
            if !dropped {
                return Ok(());
            }
        }
    }
}
