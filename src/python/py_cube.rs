//! Cube and solver bindings for Python.

use std::collections::HashMap;

use numpy::PyArray1;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{parse_sequence, CubeRng, Face, ScrambleConfig};
use crate::cube::{sticker_layout, Cube, CubeState};
use crate::solver::CubeSolver;

fn parse_face(letter: &str) -> PyResult<Face> {
    let mut chars = letter.chars();
    match (chars.next().and_then(Face::from_char), chars.next()) {
        (Some(face), None) => Ok(face),
        _ => Err(PyValueError::new_err(format!("unknown face: {:?}", letter))),
    }
}

/// Python wrapper for Cube.
#[pyclass(name = "Cube")]
#[derive(Clone, Debug)]
pub struct PyCube(pub Cube);

#[pymethods]
impl PyCube {
    /// Create a solved cube.
    #[new]
    fn new() -> Self {
        Self(Cube::new())
    }

    /// Restore the solved state.
    fn reset(&mut self) {
        self.0.reset();
    }

    /// Turn a face ("F", "B", "R", "L", "U", "D") by `count` quarter turns.
    fn turn(&mut self, face: &str, count: i32) -> PyResult<()> {
        self.0.turn(parse_face(face)?, count);
        Ok(())
    }

    /// Apply a sequence in standard notation, e.g. "R U R' U'".
    fn apply(&mut self, notation: &str) -> PyResult<()> {
        let moves = parse_sequence(notation).map_err(|e| PyValueError::new_err(e.to_string()))?;
        self.0.apply_all(&moves);
        Ok(())
    }

    /// Apply `count` random turns, seeded when `seed` is given.
    /// Returns the turns in notation.
    #[pyo3(signature = (count, seed=None))]
    fn randomize(&mut self, count: usize, seed: Option<u64>) -> Vec<String> {
        let moves = match seed {
            Some(seed) => self.0.scramble(&ScrambleConfig::new(seed, count)),
            None => self.0.randomize_with(&mut CubeRng::from_entropy(), count),
        };
        moves.iter().map(ToString::to_string).collect()
    }

    /// Check if every face shows only its own label.
    #[getter]
    fn is_solved(&self) -> bool {
        self.0.is_solved()
    }

    /// Grids per face letter, each a row-major list of 9 labels.
    fn serialize(&self) -> HashMap<String, Vec<String>> {
        self.0
            .serialize()
            .iter()
            .map(|(face, grid)| {
                let cells = grid.0.iter().map(ToString::to_string).collect();
                (face.to_string(), cells)
            })
            .collect()
    }

    /// The 54 stickers in renderer order as face indices.
    fn stickers_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        let stickers = sticker_layout(&self.0.serialize()).map(|face| face.index() as u8);
        PyArray1::from_slice_bound(py, &stickers)
    }

    /// Compact binary snapshot of the state.
    fn encode(&self) -> PyResult<Vec<u8>> {
        self.0
            .state()
            .encode()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Restore a cube from `encode()` output.
    #[staticmethod]
    fn decode(bytes: Vec<u8>) -> PyResult<Self> {
        let state = CubeState::decode(&bytes).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self(Cube::from_state(state)))
    }

    fn __repr__(&self) -> String {
        format!("Cube(solved={})", self.0.is_solved())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Solve `cube` in place and return the moves as (face, count) pairs.
#[pyfunction]
pub fn solve(cube: &mut PyCube) -> PyResult<Vec<(String, i32)>> {
    let mut solver = CubeSolver::new(&mut cube.0);
    solver
        .solve()
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
    Ok(solver
        .into_history()
        .into_vec()
        .into_iter()
        .map(|mv| (mv.face.to_string(), mv.count))
        .collect())
}
