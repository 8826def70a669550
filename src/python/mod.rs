//! Python bindings for the rust-cube solver.
//!
//! # Quick Start
//!
//! ```python
//! import rust_cube
//!
//! cube = rust_cube.Cube()
//! scramble = cube.randomize(20, seed=42)
//!
//! # Solve in place and collect the moves
//! moves = rust_cube.solve(cube)
//! assert cube.is_solved
//!
//! # 54 face indices in renderer order
//! stickers = cube.stickers_numpy()
//! ```

use pyo3::prelude::*;

mod py_cube;

pub use py_cube::*;

/// rust-cube: A 3x3x3 cube model and layer-by-layer solver.
#[pymodule]
fn rust_cube(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCube>()?;
    m.add_function(wrap_pyfunction!(solve, m)?)?;

    Ok(())
}
