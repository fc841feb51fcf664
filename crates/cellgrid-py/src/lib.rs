//! PyO3 bindings for selected `cellgrid` functions.
//!
//! Notes
//! - Keep bindings thin and predictable; inputs and outputs are plain tuples,
//!   lists and JSON strings so the Python side can hand them to plotting code.
//! - All validation and layout logic stays in the `cellgrid` crate.

use pyo3::prelude::*;

mod common;
mod geom;
mod layout;

#[pymodule]
fn cellgrid_native(_py: Python, m: &PyModule) -> PyResult<()> {
    geom::register(m)?;
    layout::register(m)?;
    Ok(())
}
