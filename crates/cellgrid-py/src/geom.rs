//! Shape bindings for plotting callers (kept separate so `lib.rs` stays tiny).

use crate::common::{from_tuples, to_tuples};
use pyo3::prelude::*;

#[pyfunction]
pub fn hexagon(r_in: f64) -> Vec<(f64, f64)> {
    to_tuples(&cellgrid::geom::hexagon(r_in))
}

#[pyfunction]
#[pyo3(signature = (r_in, rot_deg = 0.0))]
pub fn heptagon(r_in: f64, rot_deg: f64) -> Vec<(f64, f64)> {
    to_tuples(&cellgrid::geom::heptagon(r_in, rot_deg))
}

#[pyfunction]
pub fn octagon(width: f64, height: f64, chamfer_x: f64, chamfer_y: f64) -> Vec<(f64, f64)> {
    to_tuples(&cellgrid::geom::octagon(width, height, chamfer_x, chamfer_y))
}

/// Slit band clipped by the circle; `None` when the band misses it.
#[pyfunction]
pub fn slit(radius: f64, thk_slit: f64, y: f64) -> Option<Vec<(f64, f64)>> {
    cellgrid::geom::slit(radius, thk_slit, y).map(|v| to_tuples(&v))
}

#[pyfunction]
pub fn polygon_area(vertices: Vec<(f64, f64)>) -> f64 {
    cellgrid::geom::polygon_area(&from_tuples(vertices))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(hexagon, m)?)?;
    m.add_function(wrap_pyfunction!(heptagon, m)?)?;
    m.add_function(wrap_pyfunction!(octagon, m)?)?;
    m.add_function(wrap_pyfunction!(slit, m)?)?;
    m.add_function(wrap_pyfunction!(polygon_area, m)?)?;
    Ok(())
}
