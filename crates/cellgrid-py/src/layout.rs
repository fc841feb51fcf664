//! Layout bindings: validation errors surface as `ValueError`.

use crate::common::{params_from_json, to_tuples};
use pyo3::prelude::*;
use std::collections::HashMap;

type Coords = Vec<(f64, f64)>;

/// `(incell, outcell)` centres for a JSON parameter document.
#[pyfunction]
pub fn generate_layout(config_json: &str) -> PyResult<(Coords, Coords)> {
    let params = params_from_json(config_json)?;
    let layout = cellgrid::generate_layout(&params);
    Ok((
        to_tuples(layout.incell.as_slice()),
        to_tuples(layout.outcell.as_slice()),
    ))
}

/// Derived quantities (pitches, slit spacing, chamfers) by name.
#[pyfunction]
pub fn derived_parameters(config_json: &str) -> PyResult<HashMap<String, f64>> {
    let params = params_from_json(config_json)?;
    Ok(params
        .derived_fields()
        .into_iter()
        .filter_map(|(k, v)| v.as_f64().map(|v| (k, v)))
        .collect())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate_layout, m)?)?;
    m.add_function(wrap_pyfunction!(derived_parameters, m)?)?;
    Ok(())
}
