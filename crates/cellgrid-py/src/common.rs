use cellgrid::geom::Point;
use cellgrid::Parameters;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Parse a JSON parameter document and validate it.
pub fn params_from_json(config_json: &str) -> PyResult<Parameters> {
    let value: serde_json::Value = serde_json::from_str(config_json)
        .map_err(|err| PyValueError::new_err(format!("invalid JSON: {err}")))?;
    Parameters::from_json(value).map_err(|err| PyValueError::new_err(err.to_string()))
}

pub fn to_tuples(points: &[Point]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.x, p.y)).collect()
}

pub fn from_tuples(points: Vec<(f64, f64)>) -> Vec<Point> {
    points.into_iter().map(|(x, y)| Point::new(x, y)).collect()
}
