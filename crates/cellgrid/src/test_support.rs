//! Shared fixtures for unit tests.

use serde_json::{json, Value};

use crate::params::Parameters;

/// Reference run: 60 mm product, 2 mm incells, octagon outcells, three incell
/// sub-rows per slit.
pub(crate) fn reference(incell: &str) -> Value {
    json!({
        "product": {
            "dia_outer": 60.0,
            "thk_prod": 1.0,
            "ln_prod": 1000.0,
            "thk_wall": 0.5,
            "thk_c2s": 0.5
        },
        "incell": { "info": { "shape": incell, "dia_incell": 2.0 } },
        "outcell": {
            "info": { "shape": "octagon", "thk_outcell": 1.0, "thk_wall_outcell": 0.5 }
        },
        "slit": { "thk_slit": 0.5, "ratio_slit": 3, "num_ic_lim": 1 }
    })
}

pub(crate) fn reference_params(incell: &str) -> Parameters {
    Parameters::from_json(reference(incell)).unwrap()
}
