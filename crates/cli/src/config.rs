//! Parameter files: `*.toml` or `*.json`, both funnelled through
//! `serde_json::Value` into `Parameters::from_json`.

use anyhow::{bail, Context, Result};
use cellgrid::Parameters;
use serde_json::Value;
use std::fs;
use std::path::Path;

pub fn read_value(path: &Path) -> Result<Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => {
            toml::from_str(&text).with_context(|| format!("parsing TOML {}", path.display()))
        }
        Some("json") => {
            serde_json::from_str(&text).with_context(|| format!("parsing JSON {}", path.display()))
        }
        other => bail!(
            "unsupported config extension {:?} for {} (expected .toml or .json)",
            other.unwrap_or(""),
            path.display()
        ),
    }
}

/// Read and validate a parameter file.
pub fn load(path: &Path) -> Result<Parameters> {
    let value = read_value(path)?;
    let params = Parameters::from_json(value)
        .with_context(|| format!("invalid parameters in {}", path.display()))?;
    tracing::info!(
        config = %path.display(),
        incell = params.incell().name(),
        outcell = params.outcell().name(),
        "parameters loaded"
    );
    Ok(params)
}
