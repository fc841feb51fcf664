//! `<stem>.provenance.json` sidecars for layout runs.

use anyhow::{Context, Result};
use cellgrid::{Layout, Parameters};
use serde_json::{json, Map, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a layout run consumed and produced.
pub struct Payload {
    pub config: PathBuf,
    pub input: Map<String, Value>,
    pub derived: Map<String, Value>,
    pub counts: Value,
}

impl Payload {
    pub fn new(config: &Path, p: &Parameters, layout: &Layout) -> Self {
        Self {
            config: config.to_path_buf(),
            input: p.flat_fields(),
            derived: p.derived_fields(),
            counts: json!({
                "incell": layout.incell.len(),
                "interior": layout.interior().len(),
                "slit_top": layout.slit_top().len(),
                "slit_bottom": layout.slit_bottom().len(),
                "outcell": layout.outcell.len(),
                "slit_rows": layout.slit_rows().len(),
            }),
        }
    }
}

/// `layout.json` -> `layout.provenance.json`, next to the artifact.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, payload: Payload) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": code_rev(),
        "version": cellgrid::VERSION,
        "callsite": format!("{}:{}", callsite.file(), callsite.line()),
        "config": payload.config.display().to_string(),
        "input_parameters": payload.input,
        "derived_parameters": payload.derived,
        "counts": payload.counts,
        "outputs": [artifact.display().to_string()],
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance written");
    Ok(path)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .filter(|rev| !rev.is_empty())
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|rev| !rev.is_empty()))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout).ok().map(|s| s.trim().to_owned())
}
