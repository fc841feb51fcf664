//! Output documents: layout JSON, drawable outlines, quadrant CSV.

use anyhow::{Context, Result};
use cellgrid::geom::{slit, Footprint, Point};
use cellgrid::report::{classify, QuadrantRow};
use cellgrid::{Layout, Parameters};
use polars::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

pub fn write_json(path: &Path, doc: &Value) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))
}

/// Parameters plus both coordinate sets.
pub fn layout_document(p: &Parameters, layout: &Layout) -> Value {
    json!({
        "input_parameters": p.flat_fields(),
        "derived_parameters": p.derived_fields(),
        "coords_incell": layout.incell,
        "coords_outcell": layout.outcell,
    })
}

fn pairs(vertices: &[Point]) -> Vec<[f64; 2]> {
    vertices.iter().map(|v| [v.x, v.y]).collect()
}

/// Placed polygons for drawing: outcells, incell openings, one slit per outcell
/// row clipped at the outer diameter, and the two product circles.
///
/// Incells are drawn as their membrane-coated opening; circle incells carry a
/// centre and radius instead of vertices.
pub fn outline_document(p: &Parameters, layout: &Layout) -> Value {
    let outcell_fp = p.outcell_footprint();
    let outcells: Vec<Value> = layout
        .outcell
        .iter()
        .map(|c| json!(pairs(&outcell_fp.placed_at(*c))))
        .collect();

    let mut incells = Vec::with_capacity(layout.incell.len());
    for (role, centers) in layout.incells_by_role() {
        let opening = p.incell().opening(role, p.eff_dia_incell());
        for c in centers {
            incells.push(match &opening {
                Footprint::Circle { radius } => {
                    json!({ "role": role, "center": [c.x, c.y], "radius": radius })
                }
                Footprint::Polygon(_) => {
                    json!({ "role": role, "polygon": pairs(&opening.placed_at(*c)) })
                }
            });
        }
    }

    // slits run through the product rim to the outer surface
    let radius_outer = 0.5 * p.product().dia_outer;
    let slits: Vec<Value> = layout
        .slit_rows()
        .into_iter()
        .filter_map(|y| slit(radius_outer, p.thk_slit(), y))
        .map(|v| json!(pairs(&v)))
        .collect();

    json!({
        "product": { "radius_outer": radius_outer, "radius_eff": 0.5 * p.dia_eff() },
        "outcells": outcells,
        "incells": incells,
        "slits": slits,
    })
}

/// Quadrant rows of outcells, then incells.
pub fn quadrant_rows(layout: &Layout) -> Vec<QuadrantRow> {
    let mut rows = classify(layout.outcell.iter(), "outcell");
    rows.extend(classify(layout.incell.iter(), "incell"));
    rows
}

pub fn quadrant_frame(rows: &[QuadrantRow]) -> PolarsResult<DataFrame> {
    let unit: Vec<&str> = rows.iter().map(|r| r.unit.as_str()).collect();
    let x: Vec<f64> = rows.iter().map(|r| r.x).collect();
    let y: Vec<f64> = rows.iter().map(|r| r.y).collect();
    let quadrant: Vec<i32> = rows.iter().map(|r| i32::from(r.quadrant)).collect();
    df!(
        "unit" => unit,
        "x" => x,
        "y" => y,
        "quadrant" => quadrant
    )
}

pub fn write_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    ensure_parent(path)?;
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))
}
