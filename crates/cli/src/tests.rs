use super::*;
use polars::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::{tempdir, TempDir};

fn write_config(dir: &TempDir, shape: &str) -> PathBuf {
    let path = dir.path().join(format!("{shape}.json"));
    let doc = json!({
        "product": {
            "dia_outer": 60.0,
            "thk_prod": 1.0,
            "ln_prod": 1000.0,
            "thk_wall": 0.5,
            "thk_c2s": 0.5
        },
        "incell": { "info": { "shape": shape, "dia_incell": 2.0 } },
        "outcell": {
            "info": { "shape": "octagon", "thk_outcell": 1.0, "thk_wall_outcell": 0.5 }
        },
        "slit": { "thk_slit": 0.5, "ratio_slit": 3, "num_ic_lim": 1 }
    });
    fs::write(&path, serde_json::to_vec(&doc).unwrap()).unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
}

#[test]
fn run_writes_layout_and_provenance() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir, "circle");
    let out = dir.path().join("out/layout.json");
    run(&config, &out).unwrap();

    let doc = read_json(&out);
    let incell = doc["coords_incell"].as_array().unwrap();
    assert!(!incell.is_empty());
    assert_eq!(incell[0].as_array().unwrap().len(), 2);
    assert_eq!(doc["derived_parameters"]["pitch_x"], 2.5);
    assert_eq!(doc["input_parameters"]["shape_incell"], "circle");

    let prov = read_json(&dir.path().join("out/layout.provenance.json"));
    assert_eq!(prov["input_parameters"]["dia_outer"], 60.0);
    assert!(prov["config"].as_str().unwrap().ends_with("circle.json"));
    assert_eq!(prov["counts"]["incell"], incell.len());
    assert_eq!(prov["counts"]["slit_top"], 0);
}

#[test]
fn outline_has_one_polygon_per_cell() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir, "hexagon");
    let out = dir.path().join("outline.json");
    outline(&config, &out).unwrap();

    let p = config::load(&config).unwrap();
    let layout = generate_layout(&p);
    let doc = read_json(&out);
    assert_eq!(doc["outcells"].as_array().unwrap().len(), layout.outcell.len());
    assert_eq!(doc["incells"].as_array().unwrap().len(), layout.incell.len());
    assert_eq!(doc["slits"].as_array().unwrap().len(), layout.slit_rows().len());
    assert_eq!(doc["outcells"][0].as_array().unwrap().len(), 8);
    assert_eq!(doc["incells"][0]["role"], "interior");
    assert_eq!(doc["product"]["radius_eff"], 29.0);
}

#[test]
fn slits_reach_the_outer_diameter() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir, "hexagon");
    let out = dir.path().join("outline.json");
    outline(&config, &out).unwrap();
    let doc = read_json(&out);
    let max_x = doc["slits"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|s| s.as_array().unwrap().iter())
        .map(|v| v[0].as_f64().unwrap().abs())
        .fold(0.0, f64::max);
    assert!(max_x > 29.5, "{max_x}");
    assert!(max_x <= 30.0 + 1e-9, "{max_x}");
}

#[test]
fn circle_outline_uses_centre_and_radius() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir, "circle");
    let out = dir.path().join("outline.json");
    outline(&config, &out).unwrap();
    let doc = read_json(&out);
    assert_eq!(doc["incells"][0]["radius"], 1.0);
    assert!(doc["incells"][0].get("polygon").is_none());
}

#[test]
fn quadrant_csv_has_expected_columns() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir, "circle");
    let out = dir.path().join("quadrant.csv");
    quadrant(&config, &out).unwrap();

    let df = LazyCsvReader::new(&out).finish().unwrap().collect().unwrap();
    for name in ["unit", "x", "y", "quadrant"] {
        assert!(df.column(name).is_ok(), "missing column {name}");
    }
    let layout = generate_layout(&config::load(&config).unwrap());
    assert_eq!(df.height(), export::quadrant_rows(&layout).len());
    assert_eq!(df.height(), layout.outcell.len() + layout.incell.len());
}

#[test]
fn check_and_report_accept_valid_config() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir, "hexagon");
    check(&config).unwrap();
    report(&config).unwrap();
}

#[test]
fn invalid_config_fails_before_writing() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("bad.json");
    fs::write(&config, r#"{"product": {"dia_outer": 60.0}}"#).unwrap();
    let out = dir.path().join("layout.json");
    assert!(run(&config, &out).is_err());
    assert!(!out.exists());
}
