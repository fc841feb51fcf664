use super::*;
use crate::geom::{heptagon, hexagon, polygon_area};
use crate::layout::generate_layout;
use crate::test_support::reference_params;
use nalgebra::vector;
use std::f64::consts::PI;

#[test]
fn quadrant_rows_follow_class_order() {
    let coords = vec![
        vector![1.0, 1.0],
        vector![0.0, 3.0],
        vector![-2.0, 0.0],
        vector![2.0, 0.0],
        vector![1.0, -1.0],
        vector![0.0, 0.0],
        vector![-0.0005, 2.0],
    ];
    let rows = classify(&coords, "outcell");
    let got: Vec<(f64, f64, u8)> = rows.iter().map(|r| (r.x, r.y, r.quadrant)).collect();
    assert_eq!(
        got,
        vec![
            (0.0, 0.0, 1),
            (2.0, 0.0, 1),
            (2.0, 0.0, 2),
            (0.0, 3.0, 1),
            (0.0, 3.0, 4),
            (-0.0005, 2.0, 1),
            (-0.0005, 2.0, 4),
            (1.0, 1.0, 1),
            (1.0, 1.0, 2),
            (1.0, 1.0, 3),
            (1.0, 1.0, 4),
        ]
    );
    assert!(rows.iter().all(|r| r.unit == "outcell"));
}

#[test]
fn quadrant_rows_cover_a_symmetric_layout() {
    let layout = generate_layout(&reference_params("circle"));
    let rows = classify(layout.outcell.iter(), "outcell");
    // one row per outcell of the full layout
    assert_eq!(rows.len(), layout.outcell.len());
    assert!(rows.iter().any(|r| r.x == 0.0 && r.y == 0.0 && r.quadrant == 1));
}

#[test]
fn circle_summary_uses_effective_diameter() {
    let p = reference_params("circle");
    let layout = generate_layout(&p);
    let s = summarize(&p, &layout);
    let n = layout.incell.len() as f64;
    assert_eq!(s.n_incell, layout.incell.len());
    assert_eq!(s.n_outcell, layout.outcell.len());
    assert_eq!(s.n_slit, 7);
    assert!((s.area_incell - n * PI).abs() < 1e-9);
    assert!((s.area_membrane - n * 2.0 * PI * 1000.0).abs() < 1e-6);
    assert!((s.ratio_incell_pct - 100.0 * n / 900.0).abs() < 1e-9);
}

#[test]
fn hexagon_summary_counts_truncated_cells() {
    let p = reference_params("hexagon");
    let layout = generate_layout(&p);
    let s = summarize(&p, &layout);
    let n_hex = layout.interior().len() as f64;
    let n_hep = (layout.slit_top().len() + layout.slit_bottom().len()) as f64;
    let expected = n_hex * polygon_area(&hexagon(1.0)) + n_hep * polygon_area(&heptagon(1.0, 0.0));
    assert!((s.area_incell - expected).abs() < 1e-9);
    assert!(s.area_incell < layout.incell.len() as f64 * polygon_area(&hexagon(1.0)));
    assert!(s.ratio_incell_pct > 0.0 && s.ratio_incell_pct < 100.0);
}

#[test]
fn summary_serializes_flat() {
    let p = reference_params("circle");
    let s = summarize(&p, &generate_layout(&p));
    let v = serde_json::to_value(&s).unwrap();
    for key in ["n_incell", "n_outcell", "n_slit", "area_incell", "area_membrane", "ratio_incell_pct"] {
        assert!(v.get(key).is_some(), "missing {key}");
    }
}
