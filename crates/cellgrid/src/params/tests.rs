use super::*;
use crate::test_support::reference;
use serde_json::{json, Value};

fn build(v: Value) -> Result<Parameters, ParamError> {
    Parameters::from_json(v)
}

fn failed_check(v: Value) -> Option<&'static str> {
    build(v).err().and_then(|e| e.check())
}

fn failed_field(v: Value) -> Option<&'static str> {
    build(v).err().and_then(|e| e.field())
}

#[test]
fn circle_reference_derived_values() {
    let p = build(reference("circle")).unwrap();
    assert!((p.pitch_x() - 2.5).abs() < 1e-12);
    assert!((p.pitch_y() - 2.1651).abs() < 1e-4);
    assert!((p.thk_i2o() - 2.0).abs() < 1e-12);
    assert!((p.pitch_slit() - 8.3302).abs() < 1e-3);
    assert!((p.lim_slit() - 26.0).abs() < 1e-12);
    assert!((p.dia_eff() - 58.0).abs() < 1e-12);
    assert!((p.thk_outcell_x() - 2.0).abs() < 1e-12);
    // wide outcell: chamfer taken from the wall thickness
    let (cx, cy) = p.chamfer();
    assert!((cy - 0.125).abs() < 1e-12);
    assert!((cx - 0.125 / (30f64).to_radians().tan()).abs() < 1e-12);
}

#[test]
fn hexagon_reference_derived_values() {
    let p = build(reference("hexagon")).unwrap();
    assert!((p.thk_i2o() - 1.8660).abs() < 1e-4);
    assert!((p.pitch_slit() - 8.0622).abs() < 1e-4);
    assert!((p.lim_slit() - 25.979).abs() < 1e-3);
    assert!(p.incell().has_slit_variants());
}

#[test]
fn lim_slit_without_incell_limit_uses_slit_half_width() {
    let mut v = reference("circle");
    v["slit"]["num_ic_lim"] = json!(0);
    let p = build(v).unwrap();
    assert!((p.lim_slit() - (29.0 - 0.25)).abs() < 1e-12);
}

#[test]
fn tall_outcell_takes_chamfer_from_width() {
    let mut v = reference("circle");
    v["product"]["thk_wall"] = json!(1.5);
    v["product"]["thk_c2s"] = json!(1.0);
    v["outcell"]["info"]["thk_outcell"] = json!(3.5);
    v["outcell"]["info"]["thk_wall_outcell"] = json!(0.5);
    let p = build(v).unwrap();
    // width = 3.5 - 0.5 = 3.0, ratio = 3.5 / 3.0 >= 1
    assert!(p.ratio_outcell() >= 1.0);
    let (cx, cy) = p.chamfer();
    assert!((cx - 0.75).abs() < 1e-12);
    assert!((cy - 0.75 * (30f64).to_radians().tan()).abs() < 1e-12);
}

#[test]
fn square_outcell_has_no_chamfer() {
    let mut v = reference("circle");
    v["outcell"]["info"] = json!({ "shape": "square", "thk_outcell": 1.0, "thk_wall_outcell": 0.5 });
    let p = build(v).unwrap();
    assert_eq!(p.chamfer(), (0.0, 0.0));
    assert!(!p.flat_fields().contains_key("chamfer_ratio"));
}

#[test]
fn dia_outer_exact_equality_accepted_near_miss_rejected() {
    let mut exact = reference("circle");
    exact["product"]["dia_outer"] = json!(4.0);
    assert!(build(exact).is_ok());

    let mut near = reference("circle");
    near["product"]["dia_outer"] = json!(4.0 + 5e-9);
    let err = build(near).unwrap_err();
    assert_eq!(err.check(), Some("dia_outer"));
    let msg = err.to_string();
    assert!(msg.contains("dia_incell: 2"), "{msg}");
    assert!(msg.contains("thk_prod: 1"), "{msg}");

    let mut small = reference("circle");
    small["product"]["dia_outer"] = json!(3.9);
    assert_eq!(failed_check(small), Some("dia_outer"));
}

#[test]
fn dia_outer_exact_in_drawing_survives_shrinkage() {
    // 4.5 == 3.1 + 2 * 0.7 exactly; divided by 1.1 the margin is ~9e-16
    let mut v = reference("circle");
    v["shrinkage_rate"] = json!(1.1);
    v["product"]["dia_outer"] = json!(4.5);
    v["product"]["thk_prod"] = json!(0.7);
    v["incell"]["info"]["dia_incell"] = json!(3.1);
    let p = build(v.clone()).unwrap();
    assert!((p.dia_incell() - 3.1 / 1.1).abs() < 1e-12);

    v["product"]["dia_outer"] = json!(4.5 + 5e-9);
    let err = build(v).unwrap_err();
    assert_eq!(err.check(), Some("dia_outer"));
    assert!(err.to_string().contains("dia_incell: 3.1"), "{err}");
}

#[test]
fn membrane_must_leave_an_opening() {
    let mut v = reference("circle");
    v["incell"]["thk_top"] = json!(0.5);
    v["incell"]["thk_mid"] = json!(0.5);
    assert_eq!(failed_check(v), Some("eff_dia_incell"));

    let mut ok = reference("circle");
    ok["incell"]["thk_top"] = json!(0.1);
    ok["incell"]["thk_bot"] = json!(0.2);
    let p = build(ok).unwrap();
    assert!((p.eff_dia_incell() - 1.4).abs() < 1e-12);
}

#[test]
fn outcell_walls_must_leave_room() {
    let mut v = reference("circle");
    v["outcell"]["info"]["thk_wall_outcell"] = json!(2.5);
    assert_eq!(failed_check(v), Some("thk_outcell_x"));
}

#[test]
fn thk_slit_near_miss_of_outcell_rejected() {
    let mut exact = reference("circle");
    exact["slit"]["thk_slit"] = json!(1.0);
    assert!(build(exact).is_ok());

    let mut near = reference("circle");
    near["slit"]["thk_slit"] = json!(1.0 + 5e-6);
    assert_eq!(failed_check(near), Some("thk_slit_vs_outcell"));

    // chamfered side: 1.0 - 2 * 0.125
    let mut flat = reference("circle");
    flat["slit"]["thk_slit"] = json!(0.75 + 1e-6);
    assert_eq!(failed_check(flat), Some("thk_slit_vs_outcell"));
}

#[test]
fn thk_slit_crossing_incell_boundary_rejected() {
    let mut v = reference("circle");
    v["slit"]["thk_slit"] = json!(2.6);
    let err = build(v).unwrap_err();
    assert_eq!(err.check(), Some("thk_slit_vs_incell"));
    assert!(err.to_string().contains("thk_i2o: 2"));
}

#[test]
fn outcell_corner_crossing_boundary_rejected() {
    let mut v = reference("circle");
    v["product"]["thk_c2s"] = json!(0.1);
    assert_eq!(failed_check(v), Some("outcell_corner"));
}

#[test]
fn slit_spacing_must_exceed_matching_window() {
    let mut v = reference("circle");
    v["product"]["dia_outer"] = json!(1.0e6);
    assert_eq!(failed_check(v), Some("pitch_slit"));
}

#[test]
fn range_errors_name_the_field() {
    let mut v = reference("circle");
    v["slit"]["ratio_slit"] = json!(1);
    assert_eq!(failed_field(v), Some("slit.ratio_slit"));

    let mut v = reference("circle");
    v["product"]["thk_wall"] = json!(-1.0);
    assert_eq!(failed_field(v), Some("product.thk_wall"));

    let mut v = reference("circle");
    v["slit"]["num_ic_lim"] = json!(4);
    assert_eq!(failed_field(v), Some("slit.num_ic_lim"));

    let mut v = reference("circle");
    v["outcell"]["num_oc"] = json!(0);
    assert_eq!(failed_field(v), Some("outcell.num_oc"));

    let mut v = reference("circle");
    v["outcell"]["info"]["chamfer_ratio"] = json!(0.5);
    assert_eq!(failed_field(v), Some("outcell.info.chamfer_ratio"));

    let mut v = reference("circle");
    v["incell"]["thk_mid"] = json!(-0.1);
    assert_eq!(failed_field(v), Some("incell.thk_mid"));

    let mut v = reference("circle");
    v["shrinkage_rate"] = json!(0.0);
    assert_eq!(failed_field(v), Some("shrinkage_rate"));
}

#[test]
fn unsupported_shape_is_a_range_error() {
    let mut v = reference("pentagon");
    let err = build(v.clone()).unwrap_err();
    assert_eq!(err.field(), Some("incell.info.shape"));
    assert!(err.to_string().contains("pentagon"));

    v["incell"]["info"]["shape"] = json!("circle");
    v["outcell"]["info"]["shape"] = json!("round");
    assert_eq!(failed_field(v), Some("outcell.info.shape"));
}

#[test]
fn malformed_input_is_a_type_error() {
    let mut wrong_kind = reference("circle");
    wrong_kind["slit"]["ratio_slit"] = json!("3");
    assert!(matches!(build(wrong_kind), Err(ParamError::Type { .. })));

    let mut fractional = reference("circle");
    fractional["slit"]["ratio_slit"] = json!(3.5);
    assert!(matches!(build(fractional), Err(ParamError::Type { .. })));

    let mut missing = reference("circle");
    missing["product"]
        .as_object_mut()
        .unwrap()
        .remove("thk_wall");
    assert!(matches!(build(missing), Err(ParamError::Type { .. })));

    let mut typo = reference("circle");
    typo["product"]["thk_wal"] = json!(0.5);
    assert!(matches!(build(typo), Err(ParamError::Type { .. })));
}

#[test]
fn shrinkage_rate_scales_drawing_lengths() {
    let mut v = reference("circle");
    v["shrinkage_rate"] = json!(2.0);
    v["product"]["dia_outer"] = json!(120.0);
    v["product"]["thk_prod"] = json!(2.0);
    v["incell"]["info"]["dia_incell"] = json!(4.0);
    v["outcell"]["info"]["thk_outcell"] = json!(2.0);
    v["outcell"]["info"]["thk_wall_outcell"] = json!(1.0);
    let scaled = build(v).unwrap();
    let plain = build(reference("circle")).unwrap();
    assert_eq!(scaled, plain);
}

#[test]
fn try_from_raw_matches_from_json() {
    let raw: RawParameters = serde_json::from_value(reference("hexagon")).unwrap();
    assert_eq!(raw.shrinkage_rate, 1.0);
    assert_eq!(raw.outcell.num_oc, 1);
    let p = Parameters::try_from(raw).unwrap();
    assert_eq!(p, build(reference("hexagon")).unwrap());
}

#[test]
fn introspection_maps() {
    let p = build(reference("hexagon")).unwrap();
    let flat = p.flat_fields();
    assert_eq!(flat["shape_incell"], json!("hexagon"));
    assert_eq!(flat["shape_outcell"], json!("octagon"));
    assert_eq!(flat["ratio_slit"], json!(3));
    assert_eq!(flat["chamfer_ratio"], json!(0.25));
    let derived = p.derived_fields();
    for key in ["pitch_x", "pitch_y", "pitch_slit", "thk_i2o", "lim_slit", "chamfer_x"] {
        assert!(derived.contains_key(key), "missing {key}");
    }
    assert_eq!(derived["pitch_x"], json!(2.5));
}

#[test]
fn footprints_follow_role_and_shape() {
    let hex = build(reference("hexagon")).unwrap();
    assert_eq!(hex.incell_footprint(IncellRole::Interior).vertices().len(), 6);
    assert_eq!(hex.incell_footprint(IncellRole::SlitTop).vertices().len(), 7);
    assert_eq!(hex.incell_footprint(IncellRole::SlitBottom).vertices().len(), 7);
    assert_eq!(hex.outcell_footprint().vertices().len(), 8);

    let circle = build(reference("circle")).unwrap();
    assert!(matches!(
        circle.incell_footprint(IncellRole::SlitTop),
        crate::geom::Footprint::Circle { radius } if radius == 2.0
    ));
}

#[test]
fn parameters_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Parameters>();
}
