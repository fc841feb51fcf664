//! Construction-time validation: type, range, then cross-field consistency.
//!
//! Consistency checks compare lengths with [`Tolerance::DEFAULT`]. Several of
//! them reject *near misses*: two lengths that are close but not bit-equal.
//! Exact equality is accepted.

use serde_json::Value;
use std::f64::consts::FRAC_PI_6;

use super::error::ParamError;
use super::model::{Membrane, Parameters};
use super::raw::{Product, RawParameters};
use super::shape::{IncellShape, OutcellShape};
use crate::geom::Tolerance;

/// Validate raw input and build an immutable [`Parameters`].
pub fn validate_and_build_parameters(raw: RawParameters) -> Result<Parameters, ParamError> {
    let drawing = OuterDims {
        dia_outer: raw.product.dia_outer,
        dia_incell: raw.incell.info.dia_incell(),
        thk_prod: raw.product.thk_prod,
    };
    let params = build_in_range(raw)?;
    check_consistency(&params, drawing, Tolerance::DEFAULT)?;
    tracing::debug!(
        incell = params.incell().name(),
        outcell = params.outcell().name(),
        pitch_x = params.pitch_x(),
        pitch_slit = params.pitch_slit(),
        thk_i2o = params.thk_i2o(),
        lim_slit = params.lim_slit(),
        "parameters validated"
    );
    Ok(params)
}

impl Parameters {
    /// Build from a plain key/value structure (e.g. parsed TOML or JSON).
    ///
    /// Unsupported shape names are range errors; any other structural mismatch
    /// (missing field, wrong kind, unknown key) is a type error.
    pub fn from_json(value: Value) -> Result<Self, ParamError> {
        check_shape_tag(&value, "/incell/info/shape", "incell.info.shape", &IncellShape::NAMES)?;
        check_shape_tag(&value, "/outcell/info/shape", "outcell.info.shape", &OutcellShape::NAMES)?;
        let raw: RawParameters = serde_json::from_value(value).map_err(|e| ParamError::Type {
            message: e.to_string(),
        })?;
        validate_and_build_parameters(raw)
    }
}

impl TryFrom<RawParameters> for Parameters {
    type Error = ParamError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        validate_and_build_parameters(raw)
    }
}

fn check_shape_tag(
    value: &Value,
    pointer: &str,
    field: &'static str,
    names: &[&str],
) -> Result<(), ParamError> {
    match value.pointer(pointer) {
        Some(Value::String(s)) if !names.contains(&s.as_str()) => Err(ParamError::range(
            field,
            s,
            "unsupported shape",
        )),
        _ => Ok(()),
    }
}

// --- range ---

fn positive(field: &'static str, v: f64) -> Result<f64, ParamError> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(ParamError::range(field, v, "must be finite and > 0"))
    }
}

fn non_negative(field: &'static str, v: f64) -> Result<f64, ParamError> {
    if v.is_finite() && v >= 0.0 {
        Ok(v)
    } else {
        Err(ParamError::range(field, v, "must be finite and >= 0"))
    }
}

fn count(field: &'static str, v: i64, min: i64, requirement: &'static str) -> Result<u32, ParamError> {
    if v < min {
        return Err(ParamError::range(field, v, requirement));
    }
    u32::try_from(v).map_err(|_| ParamError::range(field, v, "too large"))
}

fn build_in_range(raw: RawParameters) -> Result<Parameters, ParamError> {
    let scale = positive("shrinkage_rate", raw.shrinkage_rate)?;

    let p = raw.product;
    let product = Product {
        dia_outer: positive("product.dia_outer", p.dia_outer / scale)?,
        thk_prod: positive("product.thk_prod", p.thk_prod / scale)?,
        ln_prod: positive("product.ln_prod", p.ln_prod)?,
        thk_wall: positive("product.thk_wall", p.thk_wall)?,
        thk_c2s: positive("product.thk_c2s", p.thk_c2s)?,
        offset_x: p.offset_x,
        offset_y: p.offset_y,
    };

    let dia_incell = positive("incell.info.dia_incell", raw.incell.info.dia_incell() / scale)?;
    let incell = raw.incell.info.with_dia(dia_incell);
    let membrane = Membrane {
        thk_top: non_negative("incell.thk_top", raw.incell.thk_top)?,
        thk_mid: non_negative("incell.thk_mid", raw.incell.thk_mid)?,
        thk_bot: non_negative("incell.thk_bot", raw.incell.thk_bot)?,
    };

    let outcell = raw.outcell.info.scaled(scale);
    positive("outcell.info.thk_outcell", outcell.thk_outcell())?;
    positive("outcell.info.thk_wall_outcell", outcell.thk_wall_outcell())?;
    if let OutcellShape::Octagon {
        chamfer_ratio,
        chamfer_angle_deg,
        ..
    } = outcell
    {
        if !(0.0..0.5).contains(&chamfer_ratio) {
            return Err(ParamError::range(
                "outcell.info.chamfer_ratio",
                chamfer_ratio,
                "must be in [0, 0.5)",
            ));
        }
        if !(chamfer_angle_deg > 0.0 && chamfer_angle_deg < 90.0) {
            return Err(ParamError::range(
                "outcell.info.chamfer_angle_deg",
                chamfer_angle_deg,
                "must be in (0, 90)",
            ));
        }
    }
    let num_oc = count("outcell.num_oc", raw.outcell.num_oc, 1, "must be >= 1")?;

    let thk_slit = positive("slit.thk_slit", raw.slit.thk_slit)?;
    let ratio_slit = count("slit.ratio_slit", raw.slit.ratio_slit, 2, "must be >= 2")?;
    let num_ic_lim = count("slit.num_ic_lim", raw.slit.num_ic_lim, 0, "must be >= 0")?;
    if num_ic_lim > ratio_slit {
        return Err(ParamError::range(
            "slit.num_ic_lim",
            num_ic_lim,
            "must not exceed ratio_slit",
        ));
    }

    Ok(Parameters {
        product,
        incell,
        membrane,
        outcell,
        num_oc,
        thk_slit,
        ratio_slit,
        num_ic_lim,
    })
}

// --- consistency ---

/// Lengths entering the `dia_outer` check, in drawing or product units.
#[derive(Clone, Copy, Debug)]
struct OuterDims {
    dia_outer: f64,
    dia_incell: f64,
    thk_prod: f64,
}

impl OuterDims {
    fn of(p: &Parameters) -> Self {
        Self {
            dia_outer: p.product().dia_outer,
            dia_incell: p.dia_incell(),
            thk_prod: p.product().thk_prod,
        }
    }

    fn margin(self) -> f64 {
        self.dia_outer - (self.dia_incell + 2.0 * self.thk_prod)
    }
}

fn check_consistency(p: &Parameters, drawing: OuterDims, tol: Tolerance) -> Result<(), ParamError> {
    check_eff_dia_incell(p, tol)?;
    // An exact fit in the drawing stays exact; shrinkage scaling may leave a
    // rounding residual in product units.
    check_dia_outer(drawing, tol)?;
    if drawing.margin() != 0.0 {
        check_dia_outer(OuterDims::of(p), tol)?;
    }
    check_outcell_width(p)?;
    check_slit_vs_outcell(p, tol)?;
    check_slit_vs_incell(p, tol)?;
    check_outcell_corner(p)?;
    check_slit_spacing(p, tol)?;
    Ok(())
}

fn check_eff_dia_incell(p: &Parameters, tol: Tolerance) -> Result<(), ParamError> {
    let v = p.eff_dia_incell();
    if v < 0.0 || tol.is_close(v, 0.0) {
        return Err(ParamError::consistency(
            "eff_dia_incell",
            "'dia_incell' must be greater than 2*(thk_top + thk_mid + thk_bot)",
            &[
                ("dia_incell", p.dia_incell()),
                ("thk_top", p.membrane().thk_top),
                ("thk_mid", p.membrane().thk_mid),
                ("thk_bot", p.membrane().thk_bot),
            ],
        ));
    }
    Ok(())
}

fn check_dia_outer(dims: OuterDims, tol: Tolerance) -> Result<(), ParamError> {
    let v = dims.margin();
    if v < 0.0 || tol.is_near_miss(v, 0.0) {
        return Err(ParamError::consistency(
            "dia_outer",
            "'dia_outer' must exceed dia_incell + 2*thk_prod",
            &[
                ("dia_outer", dims.dia_outer),
                ("dia_incell", dims.dia_incell),
                ("thk_prod", dims.thk_prod),
            ],
        ));
    }
    Ok(())
}

fn check_outcell_width(p: &Parameters) -> Result<(), ParamError> {
    if p.thk_outcell_x() <= 0.0 {
        return Err(ParamError::consistency(
            "thk_outcell_x",
            "outcell walls leave no room for the outcell within one pitch",
            &[
                ("pitch_x", p.pitch_x()),
                ("num_oc", f64::from(p.num_oc())),
                ("thk_wall_outcell", p.outcell().thk_wall_outcell()),
            ],
        ));
    }
    Ok(())
}

fn check_slit_vs_outcell(p: &Parameters, tol: Tolerance) -> Result<(), ParamError> {
    let thk_slit = p.thk_slit();
    let thk_outcell = p.thk_outcell();
    if tol.is_near_miss(thk_slit, thk_outcell) {
        return Err(ParamError::consistency(
            "thk_slit_vs_outcell",
            "'thk_slit' is close to 'thk_outcell' but does not match",
            &[("thk_slit", thk_slit), ("thk_outcell", thk_outcell)],
        ));
    }
    let (_, chamfer_y) = p.chamfer();
    let flat = thk_outcell - 2.0 * chamfer_y;
    if tol.is_near_miss(thk_slit, flat) {
        return Err(ParamError::consistency(
            "thk_slit_vs_outcell",
            "'thk_slit' is close to the chamfered outcell side but does not match",
            &[
                ("thk_slit", thk_slit),
                ("thk_outcell", thk_outcell),
                ("chamfer_y", chamfer_y),
            ],
        ));
    }
    Ok(())
}

fn check_slit_vs_incell(p: &Parameters, tol: Tolerance) -> Result<(), ParamError> {
    let b = p.line_i2o(0.0);
    let half = 0.5 * p.thk_slit();
    if half >= b || tol.is_close(half, b) {
        return Err(ParamError::consistency(
            "thk_slit_vs_incell",
            "'thk_slit' is too large: the slit crosses the incell/outcell boundary",
            &[
                ("thk_slit", p.thk_slit()),
                ("thk_i2o", p.thk_i2o()),
                ("pitch_x", p.pitch_x()),
                ("tan_30", FRAC_PI_6.tan()),
            ],
        ));
    }
    Ok(())
}

fn check_outcell_corner(p: &Parameters) -> Result<(), ParamError> {
    let (chamfer_x, _) = p.chamfer();
    let x_corner = 0.5 * p.thk_outcell_x() - chamfer_x;
    if p.line_i2o(x_corner) < 0.5 * p.thk_outcell() {
        return Err(ParamError::consistency(
            "outcell_corner",
            "'thk_outcell' is too large: the outcell corner crosses the incell/outcell boundary",
            &[
                ("thk_outcell", p.thk_outcell()),
                ("thk_outcell_x", p.thk_outcell_x()),
                ("chamfer_x", chamfer_x),
                ("pitch_x", p.pitch_x()),
                ("thk_i2o", p.thk_i2o()),
            ],
        ));
    }
    Ok(())
}

/// The gap between the last incell sub-row of a band and the first of the next
/// must stay wider than the y-matching window of slit regrouping, at the
/// largest |y| a candidate can reach. Otherwise one row could be classified as
/// both above and below a slit.
fn check_slit_spacing(p: &Parameters, tol: Tolerance) -> Result<(), ParamError> {
    let gap = p.pitch_slit() - 2.0 * p.thk_i2o();
    let y_reach = 0.5 * p.product().dia_outer + 3.0 * p.pitch_slit();
    let window = tol.abs + tol.rel * y_reach;
    if gap <= 2.0 * window {
        return Err(ParamError::consistency(
            "pitch_slit",
            "slit spacing leaves no distinct rows between adjacent slits",
            &[
                ("pitch_slit", p.pitch_slit()),
                ("thk_i2o", p.thk_i2o()),
                ("pitch_y", p.pitch_y()),
                ("ratio_slit", f64::from(p.ratio_slit())),
            ],
        ));
    }
    Ok(())
}
