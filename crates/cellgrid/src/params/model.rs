//! Validated parameter set and its derived quantities.
//!
//! `Parameters` is only obtainable through validation and is never mutated.
//! Every derived quantity is a pure function of the stored primaries.

use std::f64::consts::{FRAC_PI_3, FRAC_PI_6};

use serde_json::{json, Map, Value};

use super::raw::Product;
use super::shape::{IncellRole, IncellShape, OutcellShape};
use crate::geom::{Circle, Footprint};

/// Membrane layers coated on the incell wall (each may be zero).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Membrane {
    pub thk_top: f64,
    pub thk_mid: f64,
    pub thk_bot: f64,
}

impl Membrane {
    pub fn total(&self) -> f64 {
        self.thk_top + self.thk_mid + self.thk_bot
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    pub(super) product: Product,
    pub(super) incell: IncellShape,
    pub(super) membrane: Membrane,
    pub(super) outcell: OutcellShape,
    pub(super) num_oc: u32,
    pub(super) thk_slit: f64,
    pub(super) ratio_slit: u32,
    pub(super) num_ic_lim: u32,
}

impl Parameters {
    // --- primaries ---

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn incell(&self) -> &IncellShape {
        &self.incell
    }

    pub fn membrane(&self) -> &Membrane {
        &self.membrane
    }

    pub fn outcell(&self) -> &OutcellShape {
        &self.outcell
    }

    pub fn num_oc(&self) -> u32 {
        self.num_oc
    }

    pub fn thk_slit(&self) -> f64 {
        self.thk_slit
    }

    pub fn ratio_slit(&self) -> u32 {
        self.ratio_slit
    }

    pub fn num_ic_lim(&self) -> u32 {
        self.num_ic_lim
    }

    pub fn dia_incell(&self) -> f64 {
        self.incell.dia_incell()
    }

    pub fn thk_outcell(&self) -> f64 {
        self.outcell.thk_outcell()
    }

    // --- derived ---

    /// Diameter inside the solid rim; every footprint must fit strictly inside.
    pub fn dia_eff(&self) -> f64 {
        self.product.dia_outer - 2.0 * self.product.thk_prod
    }

    /// Open incell diameter after membrane coating.
    pub fn eff_dia_incell(&self) -> f64 {
        self.dia_incell() - 2.0 * self.membrane.total()
    }

    pub fn pitch_x(&self) -> f64 {
        self.dia_incell() + self.product.thk_wall
    }

    pub fn pitch_y(&self) -> f64 {
        self.pitch_x() * FRAC_PI_3.sin()
    }

    /// Offset between an outcell row and the first incell sub-row next to it.
    pub fn thk_i2o(&self) -> f64 {
        0.5 * self.thk_outcell() + self.product.thk_c2s + self.incell.slit_side_extent()
    }

    /// Y spacing between consecutive outcell (slit) rows.
    pub fn pitch_slit(&self) -> f64 {
        2.0 * self.thk_i2o() + f64::from(self.ratio_slit - 1) * self.pitch_y()
    }

    /// Y extent up to which slit bands are generated.
    ///
    /// With `num_ic_lim > 0` the outermost band keeps room for at least
    /// `num_ic_lim` incell sub-rows before the boundary.
    pub fn lim_slit(&self) -> f64 {
        let half = 0.5 * self.dia_eff();
        if self.num_ic_lim == 0 {
            return half - 0.5 * self.thk_slit;
        }
        let rows = f64::from(self.num_ic_lim - 1) * self.pitch_y();
        half - rows - self.thk_i2o() - self.incell.end_extent()
    }

    /// Outcell width when `num_oc` outcells share one `pitch_x`.
    pub fn thk_outcell_x(&self) -> f64 {
        let n = f64::from(self.num_oc);
        (self.pitch_x() - n * self.outcell.thk_wall_outcell()) / n
    }

    pub fn ratio_outcell(&self) -> f64 {
        self.thk_outcell() / self.thk_outcell_x()
    }

    /// `(chamfer_x, chamfer_y)`; zero for square outcells.
    pub fn chamfer(&self) -> (f64, f64) {
        self.outcell.chamfer(self.thk_outcell_x())
    }

    /// Incell/outcell boundary line `y = -x/√3 + b` in the first quadrant of an
    /// outcell centred at the origin.
    pub fn line_i2o(&self, x: f64) -> f64 {
        let b = self.thk_i2o() - 0.5 * self.pitch_x() * FRAC_PI_6.tan();
        -x / 3f64.sqrt() + b
    }

    // --- geometry ---

    pub fn boundary(&self) -> Circle {
        Circle::from_diameter(self.dia_eff())
    }

    pub fn outcell_footprint(&self) -> Footprint {
        self.outcell.footprint(self.thk_outcell_x())
    }

    pub fn incell_footprint(&self, role: IncellRole) -> Footprint {
        self.incell.footprint(role)
    }

    // --- introspection ---

    /// Primary fields as a flat name → value map (product units).
    pub fn flat_fields(&self) -> Map<String, Value> {
        let p = &self.product;
        let mut m = Map::new();
        m.insert("dia_outer".into(), json!(p.dia_outer));
        m.insert("thk_prod".into(), json!(p.thk_prod));
        m.insert("ln_prod".into(), json!(p.ln_prod));
        m.insert("thk_wall".into(), json!(p.thk_wall));
        m.insert("thk_c2s".into(), json!(p.thk_c2s));
        m.insert("offset_x".into(), json!(p.offset_x));
        m.insert("offset_y".into(), json!(p.offset_y));
        m.insert("shape_incell".into(), json!(self.incell.name()));
        m.insert("dia_incell".into(), json!(self.dia_incell()));
        m.insert("thk_top".into(), json!(self.membrane.thk_top));
        m.insert("thk_mid".into(), json!(self.membrane.thk_mid));
        m.insert("thk_bot".into(), json!(self.membrane.thk_bot));
        m.insert("shape_outcell".into(), json!(self.outcell.name()));
        m.insert("thk_outcell".into(), json!(self.thk_outcell()));
        m.insert(
            "thk_wall_outcell".into(),
            json!(self.outcell.thk_wall_outcell()),
        );
        if let OutcellShape::Octagon {
            chamfer_ratio,
            chamfer_angle_deg,
            ..
        } = self.outcell
        {
            m.insert("chamfer_ratio".into(), json!(chamfer_ratio));
            m.insert("chamfer_angle_deg".into(), json!(chamfer_angle_deg));
        }
        m.insert("num_oc".into(), json!(self.num_oc));
        m.insert("thk_slit".into(), json!(self.thk_slit));
        m.insert("ratio_slit".into(), json!(self.ratio_slit));
        m.insert("num_ic_lim".into(), json!(self.num_ic_lim));
        m
    }

    /// Derived quantities as a flat name → value map.
    pub fn derived_fields(&self) -> Map<String, Value> {
        let (chamfer_x, chamfer_y) = self.chamfer();
        let mut m = Map::new();
        m.insert("dia_eff".into(), json!(self.dia_eff()));
        m.insert("eff_dia_incell".into(), json!(self.eff_dia_incell()));
        m.insert("pitch_x".into(), json!(self.pitch_x()));
        m.insert("pitch_y".into(), json!(self.pitch_y()));
        m.insert("pitch_slit".into(), json!(self.pitch_slit()));
        m.insert("thk_i2o".into(), json!(self.thk_i2o()));
        m.insert("lim_slit".into(), json!(self.lim_slit()));
        m.insert("thk_outcell_x".into(), json!(self.thk_outcell_x()));
        m.insert("ratio_outcell".into(), json!(self.ratio_outcell()));
        m.insert("chamfer_x".into(), json!(chamfer_x));
        m.insert("chamfer_y".into(), json!(chamfer_y));
        m
    }
}
