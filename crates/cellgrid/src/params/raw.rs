//! Unvalidated parameter input, as supplied by a configuration loader.
//!
//! Layout mirrors the configuration file:
//!
//! ```toml
//! shrinkage_rate = 1.0
//!
//! [product]
//! dia_outer = 60.0
//! thk_prod = 1.0
//! ln_prod = 1000.0
//! thk_wall = 0.5
//! thk_c2s = 0.5
//! offset_x = false
//! offset_y = false
//!
//! [incell]
//! thk_top = 0.0
//! thk_mid = 0.0
//! info = { shape = "circle", dia_incell = 2.0 }
//!
//! [outcell]
//! num_oc = 1
//! info = { shape = "octagon", thk_outcell = 1.0, thk_wall_outcell = 0.5 }
//!
//! [slit]
//! thk_slit = 0.5
//! ratio_slit = 3
//! num_ic_lim = 1
//! ```

use serde::{Deserialize, Serialize};

use super::shape::{IncellShape, OutcellShape};

fn default_shrinkage_rate() -> f64 {
    1.0
}

fn default_num_oc() -> i64 {
    1
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawParameters {
    /// Drawing-to-product scale; lengths of the drawing are divided by it.
    #[serde(default = "default_shrinkage_rate")]
    pub shrinkage_rate: f64,
    pub product: Product,
    pub incell: RawIncell,
    pub outcell: RawOutcell,
    pub slit: RawSlit,
}

/// Product cross-section. Shared between raw input and validated parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
    pub dia_outer: f64,
    /// Solid rim between the outer diameter and the effective diameter.
    pub thk_prod: f64,
    pub ln_prod: f64,
    /// Wall between neighbouring incells.
    pub thk_wall: f64,
    /// Wall between an outcell row edge and the adjacent incells.
    pub thk_c2s: f64,
    #[serde(default)]
    pub offset_x: bool,
    #[serde(default)]
    pub offset_y: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawIncell {
    pub info: IncellShape,
    #[serde(default)]
    pub thk_top: f64,
    #[serde(default)]
    pub thk_mid: f64,
    #[serde(default)]
    pub thk_bot: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawOutcell {
    pub info: OutcellShape,
    #[serde(default = "default_num_oc")]
    pub num_oc: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSlit {
    pub thk_slit: f64,
    pub ratio_slit: i64,
    #[serde(default)]
    pub num_ic_lim: i64,
}
