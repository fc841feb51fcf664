use std::f64::consts::PI;

use serde::Serialize;

use crate::layout::Layout;
use crate::params::Parameters;

/// Headline numbers of a finished layout.
///
/// Areas are in product units squared; `area_membrane` is the coated wall
/// surface over the product length.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub n_incell: usize,
    pub n_outcell: usize,
    pub n_slit: usize,
    pub area_incell: f64,
    pub area_membrane: f64,
    /// Open incell area over the full `dia_outer` cross-section, in percent.
    pub ratio_incell_pct: f64,
}

pub fn summarize(p: &Parameters, layout: &Layout) -> Summary {
    let eff_dia = p.eff_dia_incell();
    let (mut area, mut perimeter) = (0.0, 0.0);
    for (role, centers) in layout.incells_by_role() {
        let opening = p.incell().opening(role, eff_dia);
        let n = centers.len() as f64;
        area += n * opening.area();
        perimeter += n * opening.perimeter();
    }
    let dia_outer = p.product().dia_outer;
    let area_prod = 0.25 * PI * dia_outer * dia_outer;
    Summary {
        n_incell: layout.incell.len(),
        n_outcell: layout.outcell.len(),
        n_slit: layout.slit_rows().len(),
        area_incell: area,
        area_membrane: perimeter * p.product().ln_prod,
        ratio_incell_pct: 100.0 * area / area_prod,
    }
}
