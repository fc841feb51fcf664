//! Slit regrouping: which incells sit directly above or below an outcell row.

use crate::geom::{Point, Tolerance};

/// Partition of incell centres by their position relative to slit rows.
/// Each group keeps the input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlitGroups {
    pub interior: Vec<Point>,
    /// `y` matches some outcell row `+ thk_i2o`.
    pub top: Vec<Point>,
    /// `y` matches some outcell row `- thk_i2o`.
    pub bottom: Vec<Point>,
}

impl SlitGroups {
    pub fn len(&self) -> usize {
        self.interior.len() + self.top.len() + self.bottom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Distinct outcell row heights, ascending; values within tolerance merge.
pub fn slit_rows(outcell: &[Point], tol: Tolerance) -> Vec<f64> {
    let mut ys: Vec<f64> = outcell.iter().map(|c| c.y).collect();
    ys.sort_by(f64::total_cmp);
    ys.dedup_by(|y, kept| tol.is_close(*y, *kept));
    ys
}

/// Split `incell` into interior / top / bottom against the rows of `outcell`.
///
/// A point matching both a `+thk_i2o` and a `-thk_i2o` offset goes to `top`.
pub fn regroup_by_slit(thk_i2o: f64, incell: &[Point], outcell: &[Point]) -> SlitGroups {
    let tol = Tolerance::DEFAULT;
    let rows = slit_rows(outcell, tol);
    let matches = |y: f64, offset: f64| rows.iter().any(|&r| tol.is_close(y, r + offset));

    let mut groups = SlitGroups::default();
    for &c in incell {
        if matches(c.y, thk_i2o) {
            groups.top.push(c);
        } else if matches(c.y, -thk_i2o) {
            groups.bottom.push(c);
        } else {
            groups.interior.push(c);
        }
    }
    tracing::debug!(
        rows = rows.len(),
        interior = groups.interior.len(),
        top = groups.top.len(),
        bottom = groups.bottom.len(),
        "regrouped incells by slit"
    );
    groups
}
