//! Lattice generation and boundary filtering.
//!
//! Purpose
//! - Turn validated `Parameters` into the final incell and outcell centres.
//! - Over-generate candidates (`lattice`), then keep the ones whose footprint
//!   fits strictly inside the effective-diameter circle (`filter`).
//! - Hexagon incells adjacent to a slit use truncated footprints; `regroup`
//!   decides which incells those are.
//!
//! Generation is infallible for valid `Parameters` and fully deterministic.
//!
//! Code cross-refs: `params::Parameters`, `geom::Footprint`

mod filter;
mod lattice;
mod regroup;

pub use filter::retain_within;
pub use regroup::{regroup_by_slit, slit_rows, SlitGroups};

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::geom::{Point, Tolerance};
use crate::params::{IncellRole, Parameters};

/// Ordered list of cell centres.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordinateSet(Vec<Point>);

impl CoordinateSet {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.0.iter().map(|c| [c.x, c.y]).collect()
    }

    pub fn into_inner(self) -> Vec<Point> {
        self.0
    }
}

impl From<Vec<Point>> for CoordinateSet {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl<'a> IntoIterator for &'a CoordinateSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Serialized as `[[x, y], ...]`.
impl Serialize for CoordinateSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for c in &self.0 {
            seq.serialize_element(&[c.x, c.y])?;
        }
        seq.end()
    }
}

/// Generator output.
///
/// `incell` is ordered interior, slit-top, slit-bottom; circle incells are all
/// interior.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub incell: CoordinateSet,
    pub outcell: CoordinateSet,
    n_interior: usize,
    n_top: usize,
}

impl Layout {
    pub fn interior(&self) -> &[Point] {
        &self.incell.as_slice()[..self.n_interior]
    }

    pub fn slit_top(&self) -> &[Point] {
        &self.incell.as_slice()[self.n_interior..self.n_interior + self.n_top]
    }

    pub fn slit_bottom(&self) -> &[Point] {
        &self.incell.as_slice()[self.n_interior + self.n_top..]
    }

    /// Incell centres grouped by the footprint they were filtered with.
    pub fn incells_by_role(&self) -> [(IncellRole, &[Point]); 3] {
        [
            (IncellRole::Interior, self.interior()),
            (IncellRole::SlitTop, self.slit_top()),
            (IncellRole::SlitBottom, self.slit_bottom()),
        ]
    }

    /// Distinct outcell row heights (one slit per row).
    pub fn slit_rows(&self) -> Vec<f64> {
        slit_rows(self.outcell.as_slice(), Tolerance::DEFAULT)
    }
}

/// Compute the final incell and outcell centres for `p`.
pub fn generate_layout(p: &Parameters) -> Layout {
    let (incell_cand, outcell_cand) = lattice::candidates(p);
    tracing::debug!(
        incells = incell_cand.len(),
        outcells = outcell_cand.len(),
        "candidate lattice"
    );
    let boundary = p.boundary();

    let groups = if p.incell().has_slit_variants() {
        regroup_by_slit(p.thk_i2o(), &incell_cand, &outcell_cand)
    } else {
        SlitGroups {
            interior: incell_cand,
            ..SlitGroups::default()
        }
    };
    let outcell = retain_within(outcell_cand, &p.outcell_footprint(), &boundary);

    let interior = retain_within(
        groups.interior,
        &p.incell_footprint(IncellRole::Interior),
        &boundary,
    );
    let top = retain_within(groups.top, &p.incell_footprint(IncellRole::SlitTop), &boundary);
    let bottom = retain_within(
        groups.bottom,
        &p.incell_footprint(IncellRole::SlitBottom),
        &boundary,
    );

    let (n_interior, n_top) = (interior.len(), top.len());
    let mut incell = interior;
    incell.extend(top);
    incell.extend(bottom);

    if incell.is_empty() || outcell.is_empty() {
        tracing::warn!(
            incells = incell.len(),
            outcells = outcell.len(),
            dia_eff = p.dia_eff(),
            "layout is empty; the effective diameter leaves no room for a full slit period"
        );
    } else {
        tracing::debug!(
            incells = incell.len(),
            outcells = outcell.len(),
            "layout generated"
        );
    }

    Layout {
        incell: incell.into(),
        outcell: outcell.into(),
        n_interior,
        n_top,
    }
}
