//! Candidate lattices, deliberately over-generated past the boundary.
//!
//! The seed row and its incell sub-rows describe one slit period starting at
//! `y = 0`; `duplicate_bands` stacks that period in ±y and `apply_offset`
//! shifts the whole pattern. Nothing here looks at the boundary circle.

use crate::geom::Point;
use crate::params::Parameters;

/// Outcell row at `y = 0`, spanning the outer diameter plus two pitches.
///
/// Sub-row, band and global offsets move x right by up to `1.5 * pitch_x`;
/// the margin keeps the -x edge covered after those shifts.
pub(crate) fn seed_row(p: &Parameters) -> Vec<Point> {
    let pitch_x = p.pitch_x();
    let cnt = ((0.5 * p.product().dia_outer + 2.0 * pitch_x) / pitch_x).ceil() as i64;
    (-cnt..=cnt)
        .map(|n| Point::new(n as f64 * pitch_x, 0.0))
        .collect()
}

/// `ratio_slit` incell sub-rows stacked above the seed row.
///
/// Sub-row `i` sits at `i * pitch_y + thk_i2o`; even sub-rows are shifted by
/// half a pitch so neighbouring sub-rows interleave. Replica-major order.
pub(crate) fn incell_rows(p: &Parameters, row: &[Point]) -> Vec<Point> {
    let (pitch_x, pitch_y, thk_i2o) = (p.pitch_x(), p.pitch_y(), p.thk_i2o());
    let mut out = Vec::with_capacity(row.len() * p.ratio_slit() as usize);
    for i in 0..p.ratio_slit() {
        let dx = if i % 2 == 0 { 0.5 * pitch_x } else { 0.0 };
        let dy = f64::from(i) * pitch_y + thk_i2o;
        out.extend(row.iter().map(|c| c + Point::new(dx, dy)));
    }
    out
}

/// Copy `points` into every slit band `n * pitch_slit`, `|n| <= cnt`.
///
/// With an even `ratio_slit` the band parity would otherwise stack incells
/// directly over each other, so bands at odd index `n + cnt` are shifted by
/// half a pitch in x. Band-major order; empty when `lim_slit < 0` puts `cnt`
/// below zero.
pub(crate) fn duplicate_bands(p: &Parameters, points: &[Point]) -> Vec<Point> {
    let (pitch_x, pitch_slit) = (p.pitch_x(), p.pitch_slit());
    let cnt = (p.lim_slit() / pitch_slit).ceil() as i64;
    let stagger = p.ratio_slit() % 2 == 0;
    let mut out = Vec::with_capacity(points.len() * (2 * cnt.max(0) + 1) as usize);
    for n in -cnt..=cnt {
        let j = n + cnt;
        let dx = if stagger && j % 2 == 1 { 0.5 * pitch_x } else { 0.0 };
        let shift = Point::new(dx, n as f64 * pitch_slit);
        out.extend(points.iter().map(|c| c + shift));
    }
    out
}

/// Global half-pitch offsets selected by `offset_x` / `offset_y`.
pub(crate) fn apply_offset(p: &Parameters, points: &mut [Point]) {
    let product = p.product();
    let shift = Point::new(
        if product.offset_x { 0.5 * p.pitch_x() } else { 0.0 },
        if product.offset_y { 0.5 * p.pitch_slit() } else { 0.0 },
    );
    if shift == Point::zeros() {
        return;
    }
    for c in points.iter_mut() {
        *c += shift;
    }
}

/// Full candidate sets `(incell, outcell)` before boundary filtering.
pub(crate) fn candidates(p: &Parameters) -> (Vec<Point>, Vec<Point>) {
    let row = seed_row(p);
    let sub_rows = incell_rows(p, &row);
    let mut outcell = duplicate_bands(p, &row);
    let mut incell = duplicate_bands(p, &sub_rows);
    apply_offset(p, &mut outcell);
    apply_offset(p, &mut incell);
    (incell, outcell)
}
