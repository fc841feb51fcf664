use crate::geom::{Circle, Footprint, Point};

/// Keep centres whose placed footprint lies strictly inside `boundary`.
/// Order is preserved.
pub fn retain_within(centers: Vec<Point>, footprint: &Footprint, boundary: &Circle) -> Vec<Point> {
    let before = centers.len();
    let kept: Vec<Point> = centers
        .into_iter()
        .filter(|c| footprint.fits_within(*c, boundary))
        .collect();
    tracing::debug!(candidates = before, kept = kept.len(), "boundary filter");
    kept
}
