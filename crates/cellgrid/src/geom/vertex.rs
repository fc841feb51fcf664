//! Closed-form vertex generators in a local frame centred at the origin.
//!
//! All polygons are returned counter-clockwise and closed implicitly (the
//! first vertex is not repeated).

use std::f64::consts::{FRAC_PI_3, FRAC_PI_6, TAU};

use super::types::Point;

/// Points sampled along each arc of a slit polygon.
pub const SLIT_ARC_SAMPLES: usize = 10;

/// Regular hexagon with inscribed radius `r_in`, flats facing ±x.
pub fn hexagon(r_in: f64) -> Vec<Point> {
    let r_out = r_in / FRAC_PI_6.cos();
    (0..6)
        .map(|k| polar(r_out, -FRAC_PI_6 + k as f64 * FRAC_PI_3))
        .collect()
}

/// Hexagon with its bottom vertex cut off by a flat at `y = -r_in·sin(60°)`,
/// rotated counter-clockwise by `rot_deg` degrees.
///
/// `rot_deg = 0` is the variant sitting just above a slit row, `180` the one
/// just below.
pub fn heptagon(r_in: f64, rot_deg: f64) -> Vec<Point> {
    let r_out = r_in / FRAC_PI_6.cos();
    let mut pts: Vec<Point> = (0..5)
        .map(|k| polar(r_out, -FRAC_PI_6 + k as f64 * FRAC_PI_3))
        .collect();
    pts.push(polar(r_in, 4.0 * FRAC_PI_3));
    pts.push(polar(r_in, 5.0 * FRAC_PI_3));
    rotate_deg(&mut pts, rot_deg);
    pts
}

/// Rectangle `width × height` with its four corners chamfered by
/// `chamfer_x × chamfer_y`. Zero chamfers give the plain rectangle (4 vertices).
pub fn octagon(width: f64, height: f64, chamfer_x: f64, chamfer_y: f64) -> Vec<Point> {
    if chamfer_x == 0.0 && chamfer_y == 0.0 {
        return square(width, height);
    }
    let dx = 0.5 * width;
    let dy = 0.5 * height;
    let upper = [
        Point::new(dx, dy - chamfer_y),
        Point::new(dx - chamfer_x, dy),
        Point::new(-(dx - chamfer_x), dy),
        Point::new(-dx, dy - chamfer_y),
    ];
    // Lower half is the upper half rotated by 180°.
    upper
        .iter()
        .copied()
        .chain(upper.iter().map(|p| -p))
        .collect()
}

/// Axis-aligned rectangle `width × height`.
pub fn square(width: f64, height: f64) -> Vec<Point> {
    let dx = 0.5 * width;
    let dy = 0.5 * height;
    vec![
        Point::new(dx, -dy),
        Point::new(dx, dy),
        Point::new(-dx, dy),
        Point::new(-dx, -dy),
    ]
}

/// Slit band `|Y - y| <= thk_slit / 2` clipped by the circle of `radius`.
///
/// Each arc is sampled with [`SLIT_ARC_SAMPLES`] points; the right arc is
/// mirrored in x and the union is sorted by polar angle in `[0, 2π)`.
/// Returns `None` if the band is not fully inside the circle's y-range.
pub fn slit(radius: f64, thk_slit: f64, y: f64) -> Option<Vec<Point>> {
    if !(radius > 0.0) {
        return None;
    }
    let y_lo = y - 0.5 * thk_slit;
    let y_hi = y + 0.5 * thk_slit;
    if y_lo.abs() > radius || y_hi.abs() > radius {
        return None;
    }
    let angle_at = |yy: f64| {
        let x = radius * (yy / radius).asin().cos();
        yy.atan2(x)
    };
    let (a0, a1) = (angle_at(y_lo), angle_at(y_hi));
    let (lo, hi) = (a0.min(a1), a0.max(a1));
    let step = (hi - lo) / (SLIT_ARC_SAMPLES - 1) as f64;

    let right: Vec<Point> = (0..SLIT_ARC_SAMPLES)
        .map(|k| polar(radius, lo + k as f64 * step))
        .collect();
    let left: Vec<Point> = right.iter().map(|p| Point::new(-p.x, p.y)).collect();
    let mut pts: Vec<(f64, Point)> = right
        .iter()
        .chain(left.iter())
        .map(|p| {
            let mut a = p.y.atan2(p.x);
            if a < 0.0 {
                a += TAU;
            }
            (a, *p)
        })
        .collect();
    pts.sort_by(|a, b| a.0.total_cmp(&b.0));
    Some(pts.into_iter().map(|(_, p)| p).collect())
}

/// Translate a local-frame vertex list to `center`.
#[inline]
pub fn placed(vertices: &[Point], center: Point) -> Vec<Point> {
    vertices.iter().map(|v| v + center).collect()
}

#[inline]
fn polar(r: f64, theta: f64) -> Point {
    Point::new(r * theta.cos(), r * theta.sin())
}

fn rotate_deg(pts: &mut [Point], deg: f64) {
    if deg == 0.0 {
        return;
    }
    // Half turn is exact negation; avoids sin(π) round-off.
    if deg == 180.0 {
        for p in pts.iter_mut() {
            *p = -*p;
        }
        return;
    }
    let (s, c) = deg.to_radians().sin_cos();
    for p in pts.iter_mut() {
        *p = Point::new(c * p.x - s * p.y, s * p.x + c * p.y);
    }
}
