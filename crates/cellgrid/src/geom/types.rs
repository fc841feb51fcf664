//! Basic 2D types and tolerances shared by the geometry and validation code.
//!
//! - `Tolerance`: explicit "is-close" constants used wherever two lengths are
//!   compared for near-coincidence.
//! - `Circle`: closed disc used as the effective-diameter boundary; all
//!   containment tests against it are strict.
//!
//! Code cross-refs: `footprint::Footprint`, `params::validate`

use nalgebra::Vector2;

/// Point or vector in the cross-section plane.
pub type Point = Vector2<f64>;

/// Near-coincidence tolerance.
///
/// `a` is close to `b` iff `|a - b| <= abs + rel * |b|`. The comparison is
/// asymmetric in `b` on purpose: `b` is the reference value of the check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub rel: f64,
    pub abs: f64,
}

impl Tolerance {
    /// `rel = 1e-5`, `abs = 1e-8`.
    pub const DEFAULT: Tolerance = Tolerance {
        rel: 1e-5,
        abs: 1e-8,
    };

    #[inline]
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.abs + self.rel * b.abs()
    }

    /// Close to `b` but not bit-equal: the "near miss" pattern used by validation.
    #[inline]
    pub fn is_near_miss(&self, a: f64, b: f64) -> bool {
        a != b && self.is_close(a, b)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Circle `|p - center| <= radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Circle of the given diameter centred at the origin.
    #[inline]
    pub fn from_diameter(diameter: f64) -> Self {
        Self::new(Point::zeros(), 0.5 * diameter)
    }

    /// Strict interior membership: points on the circle are outside.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        (p - self.center).norm() < self.radius
    }

    /// `other` lies in the open disc. Tangent circles are rejected.
    #[inline]
    pub fn contains_circle(&self, other: &Circle) -> bool {
        (other.center - self.center).norm() + other.radius < self.radius
    }

    /// Every vertex lies in the open disc.
    ///
    /// The disc is convex, so this is equivalent to the whole polygon being
    /// inside. An empty vertex list is never contained.
    pub fn contains_polygon(&self, vertices: &[Point]) -> bool {
        !vertices.is_empty() && vertices.iter().all(|v| self.contains_point(*v))
    }
}
