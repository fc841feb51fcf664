//! Cell footprints: the shape a cell occupies around its centre.
//!
//! A footprint is either a circle or a local-frame polygon. The layout filter
//! only asks one question of it: does the footprint, placed at a candidate
//! centre, fit strictly inside the boundary circle.

use super::measure::{polygon_area, polygon_perimeter};
use super::types::{Circle, Point};
use super::vertex::placed;

#[derive(Clone, Debug, PartialEq)]
pub enum Footprint {
    Circle { radius: f64 },
    Polygon(Vec<Point>),
}

impl Footprint {
    /// Local-frame vertices; empty for a circle.
    pub fn vertices(&self) -> &[Point] {
        match self {
            Footprint::Circle { .. } => &[],
            Footprint::Polygon(v) => v,
        }
    }

    /// Vertices translated to `center` (empty for a circle).
    pub fn placed_at(&self, center: Point) -> Vec<Point> {
        placed(self.vertices(), center)
    }

    /// Strict containment of the placed footprint in `boundary`.
    pub fn fits_within(&self, center: Point, boundary: &Circle) -> bool {
        match self {
            Footprint::Circle { radius } => boundary.contains_circle(&Circle::new(center, *radius)),
            Footprint::Polygon(_) => boundary.contains_polygon(&self.placed_at(center)),
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Footprint::Circle { radius } => std::f64::consts::PI * radius * radius,
            Footprint::Polygon(v) => polygon_area(v),
        }
    }

    pub fn perimeter(&self) -> f64 {
        match self {
            Footprint::Circle { radius } => std::f64::consts::TAU * radius,
            Footprint::Polygon(v) => polygon_perimeter(v),
        }
    }
}
