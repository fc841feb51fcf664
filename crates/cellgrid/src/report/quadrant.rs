//! First-quadrant reduction of a symmetric layout.
//!
//! A mirror-symmetric layout is fully described by its first quadrant plus
//! the quadrants each point stands for. Points on an axis stand for two
//! quadrants, the centre for one. Rows are emitted centre first, then +x
//! axis, then +y axis, then the rest; within a class input order is kept.

use serde::Serialize;

use crate::geom::Point;

/// Axis snapping tolerance.
pub const QUADRANT_TOL: f64 = 1e-3;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuadrantRow {
    pub unit: String,
    pub x: f64,
    pub y: f64,
    pub quadrant: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Class {
    Center,
    AxisX,
    AxisY,
    Open,
}

impl Class {
    fn of(c: Point) -> Class {
        if c.norm() <= QUADRANT_TOL {
            Class::Center
        } else if c.x >= QUADRANT_TOL && c.y.abs() <= QUADRANT_TOL {
            Class::AxisX
        } else if c.x.abs() <= QUADRANT_TOL && c.y >= QUADRANT_TOL {
            Class::AxisY
        } else {
            Class::Open
        }
    }

    fn quadrants(self) -> &'static [u8] {
        match self {
            Class::Center => &[1],
            Class::AxisX => &[1, 2],
            Class::AxisY => &[1, 4],
            Class::Open => &[1, 2, 3, 4],
        }
    }
}

/// Quadrant rows for the first-quadrant points of `coords`, tagged with `unit`.
pub fn classify<'a, I>(coords: I, unit: &str) -> Vec<QuadrantRow>
where
    I: IntoIterator<Item = &'a Point>,
{
    let q1: Vec<(Class, Point)> = coords
        .into_iter()
        .filter(|c| c.x >= -QUADRANT_TOL && c.y >= -QUADRANT_TOL)
        .map(|c| (Class::of(*c), *c))
        .collect();

    let mut rows = Vec::new();
    for class in [Class::Center, Class::AxisX, Class::AxisY, Class::Open] {
        for (_, c) in q1.iter().filter(|(k, _)| *k == class) {
            rows.extend(class.quadrants().iter().map(|&quadrant| QuadrantRow {
                unit: unit.to_string(),
                x: c.x,
                y: c.y,
                quadrant,
            }));
        }
    }
    rows
}
