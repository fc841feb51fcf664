//! Geometry primitives for cell footprints.
//!
//! Purpose
//! - Closed-form vertex lists for the cell shapes (hexagon, heptagon, octagon,
//!   rectangle) and the slit band, all in a local frame at the origin.
//! - Shoelace area / perimeter.
//! - Strict containment of a circle or polygon inside a boundary circle.
//!
//! Everything here is pure; nothing depends on `params` or `layout`.

mod footprint;
mod measure;
mod types;
mod vertex;

pub use footprint::Footprint;
pub use measure::{polygon_area, polygon_perimeter};
pub use types::{Circle, Point, Tolerance};
pub use vertex::{heptagon, hexagon, octagon, placed, slit, square, SLIT_ARC_SAMPLES};
