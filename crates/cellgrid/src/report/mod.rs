//! Post-processing of a finished layout: summary numbers and quadrant rows.
//!
//! Code cross-refs: `layout::Layout`, `params::IncellShape::opening`

mod quadrant;
mod summary;

pub use quadrant::{classify, QuadrantRow, QUADRANT_TOL};
pub use summary::{summarize, Summary};

#[cfg(test)]
mod tests;
