//! Cell-lattice layout for circular extrusion-die cross-sections.
//!
//! Pipeline
//! - `params`: validate raw dimensions into an immutable `Parameters`
//!   (pitches, slit spacing, chamfers are derived on demand).
//! - `layout`: over-generate incell/outcell candidate lattices and keep the
//!   cells whose footprint fits strictly inside the effective diameter.
//! - `report`: summary numbers and first-quadrant rows of a finished layout.
//! - `geom`: the closed-form shapes and containment tests underneath.
//!
//! Validation is the only fallible step; generation never fails for a
//! `Parameters` value.

pub mod geom;
pub mod layout;
pub mod params;
pub mod report;

#[cfg(test)]
mod test_support;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use layout::{generate_layout, CoordinateSet, Layout};
pub use params::{validate_and_build_parameters, ParamError, Parameters, RawParameters};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{
        heptagon, hexagon, octagon, polygon_area, polygon_perimeter, slit, square, Circle,
        Footprint, Point, Tolerance,
    };
    pub use crate::layout::{generate_layout, regroup_by_slit, CoordinateSet, Layout, SlitGroups};
    pub use crate::params::{
        validate_and_build_parameters, IncellRole, IncellShape, OutcellShape, ParamError,
        Parameters, RawParameters,
    };
    pub use crate::report::{classify, summarize, QuadrantRow, Summary};
}
