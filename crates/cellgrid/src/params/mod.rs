//! Parameter model: raw input, validation, and derived quantities.
//!
//! Purpose
//! - `RawParameters` mirrors the configuration file and is the only thing a
//!   loader needs to produce.
//! - `Parameters` is the validated, immutable value every other module reads.
//!   It exposes the primaries and derives pitches, offsets and chamfers on
//!   demand.
//! - `ParamError` explains why construction failed (type, range, or a named
//!   cross-field inequality together with its inputs).
//!
//! Code cross-refs: `validate::validate_and_build_parameters`,
//! `model::Parameters`, `shape::{IncellShape, OutcellShape}`

mod error;
mod model;
mod raw;
mod shape;
mod validate;

pub use error::ParamError;
pub use model::{Membrane, Parameters};
pub use raw::{Product, RawIncell, RawOutcell, RawParameters, RawSlit};
pub use shape::{IncellRole, IncellShape, OutcellShape};
pub use validate::validate_and_build_parameters;

#[cfg(test)]
mod tests;
