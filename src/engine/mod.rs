//! Sampling engine: substep allocation, channel interpolation and position queries.

pub mod interpolate;
pub mod query;
pub mod substeps;

pub use self::interpolate::{HueArc, Interpolation};
