//! Attitude representations: Euler angle triples and direction cosine
//! matrices, with conversions for configurable rotation sequences.
//!
//! Everything here is pure math on plain `f64` values; whether an angle
//! is radians or degrees is the caller's convention. These functions are
//! independent of the simulation loop and carry no state.

mod dcm;
mod euler;
mod sequence;

pub use dcm::Dcm;
pub use euler::{EulerAngles, deg_to_rad, rad_to_deg};
pub use sequence::{InvalidSequence, RotationSequence};
