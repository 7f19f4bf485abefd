//! Core types for Lariat, a deterministic control and simulation toolkit.
//!
//! This crate provides the foundations shared by every Lariat component:
//!
//! - [`TimeIncrement`] and [`TimeGrid`], the validated time-step and
//!   fixed-step grid that discrete simulations advance over.
//! - [`PlanePoint`], a position in the vertical plane of a rail.
//! - [`Lerp`], linear interpolation for any type with component-wise
//!   linear arithmetic.

pub mod lerp;
pub mod point;
pub mod time;

pub use lerp::Lerp;
pub use point::PlanePoint;
pub use time::{TimeGrid, TimeGridError, TimeIncrement, TimeIncrementError};
