//! Linear interpolation.

use std::ops::{Add, Mul};

/// Linear interpolation between two values of the same type.
///
/// The blanket implementation covers any type with component-wise linear
/// arithmetic: plain `f64`, every [`uom`] quantity, and compound values
/// such as angle triples or matrices that implement scaling and addition.
///
/// Interpolating Euler angles or matrix entries component-wise is a
/// straight-line blend in the component space; it is not a spherical
/// interpolation between orientations.
pub trait Lerp {
    /// Returns `self * (1 - t) + other * t`.
    ///
    /// `t = 0` yields `self` and `t = 1` yields `other`, up to
    /// floating-point rounding. `t` outside `[0, 1]` extrapolates.
    #[must_use]
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl<T> Lerp for T
where
    T: Mul<f64, Output = T> + Add<Output = T> + Copy,
{
    fn lerp(self, other: Self, t: f64) -> Self {
        self * (1.0 - t) + other * t
    }
}
