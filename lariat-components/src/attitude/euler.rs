use std::{
    f64::consts::PI,
    ops::{Add, Mul},
};

use serde::{Deserialize, Serialize};

/// Converts degrees to radians.
#[must_use]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

/// Converts radians to degrees.
#[must_use]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// An Euler angle triple.
///
/// Whether the angles are radians or degrees is the caller's convention;
/// the two must never be mixed within one computation. The matrix
/// conversions in [`Dcm`](super::Dcm) expect radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    pub phi: f64,
    pub theta: f64,
    pub psi: f64,
}

impl EulerAngles {
    #[must_use]
    pub fn new(phi: f64, theta: f64, psi: f64) -> Self {
        Self { phi, theta, psi }
    }

    /// Converts a degree triple to radians.
    #[must_use]
    pub fn to_radians(self) -> Self {
        Self::new(
            deg_to_rad(self.phi),
            deg_to_rad(self.theta),
            deg_to_rad(self.psi),
        )
    }

    /// Converts a radian triple to degrees.
    #[must_use]
    pub fn to_degrees(self) -> Self {
        Self::new(
            rad_to_deg(self.phi),
            rad_to_deg(self.theta),
            rad_to_deg(self.psi),
        )
    }
}

/// Component-wise addition.
///
/// Together with [`Mul<f64>`] this makes angle triples linearly
/// interpolable through [`lariat_core::Lerp`]; note that a component-wise
/// blend is not a spherical interpolation between orientations.
impl Add for EulerAngles {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.phi + rhs.phi, self.theta + rhs.theta, self.psi + rhs.psi)
    }
}

/// Component-wise scaling.
impl Mul<f64> for EulerAngles {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.phi * rhs, self.theta * rhs, self.psi * rhs)
    }
}
