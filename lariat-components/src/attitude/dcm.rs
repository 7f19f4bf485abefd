use std::ops::{Add, Index, Mul};

use serde::{Deserialize, Serialize};

use super::{EulerAngles, RotationSequence};

/// A 3×3 direction cosine matrix, row-major.
///
/// Maps vectors between reference frames. Matrices built by
/// [`Dcm::from_euler`] are orthonormal for any finite input angles,
/// including numerically degenerate (gimbal-lock) ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dcm([[f64; 3]; 3]);

impl Dcm {
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    #[must_use]
    pub fn new(rows: [[f64; 3]; 3]) -> Self {
        Self(rows)
    }

    #[must_use]
    pub fn as_rows(&self) -> &[[f64; 3]; 3] {
        &self.0
    }

    #[must_use]
    pub fn transposed(&self) -> Self {
        let m = &self.0;
        Self([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Right-handed elementary rotation about the x axis.
    fn rotation_x(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self([[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]])
    }

    /// Right-handed elementary rotation about the y axis.
    fn rotation_y(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self([[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]])
    }

    /// Right-handed elementary rotation about the z axis.
    fn rotation_z(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self([[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Builds the matrix for an angle triple in radians.
    ///
    /// Composes `R1 · (R2 · R3)`, the rightmost factor being the first
    /// rotation applied:
    ///
    /// - `Xyz`: `Rx(phi) · (Ry(theta) · Rz(psi))`
    /// - `Zxz`: `Rz(phi) · (Rx(theta) · Rz(psi))`
    #[must_use]
    pub fn from_euler(angles: EulerAngles, sequence: RotationSequence) -> Self {
        let EulerAngles { phi, theta, psi } = angles;
        match sequence {
            RotationSequence::Xyz => {
                Self::rotation_x(phi) * (Self::rotation_y(theta) * Self::rotation_z(psi))
            }
            RotationSequence::Zxz => {
                Self::rotation_z(phi) * (Self::rotation_x(theta) * Self::rotation_z(psi))
            }
        }
    }

    /// Extracts the principal-value angle triple in radians.
    ///
    /// At gimbal lock (`theta` at ±90° for `Xyz`, 0° or 180° for `Zxz`)
    /// `phi` and `psi` are not uniquely recoverable from the matrix; the
    /// principal values of the extraction formulas are returned as-is.
    #[must_use]
    pub fn to_euler(&self, sequence: RotationSequence) -> EulerAngles {
        let m = &self.0;
        match sequence {
            RotationSequence::Xyz => EulerAngles::new(
                m[1][2].atan2(m[2][2]),
                -m[0][2].asin(),
                m[0][1].atan2(m[0][0]),
            ),
            RotationSequence::Zxz => EulerAngles::new(
                m[0][2].atan2(m[1][2]),
                m[2][2].acos(),
                m[2][0].atan2(-m[2][1]),
            ),
        }
    }
}

impl Index<usize> for Dcm {
    type Output = [f64; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.0[row]
    }
}

/// Matrix product.
impl Mul for Dcm {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = (0..3).map(|k| self.0[i][k] * rhs.0[k][j]).sum();
            }
        }
        Self(out)
    }
}

/// Entry-wise addition.
///
/// Together with [`Mul<f64>`] this makes matrices linearly interpolable
/// through [`lariat_core::Lerp`]; a blend of two rotation matrices is in
/// general not itself a rotation matrix.
impl Add for Dcm {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (row, rhs_row) in out.iter_mut().zip(&rhs.0) {
            for (entry, rhs_entry) in row.iter_mut().zip(rhs_row) {
                *entry += rhs_entry;
            }
        }
        Self(out)
    }
}

/// Entry-wise scaling.
impl Mul<f64> for Dcm {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        let mut out = self.0;
        for row in &mut out {
            for entry in row {
                *entry *= rhs;
            }
        }
        Self(out)
    }
}
