use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A supported Euler rotation sequence.
///
/// Each variant names the axes of the three rotations in the order they
/// are applied. Adding a sequence means adding a variant here plus its
/// composition and extraction rows in [`Dcm`](super::Dcm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationSequence {
    /// Roll, pitch, yaw.
    Xyz,
    /// Spin, nutation, precession.
    Zxz,
}

/// Error returned when a rotation sequence string is not recognized.
///
/// Recoverable: callers may catch it and skip the conversion. Unknown
/// sequences are never silently mapped to a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid rotation sequence {0:?}, expected \"XYZ\" or \"ZXZ\"")]
pub struct InvalidSequence(pub String);

impl FromStr for RotationSequence {
    type Err = InvalidSequence;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "XYZ" => Ok(Self::Xyz),
            "ZXZ" => Ok(Self::Zxz),
            other => Err(InvalidSequence(other.to_owned())),
        }
    }
}

impl fmt::Display for RotationSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Xyz => "XYZ",
            Self::Zxz => "ZXZ",
        })
    }
}
