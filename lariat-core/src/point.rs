//! Positions in the vertical plane of a rail.

use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::meter};

/// A position in the plane, as a pair of lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanePoint {
    pub x: Length,
    pub y: Length,
}

impl PlanePoint {
    #[must_use]
    pub fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    /// Creates a point from raw SI values (m).
    #[must_use]
    pub fn from_si(x: f64, y: f64) -> Self {
        Self::new(Length::new::<meter>(x), Length::new::<meter>(y))
    }

    /// Straight-line distance from the plane origin.
    #[must_use]
    pub fn distance_from_origin(self) -> Length {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}
