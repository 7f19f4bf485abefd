use lariat_components::{
    body::{RailBodyConfig, RailBodyError},
    controller::PidGains,
};
use lariat_core::{PlanePoint, TimeGridError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::f64::{Length, Time};

/// Configuration for a full simulation run.
///
/// The controller and the body share `body.time_step`; a single source
/// keeps the derivative and integral terms consistent with the
/// integrator by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub body: RailBodyConfig,
    pub gains: PidGains,
    /// Number of independent trials to run.
    pub trial_count: usize,
    pub start_time: Time,
    pub end_time: Time,
    /// Offset applied when projecting the body's scalar position onto
    /// the plane (e.g. the platform's resting height).
    pub projection_offset: PlanePoint,
    /// Capture window around the platform; `None` disables capture.
    pub capture: Option<CaptureWindow>,
}

/// An open rectangular tolerance window.
///
/// When the target falls strictly inside the window centred on the
/// platform, the target is considered caught. The extents are scenario
/// configuration, not algorithmic constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureWindow {
    pub half_width: Length,
    pub half_height: Length,
}

impl CaptureWindow {
    /// Whether `point` lies strictly inside the window centred on `center`.
    #[must_use]
    pub fn contains(&self, center: PlanePoint, point: PlanePoint) -> bool {
        point.x > center.x - self.half_width
            && point.x < center.x + self.half_width
            && point.y > center.y - self.half_height
            && point.y < center.y + self.half_height
    }
}

/// Errors detected while validating a simulation configuration.
///
/// All of these are fatal: an invalid configuration never starts a run.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid time grid: {0}")]
    Grid(#[from] TimeGridError),
    #[error("invalid body configuration: {0}")]
    Body(#[from] RailBodyError),
}
