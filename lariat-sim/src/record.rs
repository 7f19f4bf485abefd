use lariat_core::PlanePoint;
use serde::{Deserialize, Serialize};
use uom::si::f64::{Acceleration, Force, Length, Time, Velocity};

/// One recorded tick of a trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickSample {
    /// Grid time of this tick.
    pub time: Time,
    /// Projected platform position in the plane.
    pub platform: PlanePoint,
    /// Target position, possibly overridden by a capture event.
    pub target: PlanePoint,
    /// Platform distance from the plane origin.
    pub displacement: Length,
    pub velocity: Velocity,
    pub acceleration: Acceleration,
    /// `kp * error` at this tick.
    pub proportional_term: Force,
    /// `ki * integral_error` at this tick.
    pub integral_term: Force,
    /// `kd * derivative_error` at this tick.
    pub derivative_term: Force,
}

/// The ordered samples recorded during one trial.
///
/// The simulation loop appends one sample per tick; recorded samples are
/// read-only to callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    samples: Vec<TickSample>,
}

impl TrialRecord {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, sample: TickSample) {
        self.samples.push(sample);
    }

    #[must_use]
    pub fn samples(&self) -> &[TickSample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TickSample> {
        self.samples.iter()
    }
}
