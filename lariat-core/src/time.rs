//! Simulation time steps and fixed-step time grids.

use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::{
    Conversion,
    si::{f64::Time, time},
};

/// A strictly positive simulation time step.
///
/// `TimeIncrement` wraps a [`Time`] value while enforcing that the step is
/// greater than zero. Components that divide by the time step (such as a
/// discrete derivative) rely on this guarantee, so the check happens once,
/// at construction, rather than on every call.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Time", into = "Time")]
pub struct TimeIncrement(Time);

/// Error returned when constructing an invalid [`TimeIncrement`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimeIncrementError {
    #[error("time step must be greater than zero, got {0} s")]
    NotPositive(f64),
}

impl TimeIncrement {
    /// Constructs a `TimeIncrement` from a value and a time unit.
    ///
    /// # Errors
    ///
    /// Returns [`TimeIncrementError::NotPositive`] if `value` is zero or
    /// negative.
    pub fn new<U>(value: f64) -> Result<Self, TimeIncrementError>
    where
        U: time::Unit + Conversion<f64, T = f64>,
    {
        Self::from_time(Time::new::<U>(value))
    }

    /// Constructs a `TimeIncrement` from an existing [`Time`] value.
    ///
    /// # Errors
    ///
    /// Returns [`TimeIncrementError::NotPositive`] if the time is zero or
    /// negative.
    pub fn from_time(time: Time) -> Result<Self, TimeIncrementError> {
        let seconds = time.get::<time::second>();
        if seconds > 0.0 {
            Ok(Self(time))
        } else {
            Err(TimeIncrementError::NotPositive(seconds))
        }
    }

    /// Returns the underlying [`Time`] value.
    #[must_use]
    pub fn into_inner(self) -> Time {
        self.0
    }
}

impl TryFrom<Time> for TimeIncrement {
    type Error = TimeIncrementError;

    fn try_from(time: Time) -> Result<Self, Self::Error> {
        Self::from_time(time)
    }
}

impl From<TimeIncrement> for Time {
    fn from(dt: TimeIncrement) -> Self {
        dt.0
    }
}

impl Deref for TimeIncrement {
    type Target = Time;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for TimeIncrement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s", self.0.get::<time::second>())
    }
}

/// An inclusive fixed-step time grid.
///
/// The grid covers `start..=end` in steps of `dt`; the end point is
/// included when it lies on the grid. A simulation runs exactly
/// [`len`](TimeGrid::len) ticks, one per grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    start: Time,
    dt: TimeIncrement,
    len: usize,
}

/// Error returned when constructing an invalid [`TimeGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimeGridError {
    #[error("time grid end ({end} s) precedes its start ({start} s)")]
    EndBeforeStart { start: f64, end: f64 },
}

impl TimeGrid {
    /// Builds a grid from `start` to `end` with step `dt`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeGridError::EndBeforeStart`] if `end < start`.
    pub fn new(start: Time, end: Time, dt: TimeIncrement) -> Result<Self, TimeGridError> {
        if end < start {
            return Err(TimeGridError::EndBeforeStart {
                start: start.get::<time::second>(),
                end: end.get::<time::second>(),
            });
        }
        let steps = (end - start).get::<time::second>() / dt.get::<time::second>();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let len = (steps + 1.0).floor() as usize;
        Ok(Self { start, dt, len })
    }

    /// Number of grid points, including the start point.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// A grid always contains at least its start point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The grid time at a tick index: `start + dt * tick`.
    #[must_use]
    pub fn at(&self, tick: usize) -> Time {
        #[allow(clippy::cast_precision_loss)]
        let tick = tick as f64;
        self.start + self.dt.into_inner() * tick
    }

    /// The grid step.
    #[must_use]
    pub fn dt(&self) -> TimeIncrement {
        self.dt
    }

    /// Iterates over all grid times in tick order.
    pub fn times(&self) -> impl Iterator<Item = Time> + '_ {
        (0..self.len).map(|tick| self.at(tick))
    }
}
