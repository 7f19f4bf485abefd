//! A rigid body constrained to an inclined rail.

use lariat_core::{PlanePoint, TimeIncrement};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Angle, Force, Length, Mass, Velocity},
    mass::kilogram,
};

/// Standard gravity, negative along the vertical (m/s²).
///
/// The sign convention makes the gravity component along an inclined rail
/// pull toward smaller scalar positions, and a free-falling object's
/// height decrease over time.
#[must_use]
pub fn standard_gravity() -> Acceleration {
    Acceleration::new::<meter_per_second_squared>(-9.81)
}

/// Configuration for a [`RailBody`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RailBodyConfig {
    pub mass: Mass,
    pub time_step: TimeIncrement,
    /// Rail inclination measured from the horizontal.
    pub inclination: Angle,
    /// Whether the rail is inclined relative to the ground plane.
    pub orthogonal: bool,
    pub initial_acceleration: Acceleration,
    pub initial_velocity: Velocity,
    /// Initial position in the rail plane. The body's initial scalar
    /// position is this point's distance from the origin.
    pub initial_position: PlanePoint,
}

impl RailBodyConfig {
    /// Checks the physical validity of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RailBodyError::NonPositiveMass`] if the mass is zero or
    /// negative.
    pub fn validate(&self) -> Result<(), RailBodyError> {
        let kilograms = self.mass.get::<kilogram>();
        if kilograms <= 0.0 {
            return Err(RailBodyError::NonPositiveMass(kilograms));
        }
        Ok(())
    }
}

/// Error returned for an invalid [`RailBodyConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RailBodyError {
    #[error("body mass must be positive, got {0} kg")]
    NonPositiveMass(f64),
}

/// A point mass on an inclined rail, advanced by explicit Euler steps.
///
/// Each tick the driving loop applies three transitions in a fixed order:
/// [`apply_force`](RailBody::apply_force) sets the acceleration,
/// [`step_velocity`](RailBody::step_velocity) advances the velocity, and
/// [`step_position`](RailBody::step_position) advances the scalar
/// position using the just-advanced velocity. Forward Euler has O(dt²)
/// local truncation error per step, which is adequate for a
/// low-frequency control loop.
///
/// All arithmetic is plain double precision; NaN and infinities propagate
/// unmodified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailBody {
    mass: Mass,
    time_step: TimeIncrement,
    inclination: Angle,
    orthogonal: bool,
    acceleration: Acceleration,
    velocity: Velocity,
    scalar_position: Length,
}

impl RailBody {
    /// Creates a body from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RailBodyError::NonPositiveMass`] if the mass is zero or
    /// negative; an invalid body is never constructed.
    pub fn new(config: RailBodyConfig) -> Result<Self, RailBodyError> {
        config.validate()?;
        Ok(Self {
            mass: config.mass,
            time_step: config.time_step,
            inclination: config.inclination,
            orthogonal: config.orthogonal,
            acceleration: config.initial_acceleration,
            velocity: config.initial_velocity,
            scalar_position: config.initial_position.distance_from_origin(),
        })
    }

    /// Sets the acceleration from a command force plus the gravity
    /// component along the rail: `a = (F + m·g·sin(incl)) / m`.
    pub fn apply_force(&mut self, command: Force) {
        let net_force = command + self.mass * standard_gravity() * self.inclination.sin();
        self.acceleration = net_force / self.mass;
    }

    /// Advances the velocity by one explicit Euler step.
    pub fn step_velocity(&mut self) {
        self.velocity += self.acceleration * self.time_step.into_inner();
    }

    /// Advances the scalar position by one explicit Euler step, using the
    /// velocity as already advanced by [`step_velocity`](RailBody::step_velocity).
    pub fn step_position(&mut self) {
        self.scalar_position += self.velocity * self.time_step.into_inner();
    }

    /// Projects the scalar position onto the plane:
    /// `(p·cos(incl) + offset.x, p·sin(incl) + offset.y)`.
    #[must_use]
    pub fn project(&self, offset: PlanePoint) -> PlanePoint {
        PlanePoint::new(
            self.scalar_position * self.inclination.cos() + offset.x,
            self.scalar_position * self.inclination.sin() + offset.y,
        )
    }

    #[must_use]
    pub fn acceleration(&self) -> Acceleration {
        self.acceleration
    }

    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Signed distance travelled along the rail.
    #[must_use]
    pub fn scalar_position(&self) -> Length {
        self.scalar_position
    }

    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass
    }

    #[must_use]
    pub fn inclination(&self) -> Angle {
        self.inclination
    }

    #[must_use]
    pub fn is_orthogonal(&self) -> bool {
        self.orthogonal
    }
}
