use lariat_core::TimeIncrement;
use serde::{Deserialize, Serialize};
use uom::{
    ConstZero,
    si::{
        ISQ, Quantity, SI,
        f64::{Force, Length, Time, Velocity},
        force::newton,
        length::meter,
        time::second,
    },
    typenum::{N1, N2, N3, P1, Z0},
};

/// Proportional gain: force per unit of position error (N/m).
pub type ProportionalGain = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Integral gain: force per unit of accumulated position error (N/(m·s)).
pub type IntegralGain = Quantity<ISQ<Z0, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Derivative gain: force per unit of error rate (N·s/m).
pub type DerivativeGain = Quantity<ISQ<Z0, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Position error accumulated over time (m·s).
pub type ErrorIntegral = Quantity<ISQ<P1, Z0, P1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// PID gains, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidGains {
    pub kp: ProportionalGain,
    pub ki: IntegralGain,
    pub kd: DerivativeGain,
}

impl PidGains {
    /// Creates gains from raw SI values (N/m, N/(m·s), N·s/m).
    #[must_use]
    pub fn from_si(kp: f64, ki: f64, kd: f64) -> Self {
        let unit_length = Length::new::<meter>(1.0);
        let unit_time = Time::new::<second>(1.0);
        Self {
            kp: Force::new::<newton>(kp) / unit_length,
            ki: Force::new::<newton>(ki) / (unit_length * unit_time),
            kd: Force::new::<newton>(kd) * unit_time / unit_length,
        }
    }
}

/// A discrete PID feedback controller acting on a position error.
///
/// Each [`compute`](PidController::compute) call updates the error, its
/// running time integral, and a backward-difference derivative, then
/// returns the weighted sum as an actuation force.
///
/// The integral is a running sum of `error * dt` since construction with
/// no reset, clamping, or anti-windup, and the output is not saturated:
/// the command grows without bound if the loop never converges. NaN
/// inputs propagate through unmodified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidController {
    gains: PidGains,
    time_step: TimeIncrement,
    error: Length,
    integral_error: ErrorIntegral,
    previous_error: Length,
    derivative_error: Velocity,
}

impl PidController {
    /// Creates a controller with zeroed error state.
    ///
    /// The [`TimeIncrement`] type guarantees a strictly positive time
    /// step, so the derivative term can never divide by zero.
    #[must_use]
    pub fn new(gains: PidGains, time_step: TimeIncrement) -> Self {
        Self {
            gains,
            time_step,
            error: Length::ZERO,
            integral_error: ErrorIntegral::ZERO,
            previous_error: Length::ZERO,
            derivative_error: Velocity::ZERO,
        }
    }

    #[must_use]
    pub fn gains(&self) -> PidGains {
        self.gains
    }

    #[must_use]
    pub fn time_step(&self) -> TimeIncrement {
        self.time_step
    }

    /// Computes the actuation command for one tick.
    ///
    /// Sets `error = setpoint - measurement`, accumulates
    /// `integral_error += error * dt`, differences
    /// `derivative_error = (error - previous_error) / dt`, and returns
    /// `kp*error + ki*integral_error + kd*derivative_error`.
    pub fn compute(&mut self, measurement: Length, setpoint: Length) -> Force {
        let dt = self.time_step.into_inner();
        self.error = setpoint - measurement;
        self.integral_error += self.error * dt;
        self.derivative_error = (self.error - self.previous_error) / dt;
        self.previous_error = self.error;
        self.proportional_term() + self.integral_term() + self.derivative_term()
    }

    /// The most recent `kp * error` contribution. Observational only.
    #[must_use]
    pub fn proportional_term(&self) -> Force {
        self.gains.kp * self.error
    }

    /// The most recent `ki * integral_error` contribution. Observational only.
    #[must_use]
    pub fn integral_term(&self) -> Force {
        self.gains.ki * self.integral_error
    }

    /// The most recent `kd * derivative_error` contribution. Observational only.
    #[must_use]
    pub fn derivative_term(&self) -> Force {
        self.gains.kd * self.derivative_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn controller(kp: f64, ki: f64, kd: f64, dt: f64) -> PidController {
        PidController::new(
            PidGains::from_si(kp, ki, kd),
            TimeIncrement::new::<second>(dt).unwrap(),
        )
    }

    #[test]
    fn zero_initial_error_commands_nothing() {
        let mut pid = controller(87.0, 3.867, 163.125, 0.02);
        let at_setpoint = Length::new::<meter>(42.0);

        let command = pid.compute(at_setpoint, at_setpoint);

        assert_eq!(command, Force::ZERO);
        assert_eq!(pid.proportional_term(), Force::ZERO);
        assert_eq!(pid.integral_term(), Force::ZERO);
        assert_eq!(pid.derivative_term(), Force::ZERO);
    }

    #[test]
    fn first_step_matches_the_update_formulas() {
        let mut pid = controller(2.0, 0.5, 0.1, 0.1);

        let command = pid.compute(Length::new::<meter>(1.0), Length::new::<meter>(4.0));

        // error = 3, integral = 0.3, derivative = 30
        assert_relative_eq!(pid.proportional_term().get::<newton>(), 6.0);
        assert_relative_eq!(pid.integral_term().get::<newton>(), 0.15);
        assert_relative_eq!(pid.derivative_term().get::<newton>(), 3.0);
        assert_relative_eq!(command.get::<newton>(), 9.15);
    }

    #[test]
    fn integral_accumulates_without_windup_protection() {
        let mut pid = controller(0.0, 1.0, 0.0, 0.5);
        let measurement = Length::new::<meter>(0.0);
        let setpoint = Length::new::<meter>(10.0);

        for step in 1..=100 {
            let command = pid.compute(measurement, setpoint);
            // Constant error of 10 m adds 5 m·s per step, forever.
            assert_relative_eq!(command.get::<newton>(), 5.0 * f64::from(step));
        }
    }

    #[test]
    fn derivative_sees_the_change_between_calls() {
        let mut pid = controller(0.0, 0.0, 1.0, 0.5);
        let setpoint = Length::new::<meter>(10.0);

        pid.compute(Length::new::<meter>(0.0), setpoint);
        let command = pid.compute(Length::new::<meter>(4.0), setpoint);

        // Error moved 10 -> 6, so the backward difference is -8 m/s.
        assert_relative_eq!(command.get::<newton>(), -8.0);
    }

    #[test]
    fn nan_measurement_propagates() {
        let mut pid = controller(1.0, 1.0, 1.0, 0.02);
        let command = pid.compute(Length::new::<meter>(f64::NAN), Length::new::<meter>(1.0));
        assert!(command.is_nan());
    }
}
