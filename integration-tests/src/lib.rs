//! Shared fixtures for Lariat integration tests.

use lariat_components::{body::RailBodyConfig, controller::PidGains};
use lariat_core::{PlanePoint, TimeIncrement};
use lariat_sim::{CaptureWindow, FreeFallTarget, SimulationConfig};
use uom::{
    ConstZero,
    si::{
        angle::radian,
        f64::{Acceleration, Angle, Length, Mass, Time, Velocity},
        length::meter,
        mass::kilogram,
        time::second,
    },
};

/// The demo catch scenario: a 100 kg platform on a flat rail, starting
/// at (120, 6.5) m, chasing a target released at (60, 30) m over a 5 s
/// grid at 20 ms steps, with Ziegler–Nichols-style gains.
#[must_use]
pub fn demo_config() -> SimulationConfig {
    SimulationConfig {
        body: RailBodyConfig {
            mass: Mass::new::<kilogram>(100.0),
            time_step: TimeIncrement::new::<second>(0.02).unwrap(),
            inclination: Angle::new::<radian>(0.0),
            orthogonal: false,
            initial_acceleration: Acceleration::ZERO,
            initial_velocity: Velocity::ZERO,
            initial_position: PlanePoint::from_si(120.0, 6.5),
        },
        gains: PidGains::from_si(87.0, 3.867, 163.125),
        trial_count: 1,
        start_time: Time::new::<second>(0.0),
        end_time: Time::new::<second>(5.0),
        projection_offset: PlanePoint::from_si(0.0, 6.5),
        capture: Some(CaptureWindow {
            half_width: Length::new::<meter>(8.0),
            half_height: Length::new::<meter>(3.0),
        }),
    }
}

/// The demo scenario's falling target.
#[must_use]
pub fn demo_target() -> FreeFallTarget {
    FreeFallTarget {
        release: PlanePoint::from_si(60.0, 30.0),
    }
}
