//! End-to-end behavior of the demo catch scenario.

use integration_tests::{demo_config, demo_target};
use lariat_sim::Simulation;
use uom::si::{force::newton, length::meter};

#[test]
fn grid_covers_five_seconds_inclusively() {
    let sim = Simulation::new(demo_config()).unwrap();
    assert_eq!(sim.time_grid().len(), 251);
}

#[test]
fn platform_approaches_the_setpoint_without_diverging() {
    let sim = Simulation::new(demo_config()).unwrap();
    let records = sim.run(|_| demo_target()).unwrap();
    let samples = records[0].samples();

    assert_eq!(samples.len(), 251);

    let initial_displacement = samples[0].displacement.get::<meter>();
    for sample in samples {
        let displacement = sample.displacement.get::<meter>();
        assert!(displacement.is_finite());
        // Bounded trajectory: the platform never swings out past where
        // it started.
        assert!(displacement <= initial_displacement);
    }

    // The platform closes most of the initial 60 m gap within 5 s.
    let final_error = (samples.last().unwrap().platform.x.get::<meter>() - 60.0).abs();
    assert!(
        final_error < 3.0,
        "platform ended {final_error} m from the setpoint"
    );
}

#[test]
fn error_terms_replay_exactly_from_gains_and_time_step() {
    let sim = Simulation::new(demo_config()).unwrap();
    let records = sim.run(|_| demo_target()).unwrap();
    let samples = records[0].samples();

    let (kp, ki, kd) = (87.0, 3.867, 163.125);
    let dt = 0.02;
    let setpoint = 60.0;

    // On a flat rail with a zero x offset, the recorded platform x *is*
    // the scalar position, so the controller's entire input sequence can
    // be reconstructed from the record alone.
    let mut measurement = (120.0_f64 * 120.0 + 6.5 * 6.5).sqrt();
    let mut integral = 0.0;
    let mut previous_error = 0.0;

    for sample in samples {
        let error = setpoint - measurement;
        integral += error * dt;
        let derivative = (error - previous_error) / dt;
        previous_error = error;

        assert_eq!(sample.proportional_term.get::<newton>(), kp * error);
        assert_eq!(sample.integral_term.get::<newton>(), ki * integral);
        assert_eq!(sample.derivative_term.get::<newton>(), kd * derivative);

        measurement = sample.platform.x.get::<meter>();
    }
}

#[test]
fn rerunning_the_scenario_reproduces_identical_records() {
    let sim = Simulation::new(demo_config()).unwrap();
    let first = sim.run(|_| demo_target()).unwrap();
    let second = sim.run(|_| demo_target()).unwrap();
    assert_eq!(first, second);
}
