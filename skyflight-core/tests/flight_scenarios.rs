use skyflight_core::{
    ControlAction, ControlInput, FlightConfig, FlightIntegrator, FlightSession, FlightState,
    KeyHub, derive_stats,
};
use std::f64::consts::FRAC_PI_3;

const FRAME: f64 = 1.0 / 60.0;

fn every_combination() -> Vec<ControlInput> {
    (0u16..256)
        .map(|mask| {
            ControlAction::ALL
                .into_iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, action)| action)
                .collect()
        })
        .collect()
}

#[test]
fn holding_pitch_up_for_one_second_clamps_at_sixty_degrees() {
    let hub = KeyHub::new();
    let mut session = FlightSession::start(&hub, FlightConfig::default()).unwrap();
    hub.key_down("w");

    for _ in 0..60 {
        session.tick(FRAME).unwrap();
    }

    assert_eq!(session.state().orientation().pitch, FRAC_PI_3);
    assert!((session.output().stats.pitch_deg - 60.0).abs() < 1e-9);
}

#[test]
fn holding_speed_increase_for_two_seconds_tops_out() {
    let hub = KeyHub::new();
    let mut session = FlightSession::start(&hub, FlightConfig::default()).unwrap();
    hub.key_down("ArrowUp");

    let mut previous = session.state().velocity();
    for _ in 0..120 {
        let output = session.tick(FRAME).unwrap();
        let velocity = session.state().velocity();
        assert!(velocity <= previous);
        assert!(output.stats.speed <= 150.0);
        previous = velocity;
    }

    assert_eq!(session.state().velocity(), -150.0);
    assert_eq!(session.output().stats.speed, 150.0);
}

#[test]
fn holding_speed_decrease_bottoms_out() {
    let integrator = FlightIntegrator::default();
    let mut state = integrator.initial_state();
    let slow = ControlInput::none().with(ControlAction::SpeedDecrease);

    let mut previous = state.velocity();
    for _ in 0..60 {
        integrator.step(&mut state, slow, FRAME).unwrap();
        assert!(state.velocity() >= previous);
        previous = state.velocity();
    }
    assert_eq!(state.velocity(), -20.0);
}

#[test]
fn invariants_hold_for_every_key_combination_and_delta() {
    let integrator = FlightIntegrator::default();
    let deltas = [0.0, 0.001, FRAME, 1.0 / 30.0, 0.25, 1.0, 10.0];

    for input in every_combination() {
        let mut state = integrator.initial_state();
        for delta in deltas {
            integrator.step(&mut state, input, delta).unwrap();

            let orientation = state.orientation();
            assert!(orientation.pitch.abs() <= FRAC_PI_3);
            assert!(orientation.roll.abs() <= FRAC_PI_3);
            assert!((-150.0..=-20.0).contains(&state.velocity()));
            assert!(state.position().y >= 10.0);
        }
    }
}

#[test]
fn zero_delta_leaves_everything_bit_identical() {
    let hub = KeyHub::new();
    let mut session = FlightSession::start(&hub, FlightConfig::default()).unwrap();
    for key in ["w", "a", "q", "arrowup"] {
        hub.key_down(key);
    }
    for _ in 0..10 {
        session.tick(FRAME).unwrap();
    }

    let before_state = session.state().clone();
    let before_output = session.output();
    let output = session.tick(0.0).unwrap();

    assert_eq!(session.state(), &before_state);
    assert_eq!(output, before_output);
    let bits = |v: glam::DVec3| v.to_array().map(f64::to_bits);
    assert_eq!(bits(output.camera.position), bits(before_output.camera.position));
    assert_eq!(bits(output.pose.position), bits(before_output.pose.position));
}

#[test]
fn camera_never_snaps_to_target() {
    let integrator = FlightIntegrator::default();
    let mut state = integrator.initial_state();
    let offset = integrator.config().camera_offset;

    // Starts coincident with its target.
    let start = state.camera().position;
    assert_eq!(start, state.position() + offset);

    let input = ControlInput::none().with(ControlAction::YawLeft);
    integrator.step(&mut state, input, FRAME).unwrap();

    let target = state.position() + state.orientation().rotate(offset);
    let travelled = (state.camera().position - start).length();
    let remaining = (target - start).length();
    assert!(remaining > 0.0);
    assert!((travelled / remaining - 0.1).abs() < 1e-9);
}

#[test]
fn stats_are_a_pure_function_of_state() {
    let integrator = FlightIntegrator::default();
    let mut state = integrator.initial_state();
    let input = ControlInput::none()
        .with(ControlAction::RollRight)
        .with(ControlAction::PitchUp);
    for _ in 0..30 {
        integrator.step(&mut state, input, FRAME).unwrap();
    }

    let copy: FlightState = state.clone();
    assert_eq!(derive_stats(&state), derive_stats(&copy));
    assert_eq!(derive_stats(&state), derive_stats(&state));
}

#[test]
fn stopping_a_session_releases_the_keyboard() {
    let hub = KeyHub::new();
    for _ in 0..3 {
        let session = FlightSession::start(&hub, FlightConfig::default()).unwrap();
        assert_eq!(hub.subscriber_count(), 1);
        session.stop();
    }
    assert_eq!(hub.subscriber_count(), 0);
}
