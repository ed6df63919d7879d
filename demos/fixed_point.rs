// demos/fixed_point.rs

use fixed::types::I16F16;
use rocket_landing_control::{
    ControlLaw, ErrorShapingConfig, FlightController, FlightControllerConfig, LanderState,
    LandingController,
};

fn main() {
    let mut config = FlightControllerConfig::<I16F16>::new();

    // Set the PID gains for the throttle, steering, and nozzle channels.
    config.kp_throttle = I16F16::from_num(0.001);
    config.ki_throttle = I16F16::from_num(0.0);
    config.kd_throttle = I16F16::from_num(0.001);

    config.kp_steering = I16F16::from_num(5.0);
    config.ki_steering = I16F16::from_num(0.0);
    config.kd_steering = I16F16::from_num(6.0);

    config.kp_nozzle = I16F16::from_num(0.085);
    config.ki_nozzle = I16F16::from_num(0.001);
    config.kd_nozzle = I16F16::from_num(10.55);

    // Set the maximum magnitude of the integral terms to prevent windup.
    config.i_limit = I16F16::from_num(3.0);

    // Set the error-shaping constants for the baseline law.
    let mut shaping = ErrorShapingConfig::<I16F16>::new();
    shaping.dx_limit = I16F16::from_num(0.3);
    shaping.dx_gain = I16F16::from_num(0.4);
    shaping.dy_gain = I16F16::from_num(0.2);
    shaping.dy_limit = I16F16::from_num(0.2);
    shaping.tilt_gain = I16F16::from_num(5.0);
    shaping.drift_gain = I16F16::from_num(0.2);
    shaping.coupling_gain = I16F16::from_num(10.0);
    shaping.coupling_floor = I16F16::from_num(0.5);

    let mut controller = LandingController::with_config(config, shaping, ControlLaw::Baseline);

    // Start above and to the side of the pad, tilted slightly.
    let mut state = LanderState::new(
        I16F16::from_num(0.2),
        I16F16::from_num(1.0),
        I16F16::ZERO,
        I16F16::ZERO,
        I16F16::from_num(0.1),
        I16F16::ZERO,
        false,
        false,
    );

    let dt = I16F16::from_num(0.1);
    let descent = I16F16::from_num(0.05);
    let steer_response = I16F16::from_num(0.02);

    println!("                    dx,       dy,    theta |     main,  lateral,   nozzle");
    let mut t = I16F16::ZERO;
    for _ in 0..=20 {
        // Perform the control computation
        let (main_thrust, lateral_thrust, nozzle_angle) = controller.control(state);

        // print results
        println!(
            "t = {:5.2} {:-8.3}, {:-8.3}, {:-8.3} | {:-8.4}, {:-8.4}, {:-8.4}",
            t, state.dx, state.dy, state.theta, main_thrust, lateral_thrust, nozzle_angle
        );

        // simulate response
        state.theta -= nozzle_angle * steer_response;
        state.dy -= descent;

        // Touchdown
        if state.dy <= I16F16::ZERO {
            state.dy = I16F16::ZERO;
            state.left_leg_contact = true;
            state.right_leg_contact = true;
        }

        t += dt;
    }
}
