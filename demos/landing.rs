// demos/landing.rs

use rocket_landing_control::{
    ControlLaw, ErrorShapingConfig, FlightController, FlightControllerConfig, LanderState,
    LandingController,
};

// Toy planar dynamics standing in for the external physics engine.
const DT: f32 = 0.1;
const GRAVITY: f32 = 0.4;
const MAIN_ACCEL: f32 = 0.8;
const SIDE_ACCEL: f32 = 0.2;
const NOZZLE_LIMIT: f32 = 0.26;

fn main() {
    let mut config = FlightControllerConfig::<f32>::new();

    // Set the PID gains for the throttle, steering, and nozzle channels.
    config.kp_throttle = 0.001;
    config.ki_throttle = 0.0;
    config.kd_throttle = 0.001;

    config.kp_steering = 5.0;
    config.ki_steering = 0.0;
    config.kd_steering = 6.0;

    config.kp_nozzle = 0.085;
    config.ki_nozzle = 0.001;
    config.kd_nozzle = 10.55;

    // Set the maximum magnitude of the integral terms to prevent windup.
    config.i_limit = 3.0;

    // Set the error-shaping constants for the thrust-coupled law.
    let mut shaping = ErrorShapingConfig::<f32>::new();
    shaping.dx_limit = 0.3;
    shaping.dx_gain = 0.4;
    shaping.dy_gain = 0.5;
    shaping.dy_limit = 0.2;
    shaping.tilt_gain = 5.0;
    shaping.drift_gain = 0.2;
    shaping.coupling_gain = 10.0;
    shaping.coupling_floor = 0.5;

    let mut controller =
        LandingController::with_config(config, shaping, ControlLaw::ThrustCoupled);

    // Start above and to the side of the pad, tilted and descending.
    let mut state = LanderState::new(0.3, 1.3, 0.0, -0.1, 0.1, 0.0, false, false);

    println!("                    dx,       dy,    theta |     main,  lateral,   nozzle");
    let mut t = 0.0;
    for _ in 0..=40 {
        // Perform the control computation
        let (main_thrust, lateral_thrust, nozzle_angle) = controller.control(state);

        // print results
        println!(
            "t = {:5.2} {:-8.3}, {:-8.3}, {:-8.3} | {:-8.4}, {:-8.4}, {:-8.4}",
            t, state.dx, state.dy, state.theta, main_thrust, lateral_thrust, nozzle_angle
        );

        // Actuator layer: engine fire thresholds, power bands, and the
        // nozzle deflection limit belong to the simulator, not the
        // controller.
        let main_power = if main_thrust > 0.0 {
            (main_thrust.clamp(0.0, 1.0) + 1.0) * 0.3
        } else {
            0.0
        };
        let side_power = if lateral_thrust.abs() > 0.5 {
            lateral_thrust.signum() * lateral_thrust.abs().clamp(0.5, 1.0)
        } else {
            0.0
        };
        let nozzle = nozzle_angle.clamp(-NOZZLE_LIMIT, NOZZLE_LIMIT);

        // simulate response
        state.omega += (-nozzle * 0.6 - side_power * 0.3 - state.omega * 0.2) * DT;
        state.theta += state.omega * DT;
        state.vel_x += (-side_power * SIDE_ACCEL - main_power * MAIN_ACCEL * state.theta.sin()) * DT;
        state.vel_y += (main_power * MAIN_ACCEL * state.theta.cos() - GRAVITY) * DT;
        state.dx += state.vel_x * DT;
        state.dy += state.vel_y * DT;

        // Touchdown
        if state.dy <= 0.0 {
            state.dy = 0.0;
            state.vel_x = 0.0;
            state.vel_y = 0.0;
            state.left_leg_contact = true;
            state.right_leg_contact = true;
        }

        t += DT;
    }
}
