// src/controller/landing.rs

//! # PID Barge-Landing Flight Controller
//!
//! This module provides the landing controller for a rocket booster
//! descending onto a floating barge. Three tracking PID channels cover the
//! main-engine throttle, the lateral side thrust, and the nozzle angle.
//! The raw kinematic state is shaped into per-channel error signals, and
//! two control laws are available: a baseline law with independent
//! channels, and a thrust-coupled law that caps the vertical-offset term
//! and scales steering authority with the throttle command.
//!
//! Once both landing legs report contact, the thrust commands are zeroed
//! while the nozzle command passes through. The channels keep computing
//! through grounded ticks; their integral and derivative memory is never
//! reset.

use crate::pid::{compute_tracking, TrackingControlData};
use crate::{
    ErrorShapingConfig, FlightController, FlightControllerConfig, LanderState, Number,
};
use piddiy::PidController;

/// Selects the error-shaping and coupling formulas of the landing control
/// law.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlLaw {
    /// The vertical offset feeds the throttle channel unweighted by any
    /// cap, and the steering output is independent of the throttle output.
    Baseline,
    /// The vertical offset is magnitude-capped at `dy_limit` before it
    /// feeds the throttle channel, and the steering output is scaled by
    /// `max(throttle output * coupling_gain, coupling_floor)`.
    ThrustCoupled,
}

/// Struct representing the PID barge-landing flight controller.
pub struct LandingController<T: Number> {
    throttle_pid: PidController<T, TrackingControlData<T>>,
    steering_pid: PidController<T, TrackingControlData<T>>,
    nozzle_pid: PidController<T, TrackingControlData<T>>,
    i_limit: T,
    shaping: ErrorShapingConfig<T>,
    law: ControlLaw,
}

impl<T: Number> LandingController<T> {
    /// Creates a new controller using the provided configuration and
    /// control law.
    pub fn with_config(
        config: FlightControllerConfig<T>,
        shaping: ErrorShapingConfig<T>,
        law: ControlLaw,
    ) -> Self {
        let mut throttle_pid = PidController::new();
        throttle_pid
            .compute_fn(compute_tracking)
            .kp(config.kp_throttle)
            .ki(config.ki_throttle)
            .kd(config.kd_throttle);

        let mut steering_pid = PidController::new();
        steering_pid
            .compute_fn(compute_tracking)
            .kp(config.kp_steering)
            .ki(config.ki_steering)
            .kd(config.kd_steering);

        let mut nozzle_pid = PidController::new();
        nozzle_pid
            .compute_fn(compute_tracking)
            .kp(config.kp_nozzle)
            .ki(config.ki_nozzle)
            .kd(config.kd_nozzle);

        LandingController {
            throttle_pid,
            steering_pid,
            nozzle_pid,
            i_limit: config.i_limit,
            shaping,
            law,
        }
    }

    /// Creates a new controller with default settings and the baseline law.
    pub fn new() -> Self {
        Self::with_config(
            FlightControllerConfig::new(),
            ErrorShapingConfig::new(),
            ControlLaw::Baseline,
        )
    }
}

impl<T: Number> Default for LandingController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Number> FlightController<T> for LandingController<T> {
    fn control(&mut self, state: LanderState<T>) -> (T, T, T) {
        let LanderState {
            dx,
            dy,
            theta,
            left_leg_contact,
            right_leg_contact,
            ..
        } = state;

        // Shape the kinematic state into per-channel error signals. The
        // horizontal offset's contribution to the throttle error is capped;
        // the thrust-coupled law also caps the vertical offset.
        let descent = match self.law {
            ControlLaw::Baseline => dy,
            ControlLaw::ThrustCoupled => dy.clamp(-self.shaping.dy_limit, self.shaping.dy_limit),
        };
        let throttle_error =
            dx.abs().min(self.shaping.dx_limit) * self.shaping.dx_gain - descent * self.shaping.dy_gain;
        let steering_error = theta * self.shaping.tilt_gain;
        let nozzle_error = theta + dx * self.shaping.drift_gain;

        // Compute the channels. Throttle goes first; its output feeds the
        // steering coupling.
        let mut main_thrust = self.throttle_pid.compute(TrackingControlData {
            error: throttle_error,
            integral_limit: self.i_limit,
        });
        let mut lateral_thrust = self.steering_pid.compute(TrackingControlData {
            error: steering_error,
            integral_limit: self.i_limit,
        });
        let nozzle_angle = self.nozzle_pid.compute(TrackingControlData {
            error: nozzle_error,
            integral_limit: self.i_limit,
        });

        // Steering authority follows the throttle command, never dropping
        // below the configured floor.
        if self.law == ControlLaw::ThrustCoupled {
            lateral_thrust = lateral_thrust
                * (main_thrust * self.shaping.coupling_gain).max(self.shaping.coupling_floor);
        }

        // Touchdown override: with both legs in contact the thrust
        // commands are zeroed. Channel memory is not reset.
        if left_leg_contact && right_leg_contact {
            main_thrust = T::zero();
            lateral_thrust = T::zero();
        }

        (main_thrust, lateral_thrust, nozzle_angle)
    }
}
