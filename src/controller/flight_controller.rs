// src/controller/flight_controller.rs

//! A module specifying the shared interface for PID-based landing
//! controllers. This module is designed for embedded and simulation use in
//! no_std environments. It includes the kinematic state consumed from the
//! external simulator, configuration structures for PID gains and
//! error-shaping constants, and a trait defining the control functionality.

use piddiy::Number as PiddiyNumber;

/// Custom trait to encapsulate base number requirements.
pub trait Number: PiddiyNumber {
    /// Clamps generic PartialOrd values within a given range.
    fn clamp(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if max < self {
            max
        } else {
            self
        }
    }

    /// Returns the magnitude of the value.
    fn abs(self) -> Self {
        if self < Self::zero() {
            Self::zero() - self
        } else {
            self
        }
    }

    /// Returns the smaller of two values.
    fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two values.
    fn max(self, other: Self) -> Self {
        if self < other {
            other
        } else {
            self
        }
    }
}

impl<T: PiddiyNumber> Number for T {}

/// Kinematic state of the lander for one control tick, as reported by the
/// external simulator. The controller consumes it read-only.
///
/// Offsets are measured from the landing pad, the tilt angle is expressed
/// in radians and may wrap, and the contact flags report whether each
/// landing leg touches the barge. No magnitude invariant is enforced on the
/// offsets here; the control law clamps defensively. Behavior is undefined
/// for non-finite components, which the simulator is responsible for never
/// producing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LanderState<T> {
    /// Horizontal offset from the landing pad.
    pub dx: T,
    /// Vertical offset from the landing pad.
    pub dy: T,
    /// Horizontal velocity.
    pub vel_x: T,
    /// Vertical velocity.
    pub vel_y: T,
    /// Body tilt angle in radians.
    pub theta: T,
    /// Angular velocity.
    pub omega: T,
    /// Whether the left landing leg touches the barge.
    pub left_leg_contact: bool,
    /// Whether the right landing leg touches the barge.
    pub right_leg_contact: bool,
}

impl<T> LanderState<T> {
    /// Creates a state from the simulator's ordered fields:
    /// `(dx, dy, vel_x, vel_y, theta, omega, left contact, right contact)`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        dx: T,
        dy: T,
        vel_x: T,
        vel_y: T,
        theta: T,
        omega: T,
        left_leg_contact: bool,
        right_leg_contact: bool,
    ) -> Self {
        Self {
            dx,
            dy,
            vel_x,
            vel_y,
            theta,
            omega,
            left_leg_contact,
            right_leg_contact,
        }
    }
}

/// Configuration for PID gains and the anti-windup limit.
#[derive(Clone, Copy)]
pub struct FlightControllerConfig<T: Number> {
    /// Proportional gain for the throttle channel.
    pub kp_throttle: T,
    /// Integral gain for the throttle channel.
    pub ki_throttle: T,
    /// Derivative gain for the throttle channel.
    pub kd_throttle: T,
    /// Proportional gain for the steering channel.
    pub kp_steering: T,
    /// Integral gain for the steering channel.
    pub ki_steering: T,
    /// Derivative gain for the steering channel.
    pub kd_steering: T,
    /// Proportional gain for the nozzle channel.
    pub kp_nozzle: T,
    /// Integral gain for the nozzle channel.
    pub ki_nozzle: T,
    /// Derivative gain for the nozzle channel.
    pub kd_nozzle: T,
    /// Maximum magnitude of each channel's integral term, used to prevent
    /// integral windup.
    pub i_limit: T,
}

impl<T: Number> FlightControllerConfig<T> {
    /// Creates a new configuration with placeholder values: unit
    /// proportional gains, zero integral and derivative gains, and the
    /// stock anti-windup limit of 3. The gains should be replaced with
    /// values tuned for the vehicle.
    ///
    /// Example Usage
    /// ```
    /// use rocket_landing_control::{
    ///     ControlLaw, ErrorShapingConfig, FlightControllerConfig, LandingController,
    /// };
    ///
    /// let mut config = FlightControllerConfig::<f32>::new();
    ///
    /// // Set the PID gains for the throttle, steering, and nozzle channels.
    /// config.kp_throttle = 0.001;
    /// config.ki_throttle = 0.0;
    /// config.kd_throttle = 0.001;
    ///
    /// config.kp_steering = 5.0;
    /// config.ki_steering = 0.0;
    /// config.kd_steering = 6.0;
    ///
    /// config.kp_nozzle = 0.085;
    /// config.ki_nozzle = 0.001;
    /// config.kd_nozzle = 10.55;
    ///
    /// // Set the maximum magnitude of the integral terms to prevent windup.
    /// config.i_limit = 3.0;
    ///
    /// // Set the error-shaping constants of the control law.
    /// let mut shaping = ErrorShapingConfig::<f32>::new();
    /// shaping.dx_limit = 0.3;
    /// shaping.dx_gain = 0.4;
    /// shaping.dy_gain = 0.2;
    /// shaping.dy_limit = 0.2;
    /// shaping.tilt_gain = 5.0;
    /// shaping.drift_gain = 0.2;
    /// shaping.coupling_gain = 10.0;
    /// shaping.coupling_floor = 0.5;
    ///
    /// // The configuration is ready to use.
    /// let controller = LandingController::with_config(config, shaping, ControlLaw::Baseline);
    /// ```
    pub fn new() -> Self {
        let three = T::one() + T::one() + T::one();
        Self {
            kp_throttle: T::one(),
            ki_throttle: T::zero(),
            kd_throttle: T::zero(),
            kp_steering: T::one(),
            ki_steering: T::zero(),
            kd_steering: T::zero(),
            kp_nozzle: T::one(),
            ki_nozzle: T::zero(),
            kd_nozzle: T::zero(),
            i_limit: three,
        }
    }
}

/// Configuration for the error-shaping and coupling constants of the
/// landing control law.
///
/// The reference tuning for the production vehicle is: `dx_limit = 0.3`,
/// `dx_gain = 0.4`, `dy_gain = 0.2` (baseline law) or `0.5` (thrust-coupled
/// law), `dy_limit = 0.2`, `tilt_gain = 5`, `drift_gain = 0.2`,
/// `coupling_gain = 10`, and `coupling_floor = 0.5`.
#[derive(Clone, Copy)]
pub struct ErrorShapingConfig<T: Number> {
    /// Magnitude cap on the horizontal offset fed to the throttle channel.
    pub dx_limit: T,
    /// Weight of the capped horizontal offset in the throttle error.
    pub dx_gain: T,
    /// Weight of the vertical offset in the throttle error.
    pub dy_gain: T,
    /// Magnitude cap on the vertical offset, applied by the thrust-coupled
    /// law before weighting.
    pub dy_limit: T,
    /// Scale applied to the tilt angle to form the steering error.
    pub tilt_gain: T,
    /// Weight of the horizontal offset added to the tilt angle to form the
    /// nozzle error.
    pub drift_gain: T,
    /// Scale applied to the throttle output when it modulates the steering
    /// output in the thrust-coupled law.
    pub coupling_gain: T,
    /// Lower bound on the steering authority factor in the thrust-coupled
    /// law.
    pub coupling_floor: T,
}

impl<T: Number> ErrorShapingConfig<T> {
    /// Creates a new configuration with unit placeholder values. These
    /// should be replaced with the constants of the deployed control law;
    /// see the type-level documentation for the reference tuning.
    pub fn new() -> Self {
        Self {
            dx_limit: T::one(),
            dx_gain: T::one(),
            dy_gain: T::one(),
            dy_limit: T::one(),
            tilt_gain: T::one(),
            drift_gain: T::one(),
            coupling_gain: T::one(),
            coupling_floor: T::one(),
        }
    }
}

/// A trait for flight controllers that map the lander's kinematic state to
/// actuator commands, one invocation per control tick.
pub trait FlightController<T: Number> {
    /// Takes the current kinematic state and computes the actuator commands
    /// for one control tick.
    ///
    /// Returns a tuple of (main thrust, lateral thrust, nozzle angle)
    /// commands. The commands are unclamped; actuator limits and units are
    /// the responsibility of the external actuator layer. Each call
    /// advances the controller's internal channel memory, so a state must
    /// be fed exactly once.
    fn control(&mut self, state: LanderState<T>) -> (T, T, T);
}
