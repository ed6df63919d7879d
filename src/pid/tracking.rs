// src/pid/tracking.rs

//! # Tracking PID Control Module
//!
//! This module provides a compute function and control data structure to
//! perform PID control calculations over a pre-shaped error signal. The
//! host control loop runs at a fixed tick, so the channel integrates raw
//! error samples and differentiates by first difference; no time delta is
//! involved.

use crate::Number;
use piddiy::PidController;

/// Control data for the tracking PID compute callback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackingControlData<T> {
    /// The pre-shaped error sample for this control tick.
    pub error: T,
    /// The maximum magnitude of the integral term, used to prevent
    /// integral windup.
    pub integral_limit: T,
}

/// Tracking PID compute callback.
///
/// The accumulated error is clamped to the symmetric range
/// `[-integral_limit, integral_limit]`, and the derivative is the first
/// difference against the previous error sample. Each call advances the
/// channel memory, so the channel must be computed exactly once per
/// control tick.
pub fn compute_tracking<T: Number>(
    pid: &mut PidController<T, TrackingControlData<T>>,
    data: TrackingControlData<T>,
) -> (T, T, T) {
    let error = data.error;
    let integral = (pid.integral + error).clamp(-data.integral_limit, data.integral_limit);
    let derivative = error - pid.error;

    (error, integral, derivative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    /// Test that the integral term saturates at the positive limit.
    #[test]
    fn test_pid_tracking_integral_clamping() {
        let mut pid = PidController::new();
        pid.compute_fn(compute_tracking).kp(1.0).ki(1.0).kd(0.0);
        let data = TrackingControlData {
            error: 1.0,
            integral_limit: 3.0, // Integral should not exceed this value.
        };

        // This would push the integral to 10 if not clamped.
        for _ in 0..10 {
            let _ = pid.compute(data);
        }

        let (_, integral, _) = compute_tracking(&mut pid, data);
        assert!(
            value_close(3.0, integral),
            "Integral should be clamped to 3."
        );
    }

    /// Test that the integral term saturates at the negative limit.
    ///
    /// The lower bound must mirror the upper one. A sign slip here, such as
    /// comparing the accumulator against the positive limit, would collapse
    /// the integral to the negative limit after a single small sample, so
    /// both the saturated value and an unsaturated intermediate value are
    /// pinned.
    #[test]
    fn test_pid_tracking_negative_integral_clamping() {
        let mut pid = PidController::new();
        pid.compute_fn(compute_tracking).kp(1.0).ki(1.0).kd(0.0);
        let data = TrackingControlData {
            error: -1.0,
            integral_limit: 3.0,
        };

        let _ = pid.compute(data);
        assert!(
            value_close(-1.0, pid.integral),
            "Integral should accumulate freely below the limit."
        );

        for _ in 0..10 {
            let _ = pid.compute(data);
        }

        let (_, integral, _) = compute_tracking(&mut pid, data);
        assert!(
            value_close(-3.0, integral),
            "Integral should be clamped to -3."
        );
    }

    /// Test the PID response to a repeated nonzero error sample.
    #[test]
    fn test_pid_tracking_response() {
        let mut pid = PidController::new();
        pid.compute_fn(compute_tracking).kp(1.0).ki(1.0).kd(1.0);
        let data = TrackingControlData {
            error: 10.0,
            integral_limit: 100.0,
        };

        let (mut error, mut integral, mut derivative) = compute_tracking(&mut pid, data);
        let mut output = pid.compute(data);

        assert!(value_close(10.0, error), "Error should be 10.");
        assert!(
            value_close(10.0, integral),
            "Integral should start to accumulate."
        );
        assert!(value_close(10.0, derivative), "Derivative should be 10.");
        assert!(
            value_close(30.0, output),
            "Output should be the sum of terms."
        );

        // Call again to test accumulation and the first-difference derivative.
        (error, integral, derivative) = compute_tracking(&mut pid, data);
        output = pid.compute(data);
        assert!(value_close(10.0, error), "Error should be 10.");
        assert!(
            value_close(20.0, integral),
            "Integral should accumulate to 20."
        );
        assert!(
            value_close(0.0, derivative),
            "Derivative should be zero for a repeated sample."
        );
        assert!(
            value_close(30.0, output),
            "Output should be the sum of terms."
        );
    }

    /// Test the derivative term across a changing error signal.
    #[test]
    fn test_pid_tracking_derivative() {
        let mut pid = PidController::new();
        pid.compute_fn(compute_tracking).kp(0.0).ki(0.0).kd(1.0);
        let first = TrackingControlData {
            error: 2.0,
            integral_limit: 100.0,
        };
        let second = TrackingControlData {
            error: -1.0,
            integral_limit: 100.0,
        };

        let output = pid.compute(first);
        assert!(
            value_close(2.0, output),
            "First derivative should step from zero."
        );

        let output = pid.compute(second);
        assert!(
            value_close(-3.0, output),
            "Derivative should be the first difference."
        );
    }

    /// Test that the PID computes zero output for zero error with zero
    /// initial conditions.
    #[test]
    fn test_pid_tracking_zero_conditions() {
        let mut pid = PidController::new();
        pid.compute_fn(compute_tracking).kp(1.0).ki(1.0).kd(1.0);
        let data = TrackingControlData {
            error: 0.0,
            integral_limit: 3.0,
        };
        let (error, integral, derivative) = compute_tracking(&mut pid, data);
        let output = pid.compute(data);

        assert!(value_close(0.0, error), "Error should be zero.");
        assert!(value_close(0.0, integral), "Integral should be zero.");
        assert!(value_close(0.0, derivative), "Derivative should be zero.");
        assert!(value_close(0.0, output), "Output should be zero.");
    }
}
