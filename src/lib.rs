// src/lib.rs

//! # PID Landing Control for a Barge-Landing Rocket
//!
//! This crate provides a `no_std`, no-alloc PID flight-control system for a
//! rocket booster descending onto a floating barge. A generic single-axis
//! PID channel tracks pre-shaped error signals, and a landing controller
//! composes three such channels (throttle, lateral steering, nozzle
//! orientation) into actuator commands for one control tick, including the
//! touchdown override that shuts the engines down once both landing legs
//! report contact.

#![no_std]
#![deny(missing_docs)]

pub mod controller;
pub mod pid;

#[doc(inline)]
pub use controller::*;

#[cfg(test)]
mod test_utils;
