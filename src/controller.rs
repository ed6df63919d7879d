// src/controller.rs

//! # Landing Controller Module
//!
//! This module provides the shared interface for PID-based landing
//! controllers and the barge-landing controller built on it.

pub mod flight_controller;
pub use flight_controller::*;
pub mod landing;
pub use landing::*;
