//! Teleoperated mecanum drive for a V5 competition robot.
//!
//! Everything the robot decides each driver-control cycle lives here and
//! builds without the V5 runtime, so it can be tested on the host. The
//! binary wires it to the hardware.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod drive_mode;
pub mod driver_control;
pub mod gyro;
pub mod input;
pub mod mecanum;
pub mod utils;
