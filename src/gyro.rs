//! Heading bookkeeping on top of the inertial sensor's raw rotation.
//!
//! The sensor reports a continuous clockwise rotation in degrees. `Gyro`
//! layers a software zero and an operator trim ("angle adjustment") over it.
//! The trim shifts the field-centric angle only; yaw is untouched.

use crate::utils::wrap_degrees;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Heading {
    /// Heading since the last reset, in `[-180, 180)`.
    pub yaw: f64,
    /// Accumulated heading since the last reset plus the angle adjustment.
    pub angle: f64,
}

/// Changes to apply to the gyro after a teleop cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GyroCommand {
    pub adjustment_delta: f64,
    pub reset: bool,
}

impl GyroCommand {
    pub fn is_noop(&self) -> bool {
        self.adjustment_delta == 0.0 && !self.reset
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Gyro {
    zero: f64,
    adjustment: f64,
}

impl Gyro {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn yaw(&self, raw: f64) -> f64 {
        wrap_degrees(raw - self.zero)
    }

    pub fn angle(&self, raw: f64) -> f64 {
        raw - self.zero + self.adjustment
    }

    pub fn heading(&self, raw: f64) -> Heading {
        Heading {
            yaw: self.yaw(raw),
            angle: self.angle(raw),
        }
    }

    pub fn angle_adjustment(&self) -> f64 {
        self.adjustment
    }

    pub fn set_angle_adjustment(&mut self, degrees: f64) {
        self.adjustment = degrees;
    }

    /// Zeroes yaw and angle at `raw`. The angle adjustment survives.
    pub fn reset(&mut self, raw: f64) {
        self.zero = raw;
    }

    /// Applies the trim first, then the reset.
    pub fn apply(&mut self, command: &GyroCommand, raw: f64) {
        if command.adjustment_delta != 0.0 {
            self.set_angle_adjustment(self.adjustment + command.adjustment_delta);
        }
        if command.reset {
            self.reset(raw);
        }
    }
}
