//! Mecanum drivetrain kinematics.
//!
//! Converts a cartesian drive request (strafe, forward, rotation) into the
//! four wheel outputs of a mecanum chassis, optionally rotating the
//! translation by the gyro angle so the request is field-relative.
//!
//! # Examples
//!
//! ```
//! use mecanum_teleop::mecanum::MecanumDrive;
//!
//! let drive = MecanumDrive::new(0.0);
//!
//! // Straight forward: every wheel turns the same way
//! let wheels = drive.drive_cartesian(0.0, 0.5, 0.0, 0.0);
//! assert_eq!(wheels.as_array(), [0.5, 0.5, 0.5, 0.5]);
//!
//! // Strafe right: diagonals oppose each other
//! let wheels = drive.drive_cartesian(0.5, 0.0, 0.0, 0.0);
//! assert_eq!(wheels.as_array(), [0.5, -0.5, -0.5, 0.5]);
//! ```

use crate::utils::limit;

/// Wheel outputs in `[-1, 1]`, positive driving the robot forward.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WheelSpeeds {
    pub front_left: f64,
    pub front_right: f64,
    pub rear_left: f64,
    pub rear_right: f64,
}

impl WheelSpeeds {
    /// `[front_left, front_right, rear_left, rear_right]`
    pub fn as_array(&self) -> [f64; 4] {
        [self.front_left, self.front_right, self.rear_left, self.rear_right]
    }

    fn from_array([front_left, front_right, rear_left, rear_right]: [f64; 4]) -> Self {
        Self {
            front_left,
            front_right,
            rear_left,
            rear_right,
        }
    }

    /// Scales all four down together when any exceeds unit magnitude.
    pub fn normalized(self) -> Self {
        let speeds = self.as_array();
        let max_magnitude = speeds.iter().fold(0.0_f64, |m, s| m.max(libm::fabs(*s)));
        if max_magnitude > 1.0 {
            Self::from_array(speeds.map(|s| s / max_magnitude))
        } else {
            self
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self::from_array(self.as_array().map(|s| s * factor))
    }
}

/// Zeroes inputs inside `deadband` and rescales the rest so the output still
/// reaches full scale.
pub fn apply_deadband(value: f64, deadband: f64) -> f64 {
    if libm::fabs(value) > deadband {
        if value > 0.0 {
            (value - deadband) / (1.0 - deadband)
        } else {
            (value + deadband) / (1.0 - deadband)
        }
    } else {
        0.0
    }
}

#[derive(Copy, Clone, Debug)]
pub struct MecanumDrive {
    pub deadband: f64,
    pub max_output: f64,
}

impl MecanumDrive {
    pub fn new(deadband: f64) -> Self {
        Self {
            deadband,
            max_output: 1.0,
        }
    }

    /// Computes wheel outputs for a cartesian request.
    ///
    /// `strafe` is positive to the right, `forward` positive ahead and
    /// `rotation` positive clockwise. The translation is rotated by
    /// `-gyro_angle` degrees before mixing; pass `0.0` for robot-centric
    /// driving.
    pub fn drive_cartesian(
        &self,
        strafe: f64,
        forward: f64,
        rotation: f64,
        gyro_angle: f64,
    ) -> WheelSpeeds {
        let strafe = apply_deadband(limit(strafe, 1.0), self.deadband);
        let forward = apply_deadband(limit(forward, 1.0), self.deadband);

        let theta = (-gyro_angle).to_radians();
        let (sin, cos) = (libm::sin(theta), libm::cos(theta));
        let x = strafe * cos - forward * sin;
        let y = strafe * sin + forward * cos;

        WheelSpeeds {
            front_left: x + y + rotation,
            front_right: -x + y - rotation,
            rear_left: -x + y + rotation,
            rear_right: x + y - rotation,
        }
        .normalized()
        .scaled(self.max_output)
    }
}
