use core::time::Duration;

use crate::input::Button;

/// Which joystick button drives which action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ButtonBindings {
    /// Held to let stick twist turn the robot.
    pub twist_enable: Button,
    pub gear_lower: Button,
    pub climber_lower: Button,
    pub gear_upper: Button,
    pub climb: Button,
    pub gyro_reset: Button,
    pub adjust_up: Button,
    pub adjust_down: Button,
}

impl Default for ButtonBindings {
    fn default() -> Self {
        Self {
            twist_enable: Button::new(1),
            gear_lower: Button::new(3),
            climber_lower: Button::new(4),
            gear_upper: Button::new(5),
            climb: Button::new(6),
            gyro_reset: Button::new(10),
            adjust_up: Button::new(11),
            adjust_down: Button::new(12),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct TeleopConfig {
    pub deadband: f64,
    pub twist_scale: f64,
    /// Turn command per degree of heading error while the POV hat is held.
    pub heading_kp: f64,
    pub heading_turn_limit: f64,
    pub turn_gain: f64,

    pub climber_up: f64,
    pub climber_down: f64,

    pub gear_upper: f64,
    pub gear_middle: f64,
    pub gear_lower: f64,

    /// Degrees added to or removed from the angle adjustment per cycle.
    pub angle_adjustment_step: f64,

    /// Driver loop period. The trim rate is `angle_adjustment_step / cycle`
    /// (56.25 degrees per second at 20 ms).
    pub cycle: Duration,
    pub diagnostics_period: Duration,

    pub buttons: ButtonBindings,
}

impl Default for TeleopConfig {
    fn default() -> Self {
        Self {
            deadband: 0.18,
            twist_scale: 0.6,
            heading_kp: 0.02,
            heading_turn_limit: 0.4,
            turn_gain: 2.0,

            climber_up: 1.0,
            climber_down: -0.3,

            gear_upper: 0.73,
            gear_middle: 0.48,
            gear_lower: 0.35,

            angle_adjustment_step: 1.125,

            cycle: Duration::from_millis(20),
            diagnostics_period: Duration::from_millis(100),

            buttons: ButtonBindings::default(),
        }
    }
}
