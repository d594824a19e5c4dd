use crate::{
    config::TeleopConfig,
    drive_mode::DriveMode,
    gyro::{GyroCommand, Heading},
    input::JoystickState,
    mecanum::{MecanumDrive, WheelSpeeds},
    utils::{angle_difference, limit},
};

/// Everything one teleop cycle asks of the hardware.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TeleopOutput {
    pub wheels: WheelSpeeds,
    /// `None` leaves the shifter where it was last put.
    pub gear_shift: Option<f64>,
    pub climber: f64,
    pub gyro: GyroCommand,
}

pub struct Teleop {
    config: TeleopConfig,
    drive: MecanumDrive,
}

impl Teleop {
    pub fn new(config: TeleopConfig) -> Self {
        Self {
            drive: MecanumDrive::new(config.deadband),
            config,
        }
    }

    pub fn config(&self) -> &TeleopConfig {
        &self.config
    }

    pub fn step(&self, joystick: &JoystickState, heading: Heading, mode: DriveMode) -> TeleopOutput {
        TeleopOutput {
            wheels: self.drive(joystick, heading, mode),
            gear_shift: self.gear_shift(joystick),
            climber: self.climber(joystick),
            gyro: self.angle_adjustment(joystick),
        }
    }

    /// Turn request before the speed multiplier. Holding the POV hat steers
    /// toward that heading, otherwise twist turns while its enable button is
    /// held.
    pub fn turn_throttle(&self, joystick: &JoystickState, yaw: f64) -> f64 {
        match joystick.pov.angle() {
            None if joystick.is_pressed(self.config.buttons.twist_enable) => {
                self.config.twist_scale * joystick.twist
            }
            None => 0.0,
            Some(desired) => limit(
                -angle_difference(yaw, desired) * self.config.heading_kp,
                self.config.heading_turn_limit,
            ),
        }
    }

    pub fn drive(&self, joystick: &JoystickState, heading: Heading, mode: DriveMode) -> WheelSpeeds {
        let speed = joystick.speed_multiplier();
        let turn = self.turn_throttle(joystick, heading.yaw);
        let gyro_angle = if mode.is_field_centric() {
            -heading.angle
        } else {
            0.0
        };
        self.drive.drive_cartesian(
            joystick.x * speed,
            -joystick.y * speed,
            turn * self.config.turn_gain * speed,
            gyro_angle,
        )
    }

    pub fn climber(&self, joystick: &JoystickState) -> f64 {
        let buttons = &self.config.buttons;
        if joystick.is_pressed(buttons.climb) {
            self.config.climber_up
        } else if joystick.is_pressed(buttons.climber_lower) {
            self.config.climber_down
        } else {
            0.0
        }
    }

    pub fn gear_shift(&self, joystick: &JoystickState) -> Option<f64> {
        let buttons = &self.config.buttons;
        match (
            joystick.is_pressed(buttons.gear_upper),
            joystick.is_pressed(buttons.gear_lower),
        ) {
            (true, true) => Some(self.config.gear_middle),
            (true, false) => Some(self.config.gear_upper),
            (false, true) => Some(self.config.gear_lower),
            (false, false) => None,
        }
    }

    pub fn angle_adjustment(&self, joystick: &JoystickState) -> GyroCommand {
        let buttons = &self.config.buttons;
        let step = self.config.angle_adjustment_step;
        let mut adjustment_delta = 0.0;
        if joystick.is_pressed(buttons.adjust_up) {
            adjustment_delta += step;
        }
        if joystick.is_pressed(buttons.adjust_down) {
            adjustment_delta -= step;
        }
        GyroCommand {
            adjustment_delta,
            reset: joystick.is_pressed(buttons.gyro_reset),
        }
    }
}
