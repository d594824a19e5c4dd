use log::{info, warn};
use mecanum_teleop::{
    driver_control::TeleopOutput,
    gyro::{Gyro, Heading},
    mecanum::WheelSpeeds,
};
use vexide::{
    devices::{
        adi::motor::AdiMotor,
        controller::Controller,
        smart::imu::{InertialError, InertialSensor},
    },
    prelude::*,
};

pub struct Chassis {
    pub front_left: Motor,
    pub rear_left: Motor,
    pub front_right: Motor,
    pub rear_right: Motor,
    /// PWM output positioning the gear-shift servo.
    pub gear_shifter: AdiMotor,
    pub climber: Motor,
    pub imu: InertialSensor,
    pub controller: Controller,
    pub gyro: Gyro,
    pub last_output: TeleopOutput,
    pub gear_position: Option<f64>,
}

pub struct ChassisArgs {
    pub front_left: Motor,
    pub rear_left: Motor,
    pub front_right: Motor,
    pub rear_right: Motor,
    pub gear_shifter: AdiMotor,
    pub climber: Motor,
    pub imu: InertialSensor,
    pub controller: Controller,
}

impl Chassis {
    pub async fn new(mut args: ChassisArgs) -> Self {
        info!("calibrating IMU");
        match args.imu.calibrate().await {
            Ok(_) => info!("IMU calibration successful"),
            Err(e) => {
                let msg = match e {
                    InertialError::CalibrationTimedOut => "IMU calibration timed out",
                    InertialError::Port { .. } => "IMU not detected on the configured port",
                    InertialError::BadStatus => "IMU failed to report status",
                    _ => "IMU calibration error",
                };
                warn!("{}: {:?}", msg, e);
            }
        }
        let _ = args.imu.reset_rotation();

        let mut gyro = Gyro::new();
        gyro.reset(args.imu.rotation().unwrap_or_default());

        let _ = args.controller.screen.clear_screen().await;
        Self {
            front_left: args.front_left,
            rear_left: args.rear_left,
            front_right: args.front_right,
            rear_right: args.rear_right,
            gear_shifter: args.gear_shifter,
            climber: args.climber,
            imu: args.imu,
            controller: args.controller,
            gyro,
            last_output: TeleopOutput::default(),
            gear_position: None,
        }
    }

    /// Continuous clockwise rotation straight from the sensor.
    pub fn raw_rotation(&self) -> f64 {
        self.imu.rotation().unwrap_or_default()
    }

    pub fn heading(&self) -> Heading {
        self.gyro.heading(self.raw_rotation())
    }

    fn set_wheels(&mut self, wheels: &WheelSpeeds) {
        let volts = Motor::V5_MAX_VOLTAGE;
        let _ = self.front_left.set_voltage(wheels.front_left * volts);
        let _ = self.front_right.set_voltage(wheels.front_right * volts);
        let _ = self.rear_left.set_voltage(wheels.rear_left * volts);
        let _ = self.rear_right.set_voltage(wheels.rear_right * volts);
    }

    pub fn apply(&mut self, output: &TeleopOutput) {
        self.set_wheels(&output.wheels);
        if let Some(position) = output.gear_shift {
            let _ = self.gear_shifter.set_output(position);
            self.gear_position = Some(position);
        }
        let _ = self.climber.set_voltage(output.climber * Motor::V5_MAX_VOLTAGE);

        if !output.gyro.is_noop() {
            let raw = self.raw_rotation();
            self.gyro.apply(&output.gyro, raw);
            if output.gyro.reset {
                info!("gyro reset at raw rotation {:.1}", raw);
            }
        }
        self.last_output = *output;
    }

    /// Stops the drive and the climber. The shifter keeps its position.
    pub fn stop(&mut self) {
        self.set_wheels(&WheelSpeeds::default());
        let _ = self.climber.set_voltage(0.0);
        self.last_output = TeleopOutput {
            gear_shift: self.gear_position,
            ..TeleopOutput::default()
        };
    }
}
