//! Hardware side of the robot: device ownership, the competition lifecycle
//! and the operator dashboard.

pub mod chassis;
pub mod controller;
pub mod dashboard;
pub mod logger;

use log::info;
use mecanum_teleop::{config::TeleopConfig, driver_control::Teleop};
use vexide::{
    devices::{adi::motor::AdiMotor, smart::imu::InertialSensor},
    prelude::*,
};

use self::{
    chassis::{Chassis, ChassisArgs},
    dashboard::Dashboard,
};

pub struct Robot {
    chassis: Chassis,
    teleop: Teleop,
    dashboard: Dashboard,
}

impl Robot {
    pub async fn new(peripherals: Peripherals) -> Self {
        let config = TeleopConfig::default();
        let chassis = Chassis::new(ChassisArgs {
            front_left: Motor::new(peripherals.port_5, Gearset::Green, Direction::Forward),
            rear_left: Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
            front_right: Motor::new(peripherals.port_3, Gearset::Green, Direction::Reverse),
            rear_right: Motor::new(peripherals.port_4, Gearset::Green, Direction::Reverse),
            gear_shifter: AdiMotor::new(peripherals.adi_a, false),
            climber: Motor::new(peripherals.port_6, Gearset::Red, Direction::Forward),
            imu: InertialSensor::new(peripherals.port_7),
            controller: peripherals.primary_controller,
        })
        .await;

        Robot {
            chassis,
            dashboard: Dashboard::new(config.diagnostics_period),
            teleop: Teleop::new(config),
        }
    }

    /// Lets the operator flip the drive mode with the D-pad while the robot
    /// is not driving.
    async fn select_drive_mode(&mut self) {
        self.chassis.stop();
        self.dashboard.show_drive_mode(&mut self.chassis.controller).await;
        loop {
            let state = self.chassis.controller.state().unwrap_or_default();
            if controller::selector_toggle_requested(&state) {
                self.dashboard.toggle_drive_mode();
                self.dashboard.show_drive_mode(&mut self.chassis.controller).await;
            }
            sleep(Controller::UPDATE_INTERVAL).await;
        }
    }
}

impl Compete for Robot {
    async fn connected(&mut self) {
        self.select_drive_mode().await;
    }

    async fn disabled(&mut self) {
        self.select_drive_mode().await;
    }

    async fn autonomous(&mut self) {
        info!("no autonomous routine, holding still");
        self.chassis.stop();
    }

    async fn driver(&mut self) {
        info!("driver control started ({})", self.dashboard.drive_mode());
        self.dashboard.show_drive_mode(&mut self.chassis.controller).await;
        loop {
            let c_state = self.chassis.controller.state().unwrap_or_default();
            let joystick = controller::joystick_state(&c_state);
            let output = self.teleop.step(
                &joystick,
                self.chassis.heading(),
                self.dashboard.drive_mode(),
            );
            self.chassis.apply(&output);
            self.dashboard.update_diagnostics(&self.chassis, &joystick);
            sleep(self.teleop.config().cycle).await;
        }
    }
}
