//! Operator-facing state: the drive-mode chooser (persisted on the SD card
//! and shown on the controller screen) and a periodic diagnostics line with
//! the live hardware state.

use core::time::Duration;

use log::{info, warn};
use mecanum_teleop::{
    drive_mode::{DriveMode, DriveModeSelector},
    input::JoystickState,
};
use vexide::{
    devices::{battery, controller::Controller},
    fs,
    time::Instant,
};

use super::chassis::Chassis;

const DRIVE_MODE_SAVE_PATH: &str = "drive_mode.txt";

pub struct Dashboard {
    pub selector: DriveModeSelector,
    diagnostics_period: Duration,
    last_diagnostics_update: Instant,
}

impl Dashboard {
    pub fn new(diagnostics_period: Duration) -> Self {
        let mut selector = DriveModeSelector::new();
        // load saved selection from sd
        if let Ok(saved) = fs::read_to_string(DRIVE_MODE_SAVE_PATH) {
            match selector.restore(&saved) {
                Ok(mode) => info!("restored drive mode {}", mode),
                Err(e) => warn!("{}; using {}", e, selector.default_mode()),
            }
        }
        Self {
            selector,
            diagnostics_period,
            last_diagnostics_update: Instant::now(),
        }
    }

    pub fn drive_mode(&self) -> DriveMode {
        self.selector.selected()
    }

    /// Moves to the next option in the chooser, wrapping around.
    pub fn toggle_drive_mode(&mut self) -> DriveMode {
        let options = self.selector.options();
        let current = options
            .iter()
            .position(|&(_, mode)| mode == self.selector.selected())
            .unwrap_or(0);
        let (_, mode) = options[(current + 1) % options.len()];
        self.selector.select(mode);
        if fs::write(DRIVE_MODE_SAVE_PATH, mode.label().as_bytes()).is_err() {
            warn!("could not save drive mode to {}", DRIVE_MODE_SAVE_PATH);
        }
        info!("drive mode set to {}", mode);
        mode
    }

    /// Both labels are the same width, so each write covers the last.
    pub async fn show_drive_mode(&self, controller: &mut Controller) {
        let _ = controller
            .screen
            .set_text(self.drive_mode().label(), 1, 1)
            .await;
    }

    pub fn update_diagnostics(&mut self, chassis: &Chassis, joystick: &JoystickState) {
        let now = Instant::now();
        if now.duration_since(self.last_diagnostics_update) < self.diagnostics_period {
            return;
        }
        self.last_diagnostics_update = now;

        let raw = chassis.raw_rotation();
        let wheels = chassis.last_output.wheels;
        info!(
            "mode={} wheels=[{:.2} {:.2} {:.2} {:.2}] shifter={:?} climber={:.2} yaw={:.1} angle={:.1} adjustment={:.3} pov={} battery={:.1}V",
            self.drive_mode(),
            wheels.front_left,
            wheels.front_right,
            wheels.rear_left,
            wheels.rear_right,
            chassis.gear_position,
            chassis.last_output.climber,
            chassis.gyro.yaw(raw),
            chassis.gyro.angle(raw),
            chassis.gyro.angle_adjustment(),
            joystick.pov.degrees(),
            battery::voltage(),
        );
    }
}
