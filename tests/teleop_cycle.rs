use mecanum_teleop::{
    config::TeleopConfig,
    drive_mode::{DriveMode, DriveModeSelector},
    driver_control::Teleop,
    gyro::Gyro,
    input::{Button, ButtonSet, JoystickState, Pov},
    mecanum::apply_deadband,
};

fn stick(buttons: &[u8]) -> JoystickState {
    JoystickState {
        throttle: 1.0,
        buttons: buttons.iter().map(|&n| Button::new(n)).collect::<ButtonSet>(),
        ..Default::default()
    }
}

/// Crude chassis: each cycle the robot turns by the commanded spin.
fn spin(output: &mecanum_teleop::driver_control::TeleopOutput) -> f64 {
    (output.wheels.front_left - output.wheels.front_right) / 2.0
}

#[test]
fn pov_hold_brings_heading_to_target() {
    let teleop = Teleop::new(TeleopConfig::default());
    let gyro = Gyro::new();
    let mut raw = 0.0;
    let js = JoystickState {
        pov: Pov::Angle(270),
        ..stick(&[])
    };

    for _ in 0..500 {
        let out = teleop.step(&js, gyro.heading(raw), DriveMode::RobotCentric);
        raw += spin(&out) * 5.0;
    }
    let yaw = gyro.yaw(raw);
    assert!((yaw + 90.0).abs() < 1.0, "settled at {yaw}");
}

#[test]
fn pov_hold_takes_the_short_way_round() {
    let teleop = Teleop::new(TeleopConfig::default());
    let gyro = Gyro::new();
    let raw = 170.0;
    let js = JoystickState {
        pov: Pov::Angle(180),
        ..stick(&[])
    };
    // 10 degrees to go clockwise: the spin is clockwise
    let out = teleop.step(&js, gyro.heading(raw), DriveMode::RobotCentric);
    assert!(spin(&out) > 0.0);

    // from -170 the short way to 180 is counter-clockwise
    let out = teleop.step(&js, gyro.heading(-170.0), DriveMode::RobotCentric);
    assert!(spin(&out) < 0.0);
}

#[test]
fn held_adjust_buttons_accumulate_per_cycle_and_reset_keeps_trim() {
    let teleop = Teleop::new(TeleopConfig::default());
    let mut gyro = Gyro::new();
    let raw = 30.0;

    for _ in 0..8 {
        let out = teleop.step(&stick(&[11]), gyro.heading(raw), DriveMode::FieldCentric);
        gyro.apply(&out.gyro, raw);
    }
    assert_eq!(gyro.angle_adjustment(), 9.0);

    let out = teleop.step(&stick(&[12, 10]), gyro.heading(raw), DriveMode::FieldCentric);
    gyro.apply(&out.gyro, raw);
    assert_eq!(gyro.angle_adjustment(), 7.875);
    assert_eq!(gyro.yaw(raw), 0.0);
    assert_eq!(gyro.angle(raw), 7.875);
}

#[test]
fn one_second_of_held_trim_adds_its_per_second_rate() {
    let config = TeleopConfig::default();
    let teleop = Teleop::new(config);
    let mut gyro = Gyro::new();
    let cycles_per_second = 1000 / config.cycle.as_millis();

    for _ in 0..cycles_per_second {
        let out = teleop.step(&stick(&[11]), gyro.heading(0.0), DriveMode::FieldCentric);
        gyro.apply(&out.gyro, 0.0);
    }
    assert_eq!(cycles_per_second, 50);
    assert_eq!(gyro.angle_adjustment(), 56.25);
}

#[test]
fn field_centric_forward_tracks_the_field_after_turning() {
    let teleop = Teleop::new(TeleopConfig::default());
    let gyro = Gyro::new();
    let forward = JoystickState {
        y: -1.0,
        ..stick(&[])
    };

    let facing_field = teleop.step(&forward, gyro.heading(0.0), DriveMode::FieldCentric);
    assert_eq!(facing_field.wheels.as_array(), [1.0; 4]);

    // robot turned around: field-forward means driving backwards
    let turned = teleop.step(&forward, gyro.heading(180.0), DriveMode::FieldCentric);
    for w in turned.wheels.as_array() {
        assert!((w + 1.0).abs() < 1e-9, "{turned:?}");
    }

    // robot-centric ignores the turn
    let robot = teleop.step(&forward, gyro.heading(180.0), DriveMode::RobotCentric);
    assert_eq!(robot.wheels.as_array(), [1.0; 4]);
}

#[test]
fn released_throttle_stick_drives_at_half_speed() {
    let teleop = Teleop::new(TeleopConfig::default());
    let gyro = Gyro::new();
    let forward = |throttle| JoystickState {
        y: -1.0,
        throttle,
        ..stick(&[])
    };

    // half the stick, then the deadband rescale
    let released = teleop.step(&forward(0.0), gyro.heading(0.0), DriveMode::RobotCentric);
    let half = apply_deadband(0.5, TeleopConfig::default().deadband);
    for w in released.wheels.as_array() {
        assert!((w - half).abs() < 1e-12, "{released:?}");
    }
    assert!(half > 0.35 && half < 0.5);

    let held_up = teleop.step(&forward(1.0), gyro.heading(0.0), DriveMode::RobotCentric);
    assert_eq!(held_up.wheels.as_array(), [1.0; 4]);

    let held_down = teleop.step(&forward(-1.0), gyro.heading(0.0), DriveMode::RobotCentric);
    assert_eq!(held_down.wheels.as_array(), [0.0; 4]);
}

#[test]
fn gear_shifter_holds_between_presses() {
    let teleop = Teleop::new(TeleopConfig::default());
    let gyro = Gyro::new();
    let presses: [&[u8]; 5] = [&[5], &[], &[3, 5], &[], &[3]];
    let mut shifter = None;
    for buttons in presses {
        let out = teleop.step(&stick(buttons), gyro.heading(0.0), DriveMode::FieldCentric);
        shifter = out.gear_shift.or(shifter);
        if buttons.is_empty() {
            assert!(out.gear_shift.is_none());
        }
    }
    assert_eq!(shifter, Some(0.35));
}

#[test]
fn selector_choice_drives_the_gyro_correction() {
    let teleop = Teleop::new(TeleopConfig::default());
    let gyro = Gyro::new();
    let mut selector = DriveModeSelector::new();
    let strafe = JoystickState {
        x: 1.0,
        ..stick(&[])
    };

    let field = teleop.step(&strafe, gyro.heading(90.0), selector.selected());
    selector.toggle();
    let robot = teleop.step(&strafe, gyro.heading(90.0), selector.selected());
    assert_ne!(field.wheels, robot.wheels);
    assert_eq!(robot.wheels.as_array(), [1.0, -1.0, -1.0, 1.0]);
}
