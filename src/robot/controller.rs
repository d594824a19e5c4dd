//! Maps the V5 controller onto the flight-stick model the teleop logic reads.
//!
//! | V5 control         | joystick          |
//! |--------------------|-------------------|
//! | left stick X / Y   | `x` / `y`         |
//! | right stick X      | `twist`           |
//! | right stick Y      | `throttle`        |
//! | D-pad              | POV hat           |
//!
//! Face and shoulder buttons take flight-stick numbers: R2 is 1 (the
//! trigger), L2 3, B 4, L1 5, X 6, A 10, Y 11 and R1 12.
//!
//! Unlike a flight-stick throttle lever, the right stick springs back to
//! centre. Released, it reads 0 and the robot drives at half speed. Full
//! speed needs the right stick held fully up, and holding it fully down
//! stops the drive.

use mecanum_teleop::input::{Button, ButtonSet, JoystickState, Pov};
use vexide::devices::controller::{ButtonState, ControllerState};

fn button_numbers(state: &ControllerState) -> [(&ButtonState, u8); 8] {
    [
        (&state.button_r2, 1),
        (&state.button_l2, 3),
        (&state.button_b, 4),
        (&state.button_l1, 5),
        (&state.button_x, 6),
        (&state.button_a, 10),
        (&state.button_y, 11),
        (&state.button_r1, 12),
    ]
}

pub fn joystick_state(state: &ControllerState) -> JoystickState {
    let buttons: ButtonSet = button_numbers(state)
        .into_iter()
        .filter(|(button, _)| button.is_pressed())
        .map(|(_, number)| Button::new(number))
        .collect();
    JoystickState {
        x: state.left_stick.x(),
        // V5 sticks read positive when pushed away from the driver
        y: -state.left_stick.y(),
        twist: state.right_stick.x(),
        // springs back to centre (half speed) when released
        throttle: state.right_stick.y(),
        pov: Pov::from_dpad(
            state.button_up.is_pressed(),
            state.button_right.is_pressed(),
            state.button_down.is_pressed(),
            state.button_left.is_pressed(),
        ),
        buttons,
    }
}

/// D-pad left or right was just pressed. Only read while disabled, when the
/// POV hat has no other job.
pub fn selector_toggle_requested(state: &ControllerState) -> bool {
    state.button_left.is_now_pressed() || state.button_right.is_now_pressed()
}
