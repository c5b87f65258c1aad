//! Controller layout for driver control.

use vexide::controller::ControllerState;

use crate::intake::Command;

/// Everything the driver loop acts on for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverInputs {
    /// UP (held): run the autonomous routine.
    pub run_auton: bool,
    /// RIGHT (new press)
    pub toggle_c: bool,
    /// LEFT (new press)
    pub toggle_d: bool,
    /// Y (new press): turn to the nearest cardinal heading.
    pub align: bool,
    pub throttle: f64,
    pub steer: f64,
    pub intake: Command,
}

impl DriverInputs {
    pub fn read(state: &ControllerState) -> Self {
        Self {
            run_auton: state.button_up.is_pressed(),
            toggle_c: state.button_right.is_now_pressed(),
            toggle_d: state.button_left.is_now_pressed(),
            align: state.button_y.is_now_pressed(),
            throttle: throttle(state.left_stick.y(), state.button_a.is_pressed()),
            steer: state.right_stick.x(),
            intake: Command::from_buttons(
                state.button_r1.is_pressed(),
                state.button_r2.is_pressed(),
                state.button_l1.is_pressed(),
                state.button_l2.is_pressed(),
            ),
        }
    }
}

/// Forward stick value, flipped while the robot is driven back-first.
pub fn throttle(forward: f64, reversed: bool) -> f64 {
    if reversed { -forward } else { forward }
}
