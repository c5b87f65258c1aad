use std::time::Duration;

use evian::{
    control::loops::{AngularPid, Pid},
    prelude::Tolerances,
};
use log::LevelFilter;

pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

// Motor commands
pub const MAX_VOLTAGE: f64 = 12.0;
/// Volts per unit of the 127-step motor command scale.
pub const COMMAND_TO_VOLTS: f64 = MAX_VOLTAGE / 127.0;

// Tracking
pub const TRACKING_WHEEL_DIAMETER: f64 = 3.25;
pub const HORIZONTAL_WHEEL_OFFSET: f64 = 0.0;
pub const VERTICAL_WHEEL_OFFSET: f64 = 0.0;

// PID
// Gains are tuned against the 127-step command scale per inch and per degree,
// then converted to volts per inch and volts per radian.
pub const LINEAR_KP: f64 = 10.0 * COMMAND_TO_VOLTS;
pub const LINEAR_KD: f64 = 3.0 * COMMAND_TO_VOLTS;
pub const ANGULAR_KP: f64 = f64::to_degrees(2.0 * COMMAND_TO_VOLTS);
pub const ANGULAR_KD: f64 = f64::to_degrees(10.0 * COMMAND_TO_VOLTS);

pub const LINEAR_PID: Pid = Pid::new(LINEAR_KP, 0.0, LINEAR_KD, Some(3.0));
pub const ANGULAR_PID: AngularPid = AngularPid::new(ANGULAR_KP, 0.0, ANGULAR_KD, None);
/// Heading correction while seeking a point.
pub const SEEKING_LATERAL_PID: Pid =
    Pid::new(ANGULAR_KP, 0.0, ANGULAR_KD, Some(f64::to_radians(3.0)));

// Tolerances
pub const LINEAR_ERROR_TOLERANCE: f64 = 1.0;
pub const ANGULAR_ERROR_TOLERANCE: f64 = f64::to_radians(1.0);

pub const LINEAR_TOLERANCES: Tolerances = Tolerances::new()
    .error(LINEAR_ERROR_TOLERANCE)
    .duration(Duration::from_millis(100));
pub const ANGULAR_TOLERANCES: Tolerances = Tolerances::new()
    .error(ANGULAR_ERROR_TOLERANCE)
    .duration(Duration::from_millis(100));

// Intake
/// Raw optical proximity of 100 out of 255.
pub const BALL_PROXIMITY_THRESHOLD: f64 = 100.0 / 255.0;
pub const STORE_LIFT_VOLTAGE: f64 = 65.0 * COMMAND_TO_VOLTS;

// Autonomous
pub const AUTON_TARGET: (f64, f64) = (24.0, 0.0);
pub const AUTON_MOVE_TIMEOUT: Duration = Duration::from_millis(2000);

// Driver control
pub const DRIVER_LOOP_INTERVAL: Duration = Duration::from_millis(20);
pub const CARDINAL_TURN_TIMEOUT: Duration = Duration::from_millis(1000);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_command_is_full_voltage() {
        assert!((127.0 * COMMAND_TO_VOLTS - MAX_VOLTAGE).abs() < 1e-9);
    }

    #[test]
    fn store_lift_runs_about_half_power() {
        assert!((STORE_LIFT_VOLTAGE - 6.1417).abs() < 1e-3);
        assert!(STORE_LIFT_VOLTAGE < MAX_VOLTAGE);
    }

    #[test]
    fn proximity_threshold_is_normalized() {
        assert!(BALL_PROXIMITY_THRESHOLD > 0.39 && BALL_PROXIMITY_THRESHOLD < 0.40);
    }

    #[test]
    fn linear_gains_are_volts_per_inch() {
        assert!((LINEAR_KP - 0.9449).abs() < 1e-4);
        assert!((LINEAR_KD - 0.2835).abs() < 1e-4);
        assert_eq!(LINEAR_ERROR_TOLERANCE, 1.0);
    }

    #[test]
    fn angular_gains_are_volts_per_radian() {
        // 2 command units per degree
        assert!((ANGULAR_KP - 10.8275).abs() < 1e-3);
        assert!((ANGULAR_KD - 54.1375).abs() < 1e-3);
        // one radian of error asks for more than one degree does
        assert!(ANGULAR_KP > 2.0 * COMMAND_TO_VOLTS);
    }

    #[test]
    fn angular_tolerance_is_one_degree_in_radians() {
        assert!((ANGULAR_ERROR_TOLERANCE - 0.017_453).abs() < 1e-6);
        assert!(ANGULAR_ERROR_TOLERANCE < LINEAR_ERROR_TOLERANCE);
    }
}
