use evian::{math::Angle, motion::Seeking, prelude::*};
use log::{error, info};

use crate::{Butterfingers, consts, heading};

/// Grab a ball while driving to a point 24 inches right of the starting pose.
///
/// The pose is reset to the origin facing compass 0 (+y), so the target sits
/// on the robot's right.
pub async fn auton(robot: &mut Butterfingers) {
    robot.lcd.set_text(3, "Auton Started!");
    info!("autonomous started");

    robot.dt.tracking.set_position((0.0, 0.0));
    robot.dt.tracking.set_heading(Angle::from_degrees(heading::compass_degrees(0.0)));
    robot.lcd.set_text(4, "Pose Set");

    robot
        .intake
        .intake_store()
        .unwrap_or_else(|e| error!("couldn't start intake: {e}"));
    robot.lcd.set_text(5, "Intake Running");

    let mut seeking = Seeking {
        linear_controller: consts::LINEAR_PID,
        lateral_controller: consts::SEEKING_LATERAL_PID,
        tolerances: consts::LINEAR_TOLERANCES,
        timeout: Some(consts::AUTON_MOVE_TIMEOUT),
    };
    seeking.move_to_point(&mut robot.dt, consts::AUTON_TARGET).await;
    robot.lcd.set_text(6, "Movement Done");

    robot
        .intake
        .stop_intake()
        .unwrap_or_else(|e| error!("couldn't stop intake: {e}"));
    robot.lcd.set_text(7, "Auton Complete");
    info!("autonomous complete at {}", robot.dt.tracking.position());
}
