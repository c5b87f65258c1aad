use log::warn;
use vexide::{prelude::*, smart::PortError};

use crate::consts::{self, MAX_VOLTAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    Store,
    OuttakeTop,
    OuttakeMiddle,
    OuttakeBottom,
    #[default]
    Stop,
}

impl Command {
    /// Picks the intake command for the held buttons, first match wins.
    pub const fn from_buttons(r1: bool, r2: bool, l1: bool, l2: bool) -> Self {
        if r1 {
            Self::Store
        } else if r2 {
            Self::OuttakeTop
        } else if l1 {
            Self::OuttakeMiddle
        } else if l2 {
            Self::OuttakeBottom
        } else {
            Self::Stop
        }
    }

    /// Voltages for the front/bottom, middle and back/top stages.
    ///
    /// `ball_held` only matters while storing: the middle stage lifts a ball
    /// once the optical sensor sees one and otherwise stays still.
    pub fn voltages(self, ball_held: bool) -> [f64; 3] {
        match self {
            Self::Store => [
                -MAX_VOLTAGE,
                if ball_held {
                    consts::STORE_LIFT_VOLTAGE
                } else {
                    0.0
                },
                0.0,
            ],
            Self::OuttakeTop => [-MAX_VOLTAGE, MAX_VOLTAGE, MAX_VOLTAGE],
            Self::OuttakeMiddle => [-MAX_VOLTAGE, MAX_VOLTAGE, -MAX_VOLTAGE],
            Self::OuttakeBottom => [MAX_VOLTAGE, -MAX_VOLTAGE, 0.0],
            Self::Stop => [0.0, 0.0, 0.0],
        }
    }
}

pub fn is_ball(proximity: f64) -> bool {
    proximity > consts::BALL_PROXIMITY_THRESHOLD
}

pub struct Intake {
    front_bottom: Motor,
    middle: Motor,
    back_top: Motor,
    optical: OpticalSensor,
}

impl Intake {
    pub fn new(
        front_bottom: Motor,
        middle: Motor,
        back_top: Motor,
        optical: OpticalSensor,
    ) -> Self {
        Self {
            front_bottom,
            middle,
            back_top,
            optical,
        }
    }

    fn ball_held(&self) -> bool {
        match self.optical.proximity() {
            Ok(proximity) => is_ball(proximity),
            Err(e) => {
                // keep pulling even if the sensor drops out
                warn!("couldn't read ball sensor, {e}");
                false
            }
        }
    }

    fn set_stages(&mut self, [front_bottom, middle, back_top]: [f64; 3]) -> Result<(), PortError> {
        self.front_bottom.set_voltage(front_bottom)?;
        self.middle.set_voltage(middle)?;
        self.back_top.set_voltage(back_top)?;

        Ok(())
    }

    pub fn run(&mut self, command: Command) -> Result<(), PortError> {
        match command {
            Command::Store => self.intake_store(),
            Command::OuttakeTop => self.outtake_top(),
            Command::OuttakeMiddle => self.outtake_middle(),
            Command::OuttakeBottom => self.outtake_bottom(),
            Command::Stop => self.stop_intake(),
        }
    }

    pub fn intake_store(&mut self) -> Result<(), PortError> {
        let ball_held = self.ball_held();
        self.set_stages(Command::Store.voltages(ball_held))
    }

    pub fn outtake_top(&mut self) -> Result<(), PortError> {
        self.set_stages(Command::OuttakeTop.voltages(false))
    }

    pub fn outtake_middle(&mut self) -> Result<(), PortError> {
        self.set_stages(Command::OuttakeMiddle.voltages(false))
    }

    pub fn outtake_bottom(&mut self) -> Result<(), PortError> {
        self.set_stages(Command::OuttakeBottom.voltages(false))
    }

    pub fn stop_intake(&mut self) -> Result<(), PortError> {
        self.set_stages(Command::Stop.voltages(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_resolve_in_priority_order() {
        assert_eq!(Command::from_buttons(true, true, true, true), Command::Store);
        assert_eq!(
            Command::from_buttons(false, true, true, true),
            Command::OuttakeTop
        );
        assert_eq!(
            Command::from_buttons(false, false, true, true),
            Command::OuttakeMiddle
        );
        assert_eq!(
            Command::from_buttons(false, false, false, true),
            Command::OuttakeBottom
        );
        assert_eq!(
            Command::from_buttons(false, false, false, false),
            Command::Stop
        );
    }

    #[test]
    fn store_only_lifts_when_ball_is_seen() {
        assert_eq!(Command::Store.voltages(false), [-MAX_VOLTAGE, 0.0, 0.0]);
        assert_eq!(
            Command::Store.voltages(true),
            [-MAX_VOLTAGE, consts::STORE_LIFT_VOLTAGE, 0.0]
        );
    }

    #[test]
    fn outtakes_ignore_ball_sensor() {
        for command in [
            Command::OuttakeTop,
            Command::OuttakeMiddle,
            Command::OuttakeBottom,
            Command::Stop,
        ] {
            assert_eq!(command.voltages(true), command.voltages(false));
        }
    }

    #[test]
    fn outtake_directions() {
        assert_eq!(
            Command::OuttakeTop.voltages(false),
            [-MAX_VOLTAGE, MAX_VOLTAGE, MAX_VOLTAGE]
        );
        assert_eq!(
            Command::OuttakeMiddle.voltages(false),
            [-MAX_VOLTAGE, MAX_VOLTAGE, -MAX_VOLTAGE]
        );
        assert_eq!(
            Command::OuttakeBottom.voltages(false),
            [MAX_VOLTAGE, -MAX_VOLTAGE, 0.0]
        );
        assert_eq!(Command::default().voltages(false), [0.0; 3]);
    }

    #[test]
    fn ball_threshold_is_strict() {
        assert!(!is_ball(consts::BALL_PROXIMITY_THRESHOLD));
        assert!(is_ball(0.5));
        assert!(!is_ball(0.0));
    }
}
