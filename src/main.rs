mod auton;
mod banner;
mod consts;
mod heading;
mod intake;
mod lcd;
mod logger;
mod opcontrol;
mod pneumatic;

use evian::{
    drivetrain::model::{Arcade, Differential},
    math::Angle,
    motion::Basic,
    prelude::*,
    tracking::wheeled::{TrackingWheel, WheeledTracking},
};
use log::{error, info};
use vexide::{prelude::*, smart::SmartPort};

use crate::{
    banner::THEME_BUTTERFINGERS, intake::Intake, lcd::Lcd, logger::RobotLogger,
    opcontrol::DriverInputs, pneumatic::Pneumatic,
};

static LOGGER: RobotLogger = RobotLogger;

struct Butterfingers {
    dt: Drivetrain<Differential, WheeledTracking>,
    intake: Intake,
    pneumatic_c: Pneumatic,
    pneumatic_d: Pneumatic,
    lcd: Lcd,
    ctrl: Controller,
}

impl Butterfingers {
    /// Turns in place to whichever of 0, 90, 180 or 270 degrees is closest.
    async fn align_to_cardinal(&mut self) {
        let current = self.dt.tracking.heading().as_degrees();
        let target = heading::nearest_cardinal(current);
        info!(
            "aligning from compass {:.2} to {}",
            heading::compass_degrees(current),
            heading::compass_degrees(target)
        );

        let mut basic = Basic {
            linear_controller: consts::LINEAR_PID,
            angular_controller: consts::ANGULAR_PID,
            linear_tolerances: consts::LINEAR_TOLERANCES,
            angular_tolerances: consts::ANGULAR_TOLERANCES,
            timeout: Some(consts::CARDINAL_TURN_TIMEOUT),
        };
        basic
            .turn_to_heading(&mut self.dt, Angle::from_degrees(target))
            .await;
    }

    fn show_pose(&mut self) {
        let position = self.dt.tracking.position();
        let heading = heading::compass_degrees(self.dt.tracking.heading().as_degrees());

        self.lcd.set_text(0, &format!("X: {:.2}, Y: {:.2}", position.x(), position.y()));
        self.lcd.set_text(1, &format!("Heading: {heading:.2}"));
    }
}

impl Compete for Butterfingers {
    async fn connected(&mut self) {
        info!("competition control connected");
    }

    async fn disabled(&mut self) {
        info!("disabled");
        self.intake
            .stop_intake()
            .unwrap_or_else(|e| error!("couldn't stop intake: {e}"));
    }

    async fn autonomous(&mut self) {
        auton::auton(self).await;
    }

    async fn driver(&mut self) {
        info!("driver control started");
        loop {
            let state = self.ctrl.state().unwrap_or_default();
            let inputs = DriverInputs::read(&state);

            if inputs.run_auton {
                auton::auton(self).await;
            }

            if inputs.toggle_c {
                self.pneumatic_c.toggle();
            }
            if inputs.toggle_d {
                self.pneumatic_d.toggle();
            }

            if inputs.align {
                self.align_to_cardinal().await;
            }

            self.dt
                .model
                .drive_arcade(inputs.throttle, inputs.steer)
                .unwrap_or_else(|e| error!("couldn't set drivetrain voltages: {e}"));

            self.intake
                .run(inputs.intake)
                .unwrap_or_else(|e| error!("couldn't drive intake: {e}"));

            self.show_pose();
            sleep(consts::DRIVER_LOOP_INTERVAL).await;
        }
    }
}

#[vexide::main(banner(theme = THEME_BUTTERFINGERS))]
async fn main(peris: Peripherals) {
    if let Err(e) = LOGGER.init(consts::LOG_LEVEL) {
        println!("couldn't install logger: {e}");
    }

    fn motor(port: SmartPort, direction: Direction) -> Motor {
        Motor::new(port, Gearset::Green, direction)
    }

    let mut lcd = Lcd::new(peris.display);
    lcd.set_text(1, "Butterfingers Robot");
    lcd.set_text(2, "Calibrating...");

    let mut imu = InertialSensor::new(peris.port_13);
    match imu.calibrate().await {
        Ok(()) => info!("imu calibrated"),
        Err(e) => error!("imu calibration failed: {e}"),
    }

    let mut robot = Butterfingers {
        dt: Drivetrain {
            model: Differential::new(
                [
                    motor(peris.port_1, Direction::Reverse),
                    motor(peris.port_2, Direction::Reverse),
                    motor(peris.port_3, Direction::Reverse),
                ],
                [
                    motor(peris.port_4, Direction::Forward),
                    motor(peris.port_8, Direction::Forward),
                    motor(peris.port_10, Direction::Forward),
                ],
            ),
            tracking: WheeledTracking::new(
                (0.0, 0.0),
                Angle::from_degrees(heading::compass_degrees(0.0)),
                [TrackingWheel::new(
                    AdiEncoder::<360>::new(peris.adi_g, peris.adi_h),
                    consts::TRACKING_WHEEL_DIAMETER,
                    consts::VERTICAL_WHEEL_OFFSET,
                    None,
                )],
                [TrackingWheel::new(
                    AdiEncoder::<360>::new(peris.adi_a, peris.adi_b),
                    consts::TRACKING_WHEEL_DIAMETER,
                    consts::HORIZONTAL_WHEEL_OFFSET,
                    None,
                )],
                Some(imu),
            ),
        },
        intake: Intake::new(
            motor(peris.port_7, Direction::Forward),
            motor(peris.port_5, Direction::Forward),
            motor(peris.port_6, Direction::Forward),
            OpticalSensor::new(peris.port_20),
        ),
        pneumatic_c: Pneumatic::new(peris.adi_c, "C"),
        pneumatic_d: Pneumatic::new(peris.adi_d, "D"),
        lcd,
        ctrl: peris.primary_controller,
    };

    robot.lcd.set_text(2, "Ready!");
    info!("robot ready");

    robot.compete().await;
}
