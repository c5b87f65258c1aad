use log::{error, info};
use vexide::{adi::AdiPort, prelude::*};

pub struct Pneumatic {
    name: &'static str,
    solenoid: AdiDigitalOut,
    extended: bool,
}

impl Pneumatic {
    /// Starts retracted.
    pub fn new(port: AdiPort, name: &'static str) -> Self {
        let mut solenoid = AdiDigitalOut::new(port);
        solenoid
            .set_low()
            .unwrap_or_else(|e| error!("couldn't retract pneumatic {name}: {e}"));

        Self {
            name,
            solenoid,
            extended: false,
        }
    }

    pub fn extend(&mut self) {
        if !self.extended {
            self.solenoid
                .set_high()
                .unwrap_or_else(|e| error!("couldn't extend pneumatic {}: {e}", self.name));
            self.extended = true;
        }
    }

    pub fn retract(&mut self) {
        if self.extended {
            self.solenoid
                .set_low()
                .unwrap_or_else(|e| error!("couldn't retract pneumatic {}: {e}", self.name));
            self.extended = false;
        }
    }

    pub fn toggle(&mut self) {
        if self.extended {
            self.retract();
        } else {
            self.extend();
        }
        info!("pneumatic {} extended: {}", self.name, self.extended);
    }
}
