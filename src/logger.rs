use std::time::Duration;

use log::{
    Level, LevelFilter, Log, Metadata, Record, SetLoggerError, max_level, set_logger, set_max_level,
};

const RESET: &str = "\x1B[0m";

fn level_color(level: Level) -> &'static str {
    match level {
        Level::Error => "\x1B[31m",
        Level::Warn => "\x1B[33m",
        Level::Info => "\x1B[34m",
        Level::Debug => "\x1B[36m",
        Level::Trace => "\x1B[37m",
    }
}

/// `MM:SS.mmm` since the user program started.
fn uptime_stamp(uptime: Duration) -> String {
    format!(
        "{:02}:{:02}.{:03}",
        uptime.as_secs() / 60,
        uptime.as_secs() % 60,
        uptime.subsec_millis()
    )
}

/// Writes records to the brain's serial terminal.
pub struct RobotLogger;

impl RobotLogger {
    pub fn init(&'static self, level: LevelFilter) -> Result<(), SetLoggerError> {
        set_logger(self)?;
        set_max_level(level);

        Ok(())
    }
}

impl Log for RobotLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // module name without the crate prefix
        let target = record.target().rsplit("::").next().unwrap_or_default();

        println!(
            "{} {}[{:<5}]{RESET} {target}: {}",
            uptime_stamp(vexide::time::user_uptime()),
            level_color(record.level()),
            record.level(),
            record.args()
        );
    }

    fn flush(&self) {}
}
