//! Console logger for the V5 brain.
//!
//! Implements the [`log`] facade on top of vexide's `println!`, which goes
//! to the terminal of an attached `cargo v5` session. Each line carries the
//! time since the logger was installed:
//!
//! ```text
//! INFO [1m 42s 310ms] mecanum_teleop::robot - driver control started (Field-Centric)
//! ```

use alloc::boxed::Box;

use log::{LevelFilter, Metadata, Record, SetLoggerError};
use mecanum_teleop::utils::Uptime;
use vexide::{prelude::*, time::Instant};

struct ConsoleLogger {
    start: Instant,
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!(
                "{} [{}] {} - {}",
                record.level(),
                Uptime(self.start.elapsed()),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. Call once, before anything logs.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = Box::leak(Box::new(ConsoleLogger {
        start: Instant::now(),
    }));
    log::set_logger(logger).map(|()| log::set_max_level(level))
}
