#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;

/// Environment variable read by `init_logging`.
pub const LOG_ENV: &str = "BATTLEGRID_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    // stdout belongs to the caller's output (the sim prints JSON there).
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn level_from_env() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Initialize logging with a level taken from `BATTLEGRID_LOG`, defaulting to
/// `info`. Returns `false` if a logger was already installed.
pub fn init_logging() -> bool {
    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(level_from_env()))
        .is_ok()
}
