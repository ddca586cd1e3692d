#![cfg(feature = "std")]

use log::{LevelFilter, Log, Metadata, Record};
use std::env;

/// Minimal stdout logger for the sim binary and examples.
struct StdoutLogger;

static LOGGER: StdoutLogger = StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("[{:5}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the stdout logger. The level comes from `SEABATTLE_LOG`
/// (`error`..`trace`), defaulting to `info` when unset or unparseable.
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let level = match env::var("SEABATTLE_LOG") {
        Ok(raw) => raw.parse().unwrap_or(LevelFilter::Info),
        Err(_) => LevelFilter::Info,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
