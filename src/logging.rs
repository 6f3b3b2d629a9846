//! Stderr logger for the console games.
//!
//! Game output owns stdout, so log lines go to stderr and stay quiet unless
//! `GRIDGAMES_LOG` asks for more than warnings.

use std::env;
use std::io::{self, Write};

use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "GRIDGAMES_LOG";

const CRATE_TARGET: &str = "gridgames";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with(CRATE_TARGET)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let module = record
            .target()
            .strip_prefix("gridgames::")
            .unwrap_or(record.target());
        eprintln!("[{:<5} {}] {}", record.level(), module, record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name (`debug`, `WARN`, `off`) or a verbosity digit, `0`
/// meaning off and `5` meaning trace.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    let value = value.trim();
    match value {
        "0" => Some(LevelFilter::Off),
        "1" => Some(LevelFilter::Error),
        "2" => Some(LevelFilter::Warn),
        "3" => Some(LevelFilter::Info),
        "4" => Some(LevelFilter::Debug),
        "5" => Some(LevelFilter::Trace),
        _ => value.parse().ok(),
    }
}

/// Install the stderr logger with the level from `GRIDGAMES_LOG`, `warn`
/// when unset or unreadable. Returns the level in effect.
pub fn init_logging() -> LevelFilter {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| parse_level(&lvl))
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    level
}
