//! Routing for records emitted through the `log` facade
//!
//! After [`init_log_bridge`], `log::info!` and friends reach the global
//! registry. The record target (by default the module path) is used as the
//! logger name, so each module gets its own configured logger.

use log::{LevelFilter, Log, Metadata, Record as FacadeRecord, SetLoggerError};

use crate::level::Level;
use crate::logging::{global_registry, DEFAULT_LOGGER_NAME};
use crate::record::UNKNOWN_FUNCTION;

struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        let level = Level::from(metadata.level());
        let registry = global_registry();
        // Answer without configuring, so checking a level never creates log files.
        match registry.lookup(logger_name(metadata.target())) {
            Some(logger) => logger.is_enabled_for(level),
            None => level >= registry.pending_level(),
        }
    }

    fn log(&self, record: &FacadeRecord<'_>) {
        let name = logger_name(record.target());
        let logger = crate::obtain_or_exit(global_registry(), name);
        logger.log_fmt(Level::from(record.level()), UNKNOWN_FUNCTION, *record.args());
    }

    fn flush(&self) {}
}

fn logger_name(target: &str) -> &str {
    match target {
        "" => DEFAULT_LOGGER_NAME,
        target => target,
    }
}

/// Install the bridge as the `log` crate's global logger
///
/// Fails if another `log` implementation is already installed.
pub fn init_log_bridge() -> Result<(), SetLoggerError> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
