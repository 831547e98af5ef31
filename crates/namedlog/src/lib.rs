//! namedlog
//!
//! Named loggers with colored console output and a parallel plain-text log
//! file. Ask for a logger by name (or let the calling file name it) and get a
//! ready-to-use handle; asking again returns the same logger without attaching
//! more sinks.
//!
//! ```rust,no_run
//! use namedlog::{get_logger, log_info, log_warn};
//!
//! // Named after this source file, e.g. "main.rs"
//! let logger = get_logger("");
//! log_info!(logger, "listening on port {}", 8080);
//!
//! let db = get_logger("database");
//! log_warn!(db, "slow query took {} ms", 1250);
//! ```
//!
//! ## Configuration
//!
//! Read from the environment when a name is first configured:
//! - `LOG_LEVEL`: `DEBUG` (default), `INFO`, `WARNING`, `ERROR` or `CRITICAL`,
//!   case-insensitive; anything else means `DEBUG`
//! - `LOG_FILE`: log file path, default `combined.log`; missing directories
//!   are created
//!
//! Lines look like `INFO (2025-01-02 13:14:15) [name: main.rs func: run] message`.
//! On the console they are colored by level and messages over 100 characters
//! are cut with `...`; the file always gets the full message.

use std::panic::Location;

pub mod error;
pub mod level;
pub mod config;
pub mod record;
pub mod format;
pub mod sinks;
pub mod fs;
pub mod logging;
pub mod bridge;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use error::{LogError, LogResult};
pub use level::{Level, ParseLevelError};
pub use config::{LogConfig, LOG_LEVEL_ENV, LOG_FILE_ENV, DEFAULT_LOG_FILE};
pub use record::Record;
pub use format::{Formatter, PlainFormatter, ColorFormatter};
pub use sinks::{Sink, SinkKind, ConsoleSink, FileSink, SinkFactory, ConsoleTarget};
pub use logging::{Logger, LoggerRegistry, global_registry, resolve_name};
pub use bridge::init_log_bridge;

/// Get the process-wide logger for `name`
///
/// An empty `name` means "the calling file", e.g. `worker.rs`. The first call
/// for a name configures it from the environment; later calls return the same
/// logger.
///
/// If the log directory or file cannot be set up, the error is printed to
/// stderr and the process exits with status 1. Use [`try_get_logger`] to
/// handle that case instead.
#[track_caller]
pub fn get_logger(name: &str) -> Logger {
    let name = resolve_name(name, Some(Location::caller()));
    obtain_or_exit(global_registry(), &name)
}

/// Like [`get_logger`], but returns setup failures to the caller
#[track_caller]
pub fn try_get_logger(name: &str) -> LogResult<Logger> {
    let name = resolve_name(name, Some(Location::caller()));
    global_registry().get(&name)
}

pub(crate) fn obtain_or_exit(registry: &LoggerRegistry, name: &str) -> Logger {
    match registry.get(name) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("namedlog: failed to set up logger '{}': {}", name, err);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::process::Command;
    use tempfile::tempdir;

    // Set only in the child process spawned by `test_setup_failure_exits_process`.
    const EXIT_CHILD_ENV: &str = "NAMEDLOG_EXIT_CHILD";

    // The only test modifying the real environment and the global registry.
    #[test]
    fn test_global_entry_points() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("global").join("combined.log");
        env::set_var(LOG_FILE_ENV, &path);
        env::set_var(LOG_LEVEL_ENV, "warning");
        global_registry().clear();

        // Default name comes from this file
        let implicit = get_logger("");
        assert_eq!(implicit.name(), "lib.rs");
        assert_eq!(implicit.level(), Level::Warning);
        assert!(implicit.ptr_eq(&get_logger("")));

        let named = get_logger("global-test");
        assert!(named.ptr_eq(&try_get_logger("global-test").unwrap()));
        assert!(!named.ptr_eq(&implicit));
        assert_eq!(named.sink_count(), 2);

        named.info("below threshold");
        crate::log_error!(named, "disk {} is full", "/dev/sda1");

        init_log_bridge().unwrap();
        log::warn!(target: "bridge-test", "routed through log");
        log::debug!(target: "bridge-test", "filtered by level");
        assert!(global_registry().contains("bridge-test"));
        assert!(log::log_enabled!(target: "bridge-test", log::Level::Error));
        assert!(!log::log_enabled!(target: "bridge-test", log::Level::Info));
        assert!(!log::log_enabled!(target: "bridge-unseen", log::Level::Debug));
        assert!(log::log_enabled!(target: "bridge-unseen", log::Level::Warn));
        assert!(!global_registry().contains("bridge-unseen"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("below threshold"));
        assert!(content.contains(
            "[name: global-test func: test_global_entry_points] disk /dev/sda1 is full"
        ));
        assert!(content.contains("WARNING"));
        assert!(content.contains("[name: bridge-test func: <unknown>] routed through log"));
        assert!(!content.contains("filtered by level"));

        #[cfg(unix)]
        {
            use std::ffi::OsStr;
            use std::os::unix::ffi::OsStrExt;

            let raw = dir.path().join(OsStr::from_bytes(b"caf\xe9.log"));
            env::set_var(LOG_FILE_ENV, &raw);
            assert_eq!(LogConfig::from_env().file, raw);
        }

        global_registry().clear();
        env::remove_var(LOG_FILE_ENV);
        env::remove_var(LOG_LEVEL_ENV);
    }

    #[test]
    fn setup_failure_child() {
        if env::var_os(EXIT_CHILD_ENV).is_none() {
            return;
        }
        get_logger("exit-child");
        unreachable!("logger setup should have exited the process");
    }

    #[test]
    fn test_setup_failure_exits_process() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not dir").unwrap();

        let output = Command::new(env::current_exe().unwrap())
            .args(["--exact", "tests::setup_failure_child", "--nocapture"])
            .env(EXIT_CHILD_ENV, "1")
            .env(LOG_FILE_ENV, blocker.join("logs").join("out.log"))
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("failed to set up logger 'exit-child'"));
        assert!(stderr.contains("Failed to create directory"));
    }
}
