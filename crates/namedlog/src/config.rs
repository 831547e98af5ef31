//! Environment-driven logger configuration

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Environment variable holding the minimum level
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Environment variable holding the log file path
pub const LOG_FILE_ENV: &str = "LOG_FILE";

/// Log file used when `LOG_FILE` is unset or empty
pub const DEFAULT_LOG_FILE: &str = "combined.log";

/// Settings applied to a logger when it is first configured
///
/// # Example
///
/// ```
/// use namedlog::{Level, LogConfig};
///
/// let config = LogConfig::from_lookup(|key| match key {
///     "LOG_LEVEL" => Some("warning".into()),
///     _ => None,
/// });
/// assert_eq!(config.level, Level::Warning);
/// assert_eq!(config.file.to_str(), Some("combined.log"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Threshold for the logger and both of its sinks
    #[serde(default)]
    pub level: Level,
    /// Path of the plain-text log file
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            file: default_log_file(),
        }
    }
}

impl LogConfig {
    pub fn new(level: Level, file: impl Into<PathBuf>) -> Self {
        Self {
            level,
            file: file.into(),
        }
    }

    /// Read `LOG_LEVEL` and `LOG_FILE` from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Build a config from an arbitrary key lookup
    ///
    /// Values are OS strings so file paths that are not valid UTF-8 are kept
    /// as-is. Unrecognized levels fall back to `DEBUG`; a missing or empty
    /// file path falls back to [`DEFAULT_LOG_FILE`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let level = lookup(LOG_LEVEL_ENV)
            .map(|v| Level::parse_or_default(&v.to_string_lossy()))
            .unwrap_or_default();

        let file = lookup(LOG_FILE_ENV)
            .filter(|v| !v.to_string_lossy().trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_log_file);

        Self { level, file }
    }
}
