//! Log records shared read-only between sinks

use chrono::{DateTime, Local};

use crate::level::Level;

/// Timestamp layout used in every log line
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Function name recorded when the call site did not supply one
pub const UNKNOWN_FUNCTION: &str = "<unknown>";

/// A single log event
///
/// Records are never mutated after creation; each sink formats its own
/// string from the same borrowed record.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    pub timestamp: DateTime<Local>,
    pub name: &'a str,
    pub function: &'a str,
    pub message: &'a str,
}

impl<'a> Record<'a> {
    /// Create a record stamped with the current local time
    pub fn new(level: Level, name: &'a str, function: &'a str, message: &'a str) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            name,
            function,
            message,
        }
    }

    /// Replace the timestamp (useful for deterministic output)
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM:SS`
    pub fn formatted_time(&self) -> String {
        self.timestamp.format(DATE_FORMAT).to_string()
    }
}
