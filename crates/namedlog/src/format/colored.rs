//! ANSI-colored, truncating formatter used for console output

use super::plain::render_line;
use super::traits::Formatter;
use crate::level::Level;
use crate::record::Record;

/// Messages longer than this many characters are cut on the console
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 100;

/// Appended to truncated messages
pub const ELLIPSIS: &str = "...";

const GREY: &str = "\x1b[38;21m";
const BLUE: &str = "\x1b[34;01m";
const YELLOW: &str = "\x1b[33;01m";
const RED: &str = "\x1b[31;01m";
const BOLD_RED: &str = "\x1b[31;1m";
const RESET: &str = "\x1b[0m";

/// Wraps each line in a per-level color and optionally caps the message length
#[derive(Debug, Clone, Copy)]
pub struct ColorFormatter {
    max_message_length: Option<usize>,
}

impl Default for ColorFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorFormatter {
    /// Colored formatter truncating messages at [`DEFAULT_MAX_MESSAGE_LENGTH`]
    pub fn new() -> Self {
        Self {
            max_message_length: Some(DEFAULT_MAX_MESSAGE_LENGTH),
        }
    }

    /// Colored formatter with a custom cap, or none at all
    pub fn with_max_message_length(max_message_length: Option<usize>) -> Self {
        Self { max_message_length }
    }

    pub fn max_message_length(&self) -> Option<usize> {
        self.max_message_length
    }

    /// ANSI escape sequence that starts a line at `level`
    pub fn color_for(level: Level) -> &'static str {
        match level {
            Level::Debug => GREY,
            Level::Info => BLUE,
            Level::Warning => YELLOW,
            Level::Error => RED,
            Level::Critical => BOLD_RED,
        }
    }

    fn truncate<'m>(&self, message: &'m str) -> std::borrow::Cow<'m, str> {
        let Some(max) = self.max_message_length else {
            return message.into();
        };
        // Cut on a char boundary; lengths are counted in chars, not bytes.
        match message.char_indices().nth(max) {
            Some((cut, _)) => format!("{}{}", &message[..cut], ELLIPSIS).into(),
            None => message.into(),
        }
    }
}

impl Formatter for ColorFormatter {
    fn format(&self, record: &Record<'_>) -> String {
        let message = self.truncate(record.message);
        format!(
            "{}{}{}",
            Self::color_for(record.level),
            render_line(record, &message),
            RESET
        )
    }
}
