//! Plain formatter used for file output

use super::traits::Formatter;
use crate::record::Record;

/// `LEVEL (YYYY-MM-DD HH:MM:SS) [name: NAME func: FUNCTION] MESSAGE`
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for PlainFormatter {
    fn format(&self, record: &Record<'_>) -> String {
        render_line(record, record.message)
    }
}

/// Base layout shared by all formatters, with the message supplied separately
pub(crate) fn render_line(record: &Record<'_>, message: &str) -> String {
    format!(
        "{} ({}) [name: {} func: {}] {}",
        record.level,
        record.formatted_time(),
        record.name,
        record.function,
        message
    )
}
