//! Formatter trait definition

use crate::record::Record;

/// Renders a record into one line of text (without the trailing newline)
///
/// Implementations must be pure: the same record always produces the same
/// string, and the record itself is never modified.
///
/// Implementations:
/// - `PlainFormatter`: base layout, used by file sinks
/// - `ColorFormatter`: ANSI-colored and truncating, used by console sinks
pub trait Formatter: Send + Sync {
    fn format(&self, record: &Record<'_>) -> String;
}
