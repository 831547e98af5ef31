//! Formatters turning records into log lines

mod traits;
mod plain;
mod colored;

pub use traits::Formatter;
pub use plain::PlainFormatter;
pub use colored::{ColorFormatter, DEFAULT_MAX_MESSAGE_LENGTH, ELLIPSIS};
