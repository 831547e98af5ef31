//! Sink trait definition

use std::fmt;

use crate::error::LogResult;
use crate::level::Level;
use crate::record::Record;

/// The kinds of sink a logger can carry, at most one of each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    Console,
    File,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Console => "console",
            SinkKind::File => "file",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A destination that receives formatted records
///
/// Implementations:
/// - `ConsoleSink`: colored lines on stderr (or any writer)
/// - `FileSink`: plain lines appended to a UTF-8 file
pub trait Sink: Send + Sync {
    fn kind(&self) -> SinkKind;

    /// Records below this level are dropped
    fn level(&self) -> Level;

    /// Format and write a record, ignoring the level threshold
    fn write(&self, record: &Record<'_>) -> LogResult<()>;

    /// Whether a record at `level` passes this sink's threshold
    fn accepts(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Write the record if it passes the threshold
    fn emit(&self, record: &Record<'_>) -> LogResult<()> {
        if self.accepts(record.level) {
            self.write(record)
        } else {
            Ok(())
        }
    }
}

/// Type alias for a boxed sink
pub type BoxedSink = Box<dyn Sink>;
