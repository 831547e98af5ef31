//! Console sink

use std::io::{self, Write};

use parking_lot::Mutex;

use super::traits::{Sink, SinkKind};
use crate::error::LogResult;
use crate::format::{ColorFormatter, Formatter};
use crate::level::Level;
use crate::record::Record;

/// Writes colored, truncated lines to a terminal stream
pub struct ConsoleSink {
    level: Level,
    formatter: ColorFormatter,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    /// Console sink writing to stderr
    pub fn stderr(level: Level) -> Self {
        Self::with_writer(level, io::stderr())
    }

    /// Console sink writing to stdout
    pub fn stdout(level: Level) -> Self {
        Self::with_writer(level, io::stdout())
    }

    /// Console sink writing to any stream
    pub fn with_writer(level: Level, writer: impl Write + Send + 'static) -> Self {
        Self::from_boxed(level, Box::new(writer))
    }

    pub(crate) fn from_boxed(level: Level, writer: Box<dyn Write + Send>) -> Self {
        Self {
            level,
            formatter: ColorFormatter::new(),
            writer: Mutex::new(writer),
        }
    }

    /// Replace the formatter (e.g. to change the truncation cap)
    pub fn with_formatter(mut self, formatter: ColorFormatter) -> Self {
        self.formatter = formatter;
        self
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("level", &self.level)
            .field("formatter", &self.formatter)
            .finish()
    }
}

impl Sink for ConsoleSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn level(&self) -> Level {
        self.level
    }

    fn write(&self, record: &Record<'_>) -> LogResult<()> {
        let line = self.formatter.format(record);
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}
