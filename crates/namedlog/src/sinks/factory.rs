//! Sink construction from resolved configuration

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use super::console::ConsoleSink;
use super::file::FileSink;
use crate::error::LogResult;
use crate::level::Level;

/// Factory function type for creating console writers
pub type WriterFactory = Arc<dyn Fn() -> Box<dyn Write + Send> + Send + Sync>;

/// Where console sinks write
#[derive(Clone, Default)]
pub enum ConsoleTarget {
    #[default]
    Stderr,
    Stdout,
    /// A fresh writer per console sink, e.g. an in-memory buffer
    Writer(WriterFactory),
}

impl std::fmt::Debug for ConsoleTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleTarget::Stderr => f.write_str("Stderr"),
            ConsoleTarget::Stdout => f.write_str("Stdout"),
            ConsoleTarget::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

/// Builds the console and file sinks attached to a new logger
#[derive(Debug, Clone, Default)]
pub struct SinkFactory {
    console: ConsoleTarget,
}

impl SinkFactory {
    /// Factory whose console sinks write to stderr
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_console_target(console: ConsoleTarget) -> Self {
        Self { console }
    }

    /// Factory whose console sinks write to writers produced by `factory`
    pub fn with_console_writer<F, W>(factory: F) -> Self
    where
        F: Fn() -> W + Send + Sync + 'static,
        W: Write + Send + 'static,
    {
        Self::with_console_target(ConsoleTarget::Writer(Arc::new(move || {
            Box::new(factory()) as Box<dyn Write + Send>
        })))
    }

    pub fn console_target(&self) -> &ConsoleTarget {
        &self.console
    }

    pub fn build_console_sink(&self, level: Level) -> ConsoleSink {
        match &self.console {
            ConsoleTarget::Stderr => ConsoleSink::stderr(level),
            ConsoleTarget::Stdout => ConsoleSink::stdout(level),
            ConsoleTarget::Writer(factory) => ConsoleSink::from_boxed(level, factory()),
        }
    }

    /// Open the file sink; the parent directory must already exist
    pub fn build_file_sink(&self, level: Level, path: &Path) -> LogResult<FileSink> {
        FileSink::open(level, path)
    }
}
