//! Named logger handle

use std::fmt;
use std::sync::Arc;

use crate::level::Level;
use crate::record::{Record, UNKNOWN_FUNCTION};
use crate::sinks::{BoxedSink, SinkKind};

/// A named, configured logging endpoint
///
/// Cloning is cheap; all clones share the same sinks. Handles returned by the
/// registry for the same name are clones of one another (see [`Logger::ptr_eq`]).
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

struct LoggerInner {
    name: String,
    level: Level,
    sinks: Vec<BoxedSink>,
}

impl Logger {
    /// Create a logger with its full set of sinks
    ///
    /// Sinks are fixed at construction; a logger is never reconfigured.
    pub fn new(name: impl Into<String>, level: Level, sinks: Vec<BoxedSink>) -> Self {
        Self {
            inner: Arc::new(LoggerInner {
                name: name.into(),
                level,
                sinks,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn level(&self) -> Level {
        self.inner.level
    }

    /// Kinds of the attached sinks, in attachment order
    pub fn sink_kinds(&self) -> Vec<SinkKind> {
        self.inner.sinks.iter().map(|s| s.kind()).collect()
    }

    pub fn sink_count(&self) -> usize {
        self.inner.sinks.len()
    }

    /// Whether a message at `level` would reach at least one sink
    pub fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.inner.level && self.inner.sinks.iter().any(|s| s.accepts(level))
    }

    /// Whether two handles refer to the same underlying logger
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Log a message attributed to `function`
    pub fn log(&self, level: Level, function: &str, message: &str) {
        if level < self.inner.level {
            return;
        }
        let record = Record::new(level, &self.inner.name, function, message);
        for sink in &self.inner.sinks {
            // A failing sink must not stop the others or the caller.
            let _ = sink.emit(&record);
        }
    }

    /// Log preformatted arguments, formatting only when the level is enabled
    pub fn log_fmt(&self, level: Level, function: &str, args: fmt::Arguments<'_>) {
        if !self.is_enabled_for(level) {
            return;
        }
        match args.as_str() {
            Some(message) => self.log(level, function, message),
            None => self.log(level, function, &args.to_string()),
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, UNKNOWN_FUNCTION, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, UNKNOWN_FUNCTION, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Level::Warning, UNKNOWN_FUNCTION, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, UNKNOWN_FUNCTION, message);
    }

    pub fn critical(&self, message: &str) {
        self.log(Level::Critical, UNKNOWN_FUNCTION, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.inner.name)
            .field("level", &self.inner.level)
            .field("sinks", &self.sink_kinds())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::ConsoleSink;
    use crate::testing::{FailingWriter, SharedBuffer};

    fn console_logger(level: Level) -> (Logger, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let sink = ConsoleSink::with_writer(level, buffer.clone());
        (Logger::new("test.rs", level, vec![Box::new(sink)]), buffer)
    }

    #[test]
    fn test_logger_accessors() {
        let (logger, _) = console_logger(Level::Info);
        assert_eq!(logger.name(), "test.rs");
        assert_eq!(logger.level(), Level::Info);
        assert_eq!(logger.sink_kinds(), vec![SinkKind::Console]);
        assert_eq!(logger.sink_count(), 1);
    }

    #[test]
    fn test_plain_methods_record_unknown_function() {
        let (logger, buffer) = console_logger(Level::Debug);
        logger.info("hello");
        assert!(buffer.contents().contains("[name: test.rs func: <unknown>] hello"));
    }

    #[test]
    fn test_level_threshold() {
        let (logger, buffer) = console_logger(Level::Warning);
        logger.debug("d");
        logger.info("i");
        logger.warning("w");
        logger.error("e");
        logger.critical("c");

        let lines = buffer.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("WARNING ("));
        assert!(lines[2].contains("CRITICAL ("));
        assert!(!logger.is_enabled_for(Level::Info));
        assert!(logger.is_enabled_for(Level::Error));
    }

    #[test]
    fn test_log_fmt_formats_arguments() {
        let (logger, buffer) = console_logger(Level::Debug);
        let attempts = 3;
        logger.log_fmt(Level::Error, "connect", format_args!("failed after {} attempts", attempts));
        assert!(buffer.contents().contains("func: connect] failed after 3 attempts"));
    }

    #[test]
    fn test_clones_share_identity() {
        let (logger, _) = console_logger(Level::Debug);
        let (other, _) = console_logger(Level::Debug);
        assert!(logger.ptr_eq(&logger.clone()));
        assert!(!logger.ptr_eq(&other));
    }

    #[test]
    fn test_failing_sink_does_not_block_others() {
        let buffer = SharedBuffer::default();
        let broken = ConsoleSink::with_writer(Level::Debug, FailingWriter);
        let working = ConsoleSink::with_writer(Level::Debug, buffer.clone());
        let logger = Logger::new("test.rs", Level::Debug, vec![Box::new(broken), Box::new(working)]);

        logger.error("still delivered");
        logger.log_fmt(Level::Info, "run", format_args!("attempt {}", 2));

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("still delivered"));
        assert!(lines[1].contains("func: run] attempt 2"));
    }

    #[test]
    fn test_logger_without_sinks_is_silent() {
        let logger = Logger::new("empty", Level::Debug, Vec::new());
        assert!(!logger.is_enabled_for(Level::Critical));
        logger.critical("nowhere to go");
    }
}
