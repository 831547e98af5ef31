//! Registry mapping names to configured loggers

use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use super::logger::Logger;
use crate::config::LogConfig;
use crate::error::LogResult;
use crate::fs::ensure_parent_dir;
use crate::level::Level;
use crate::sinks::{BoxedSink, SinkFactory};

/// Factory function type for resolving configuration of a new logger
pub type ConfigSource = Box<dyn Fn() -> LogConfig + Send + Sync>;

/// Registry of named loggers
///
/// The first [`get`](LoggerRegistry::get) for a name reads the configuration,
/// prepares the log directory and attaches one console and one file sink.
/// Every later call returns the same logger untouched. A name is registered
/// only once both sinks are attached, so "registered" and "already has sinks"
/// are the same condition.
///
/// # Example
///
/// ```
/// use namedlog::{Level, LogConfig, LoggerRegistry};
///
/// let dir = tempfile::tempdir().unwrap();
/// let file = dir.path().join("logs").join("app.log");
/// let registry = LoggerRegistry::with_config(LogConfig::new(Level::Info, &file));
///
/// let first = registry.get("app").unwrap();
/// let second = registry.get("app").unwrap();
/// assert!(first.ptr_eq(&second));
/// assert_eq!(first.sink_count(), 2);
/// ```
pub struct LoggerRegistry {
    loggers: Mutex<HashMap<String, Logger>>,
    config_source: ConfigSource,
    sink_factory: SinkFactory,
}

impl LoggerRegistry {
    /// Registry configured from `LOG_LEVEL` / `LOG_FILE`, console on stderr
    pub fn new() -> Self {
        Self::with_config_source(LogConfig::from_env)
    }

    /// Registry that resolves configuration through `source`
    ///
    /// `source` is called once per newly configured name.
    pub fn with_config_source<F>(source: F) -> Self
    where
        F: Fn() -> LogConfig + Send + Sync + 'static,
    {
        Self {
            loggers: Mutex::new(HashMap::new()),
            config_source: Box::new(source),
            sink_factory: SinkFactory::new(),
        }
    }

    /// Registry that gives every new logger the same configuration
    pub fn with_config(config: LogConfig) -> Self {
        Self::with_config_source(move || config.clone())
    }

    /// Replace the factory used to build sinks
    pub fn with_sink_factory(mut self, sink_factory: SinkFactory) -> Self {
        self.sink_factory = sink_factory;
        self
    }

    /// Get the logger for `name`, configuring it on first use
    ///
    /// The registry lock is held across the check and the configuration, so
    /// concurrent first calls for one name attach sinks exactly once.
    /// Setup failures leave nothing registered.
    pub fn get(&self, name: &str) -> LogResult<Logger> {
        let mut loggers = self.loggers.lock();
        if let Some(logger) = loggers.get(name) {
            return Ok(logger.clone());
        }

        let logger = self.configure(name)?;
        loggers.insert(name.to_string(), logger.clone());
        Ok(logger)
    }

    fn configure(&self, name: &str) -> LogResult<Logger> {
        let config = (self.config_source)();

        ensure_parent_dir(&config.file)?;

        let console = self.sink_factory.build_console_sink(config.level);
        let file = self.sink_factory.build_file_sink(config.level, &config.file)?;
        let sinks: Vec<BoxedSink> = vec![Box::new(console), Box::new(file)];

        Ok(Logger::new(name, config.level, sinks))
    }

    /// The logger for `name` if it is already configured, without configuring it
    pub fn lookup(&self, name: &str) -> Option<Logger> {
        self.loggers.lock().get(name).cloned()
    }

    /// Level a logger configured right now would get
    pub fn pending_level(&self) -> Level {
        (self.config_source)().level
    }

    /// Check if a logger has been configured for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.loggers.lock().contains_key(name)
    }

    /// List all configured logger names
    pub fn names(&self) -> Vec<String> {
        self.loggers.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.lock().is_empty()
    }

    /// Forget every logger (mainly for testing)
    ///
    /// Handles already given out keep working; the next `get` for a name
    /// configures a fresh logger.
    pub fn clear(&self) {
        self.loggers.lock().clear();
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("loggers", &self.names())
            .field("sink_factory", &self.sink_factory)
            .finish()
    }
}

// Global registry instance
static GLOBAL_REGISTRY: Lazy<LoggerRegistry> = Lazy::new(LoggerRegistry::new);

/// The process-wide registry behind [`crate::get_logger`]
pub fn global_registry() -> &'static LoggerRegistry {
    &GLOBAL_REGISTRY
}
