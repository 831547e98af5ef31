//! Named loggers and the registry that hands them out

mod logger;
mod registry;
mod resolver;
mod macros;

pub use logger::Logger;
pub use registry::{LoggerRegistry, ConfigSource, global_registry};
pub use resolver::{resolve_name, DEFAULT_LOGGER_NAME};

#[doc(hidden)]
pub use macros::short_function_name;
