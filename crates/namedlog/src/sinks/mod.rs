//! Output destinations for formatted records

mod traits;
mod console;
mod file;
mod factory;

pub use traits::{Sink, SinkKind, BoxedSink};
pub use console::ConsoleSink;
pub use file::FileSink;
pub use factory::{SinkFactory, ConsoleTarget, WriterFactory};
