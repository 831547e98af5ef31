//! Logging macros that record the calling function

/// Name of the enclosing function, closures stripped
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __here() {}
        $crate::logging::short_function_name(::std::any::type_name_of_val(&__here))
    }};
}

/// Reduce a `type_name` of a nested marker fn to the enclosing fn's name
#[doc(hidden)]
pub fn short_function_name(type_name: &'static str) -> &'static str {
    let mut path = type_name.strip_suffix("::__here").unwrap_or(type_name);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Log at DEBUG with `format!` arguments
///
/// ```no_run
/// use namedlog::{get_logger, log_debug};
///
/// let logger = get_logger("app");
/// log_debug!(logger, "loaded {} entries", 42);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_fmt($crate::Level::Debug, $crate::__function_name!(), format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_fmt($crate::Level::Info, $crate::__function_name!(), format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_fmt($crate::Level::Warning, $crate::__function_name!(), format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_fmt($crate::Level::Error, $crate::__function_name!(), format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_fmt($crate::Level::Critical, $crate::__function_name!(), format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Logger;
    use crate::sinks::ConsoleSink;
    use crate::testing::SharedBuffer;
    use crate::Level;

    #[test]
    fn test_short_function_name() {
        assert_eq!(short_function_name("app::server::handle::__here"), "handle");
        assert_eq!(
            short_function_name("app::server::handle::{{closure}}::{{closure}}::__here"),
            "handle"
        );
        assert_eq!(short_function_name("main"), "main");
    }

    #[test]
    fn test_function_name_macro() {
        assert_eq!(crate::__function_name!(), "test_function_name_macro");
        let from_closure = || crate::__function_name!();
        assert_eq!(from_closure(), "test_function_name_macro");
    }

    #[test]
    fn test_macros_record_function() {
        let buffer = SharedBuffer::default();
        let sink = ConsoleSink::with_writer(Level::Debug, buffer.clone());
        let logger = Logger::new("macros.rs", Level::Debug, vec![Box::new(sink)]);

        crate::log_debug!(logger, "d{}", 1);
        crate::log_info!(logger, "i{}", 2);
        crate::log_warn!(logger, "w{}", 3);
        crate::log_error!(logger, "e{}", 4);
        crate::log_critical!(logger, "c{}", 5);

        let lines = buffer.lines();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("DEBUG ("));
        assert!(lines[2].contains("WARNING ("));
        assert!(lines[4].contains("[name: macros.rs func: test_macros_record_function] c5"));
    }
}
