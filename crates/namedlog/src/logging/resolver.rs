//! Logger name resolution

use std::panic::Location;
use std::path::Path;

/// Name used when neither an explicit name nor a call site is available
pub const DEFAULT_LOGGER_NAME: &str = env!("CARGO_PKG_NAME");

/// Pick the name for a logger request
///
/// A non-empty `explicit` name wins. Otherwise the base file name of the
/// caller's source file is used (e.g. `src/bin/worker.rs` becomes
/// `worker.rs`), falling back to [`DEFAULT_LOGGER_NAME`].
pub fn resolve_name(explicit: &str, caller: Option<&Location<'_>>) -> String {
    if !explicit.is_empty() {
        return explicit.to_string();
    }

    caller
        .and_then(|location| file_base_name(location.file()))
        .unwrap_or_else(|| DEFAULT_LOGGER_NAME.to_string())
}

fn file_base_name(file: &str) -> Option<String> {
    // `file!()` paths may use either separator regardless of host
    let base = file.rsplit(|c: char| c == '/' || c == '\\').next()?;
    let base = Path::new(base).file_name()?.to_str()?;
    Some(base.to_string())
}
