//! Log directory preparation

use std::fs;
use std::path::Path;

use crate::error::{LogError, LogResult};

/// Create the parent directory of `file_path` and any missing ancestors
///
/// Paths without a directory component (e.g. `combined.log`) need nothing.
/// Existing directories are fine; any other failure is returned as
/// [`LogError::CreateDir`].
pub fn ensure_parent_dir(file_path: impl AsRef<Path>) -> LogResult<()> {
    let Some(parent) = file_path.as_ref().parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    fs::create_dir_all(parent).map_err(|e| LogError::create_dir(parent, e))
}
