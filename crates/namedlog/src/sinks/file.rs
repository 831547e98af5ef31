//! File sink

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::traits::{Sink, SinkKind};
use crate::error::{LogError, LogResult};
use crate::format::{Formatter, PlainFormatter};
use crate::level::Level;
use crate::record::Record;

/// Appends plain, untruncated lines to a file
///
/// Lines are written as UTF-8 bytes, so any Rust string (emoji included)
/// round-trips exactly. The handle stays open until the sink is dropped.
pub struct FileSink {
    level: Level,
    path: PathBuf,
    formatter: PlainFormatter,
    file: Mutex<File>,
}

impl FileSink {
    /// Open `path` for appending, creating the file if needed
    ///
    /// The parent directory must already exist; see
    /// [`crate::fs::ensure_parent_dir`].
    pub fn open(level: Level, path: impl Into<PathBuf>) -> LogResult<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::open_file(&path, e))?;

        Ok(Self {
            level,
            path,
            formatter: PlainFormatter::new(),
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for FileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSink")
            .field("level", &self.level)
            .field("path", &self.path)
            .finish()
    }
}

impl Sink for FileSink {
    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn level(&self) -> Level {
        self.level
    }

    fn write(&self, record: &Record<'_>) -> LogResult<()> {
        let mut line = self.formatter.format(record);
        line.push('\n');
        let mut file = self.file.lock();
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
