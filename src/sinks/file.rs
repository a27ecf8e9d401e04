//! Log files opened by the logger itself

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Open `path` for writing, creating it or truncating existing content
///
/// The file is not wrapped in a buffer: each log line reaches the file in a
/// single write, in call order.
pub fn open_log_file(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| LoggerError::open(path.display().to_string(), e))
}
