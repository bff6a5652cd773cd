use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Write the full trace of `err` to `path`, replacing any previous log.
///
/// The file is UTF-8 text: a timestamp line followed by the error and its
/// chain of causes.
pub fn write_error_log(path: &Path, err: &Error) -> Result<()> {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let contents = format!("[{timestamp}] split failed\n{}", err.trace());
    fs::write(path, contents).map_err(|source| Error::WriteLog {
        path: path.to_path_buf(),
        source,
    })
}
