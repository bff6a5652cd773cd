use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::core::params::SplitParams;
use crate::error::{Error, Result};

/// List the entries directly inside `dir` whose name ends in an accepted
/// extension, compared case-insensitively.
///
/// Entries are returned in the order the filesystem yields them. Only the
/// name is inspected; content is never sniffed here.
pub fn find_candidate_images(dir: &Path, params: &SplitParams) -> Result<Vec<PathBuf>> {
    let read_err = |source: std::io::Error| Error::ReadDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let name = entry.file_name();
        if params.accepts(&name.to_string_lossy()) {
            files.push(entry.path());
        } else {
            trace!("Skipping non-image entry: {:?}", name);
        }
    }

    Ok(files)
}
