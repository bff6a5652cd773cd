use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Splitting failed, see {log}")]
    BatchFailed { log: PathBuf },

    #[error(transparent)]
    Split(#[from] quadsplit::Error),
}
