//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Every failure carries the path it happened on, and keeps the underlying I/O or
//! image error as its source so the error log can print the whole chain.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open image {path}: {source}")]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save image {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write error log {path}: {source}")]
    WriteLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read configuration {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Render the error and every underlying cause, one per line.
    ///
    /// This is the text written to the error log: the top-level message first,
    /// then a numbered `Caused by:` list walking `source()` to the root.
    pub fn trace(&self) -> String {
        use std::error::Error as _;

        let mut out = format!("Error: {self}\n");
        let mut source = self.source();
        if source.is_some() {
            out.push_str("\nCaused by:\n");
        }
        let mut depth = 0;
        while let Some(cause) = source {
            out.push_str(&format!("    {depth}: {cause}\n"));
            depth += 1;
            source = cause.source();
        }
        out
    }
}
