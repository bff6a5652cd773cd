//! High-level library API: pick a directory, split every composite image in
//! it, and report the outcome through a [`Notifier`]. Prefer these entrypoints
//! over the low-level `core` and `io` modules when embedding quadsplit.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::core::params::SplitParams;
use crate::core::split::split_image;
use crate::error::{Error, Result};
use crate::io::{find_candidate_images, write_error_log};

pub mod notify;

pub use notify::{
    DirectoryPicker, FixedPicker, Notice, NoticeLevel, Notifier, RecordingNotifier,
    TracingNotifier,
};

/// Title of the directory selection prompt.
pub const PICKER_TITLE: &str = "select directory to split images";

/// Terminal state of one run.
#[derive(Debug)]
pub enum RunOutcome {
    /// The user closed the picker without choosing a directory.
    Cancelled,
    /// The directory holds no entry with an accepted extension.
    NoImages { dir: PathBuf },
    /// Every candidate was split.
    Completed { output_dir: PathBuf, files: usize },
    /// The batch stopped at the first failure, which went to the error log.
    Failed { log_path: PathBuf, error: Error },
}

impl RunOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

enum Batch {
    Empty,
    Done { output_dir: PathBuf, files: usize },
}

/// Full interactive flow: ask for a directory, then split it.
///
/// Cancelling the picker (or picking an empty path) shows an informational
/// notice and ends the run; nothing is written.
pub fn run(
    picker: &mut dyn DirectoryPicker,
    notifier: &mut dyn Notifier,
    params: &SplitParams,
) -> RunOutcome {
    let dir = picker
        .pick_directory(PICKER_TITLE)
        .filter(|dir| !dir.as_os_str().is_empty());

    match dir {
        Some(dir) => {
            info!("Selected directory: {:?}", dir);
            split_directory(&dir, notifier, params)
        }
        None => {
            info!("No directory selected");
            notifier.notify(
                NoticeLevel::Info,
                "Cancelled",
                "No directory was selected, exiting.",
            );
            RunOutcome::Cancelled
        }
    }
}

/// Split every candidate image in `dir` and report the outcome.
///
/// Any failure while creating the output directory, listing `dir` or
/// splitting a file stops the batch. Its trace is written to the error log in
/// `dir`, and a single error notice naming the log is shown. Outputs already
/// written by earlier files stay on disk.
pub fn split_directory(dir: &Path, notifier: &mut dyn Notifier, params: &SplitParams) -> RunOutcome {
    match process_directory(dir, params) {
        Ok(Batch::Empty) => {
            notifier.notify(
                NoticeLevel::Warning,
                "No images",
                &format!("No PNG/JPG files found in directory:\n{}", dir.display()),
            );
            RunOutcome::NoImages {
                dir: dir.to_path_buf(),
            }
        }
        Ok(Batch::Done { output_dir, files }) => {
            info!("Split {} image(s) into {:?}", files, output_dir);
            notifier.notify(
                NoticeLevel::Info,
                "Done",
                &format!(
                    "All images have been split and saved to:\n{}",
                    output_dir.display()
                ),
            );
            RunOutcome::Completed { output_dir, files }
        }
        Err(err) => {
            error!("{}", err);
            let log_path = dir.join(&params.error_log);
            let message = match write_error_log(&log_path, &err) {
                Ok(()) => format!(
                    "An error occurred while processing; details were logged to:\n{}",
                    log_path.display()
                ),
                Err(log_err) => {
                    error!("{}", log_err);
                    format!("An error occurred while processing:\n{err}\n\n{log_err}")
                }
            };
            notifier.notify(NoticeLevel::Error, "Error", &message);
            RunOutcome::Failed {
                log_path,
                error: err,
            }
        }
    }
}

fn process_directory(dir: &Path, params: &SplitParams) -> Result<Batch> {
    let output_dir = dir.join(&params.output_subdir);
    fs::create_dir_all(&output_dir).map_err(|source| Error::CreateOutputDir {
        path: output_dir.clone(),
        source,
    })?;
    info!("Output directory: {:?}", output_dir);

    let files = find_candidate_images(dir, params)?;
    if files.is_empty() {
        info!("No candidate images in {:?}", dir);
        return Ok(Batch::Empty);
    }

    for file in &files {
        info!("Processing: {:?}", file);
        split_image(file, &output_dir)?;
    }

    Ok(Batch::Done {
        output_dir,
        files: files.len(),
    })
}
