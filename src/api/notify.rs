//! Seams between the orchestrator and whatever shows things to the user.
//! The interactive binary plugs in native dialogs; the CLI and tests use
//! the implementations below.
use std::path::PathBuf;

use tracing::{error, info, warn};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoticeLevel::Info => write!(f, "Info"),
            NoticeLevel::Warning => write!(f, "Warning"),
            NoticeLevel::Error => write!(f, "Error"),
        }
    }
}

/// Receives the outcome notices of a run. Implementations block until the
/// user has acknowledged the notice, if there is a user.
pub trait Notifier {
    fn notify(&mut self, level: NoticeLevel, title: &str, message: &str);
}

/// Asks the user for the directory to process.
pub trait DirectoryPicker {
    /// `None` when the user cancelled.
    fn pick_directory(&mut self, title: &str) -> Option<PathBuf>;
}

/// Reports notices as log events.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, level: NoticeLevel, title: &str, message: &str) {
        let message = message.replace('\n', " ");
        match level {
            NoticeLevel::Info => info!("{}: {}", title, message),
            NoticeLevel::Warning => warn!("{}: {}", title, message),
            NoticeLevel::Error => error!("{}: {}", title, message),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

/// Keeps every notice for later inspection.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, level: NoticeLevel, title: &str, message: &str) {
        self.notices.push(Notice {
            level,
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

/// A picker that answers with a fixed choice.
#[derive(Debug, Clone)]
pub struct FixedPicker(pub Option<PathBuf>);

impl DirectoryPicker for FixedPicker {
    fn pick_directory(&mut self, _title: &str) -> Option<PathBuf> {
        self.0.clone()
    }
}
