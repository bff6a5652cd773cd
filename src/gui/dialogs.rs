//! Native dialogs backed by `rfd`. Every call blocks the calling thread until
//! the user dismisses the dialog.
use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use tracing::trace;

use crate::api::{DirectoryPicker, NoticeLevel, Notifier};

/// Folder picker; the platform dialog only returns existing directories.
#[derive(Debug, Default)]
pub struct DialogPicker;

impl DirectoryPicker for DialogPicker {
    fn pick_directory(&mut self, title: &str) -> Option<PathBuf> {
        let picked = FileDialog::new().set_title(title).pick_folder();
        trace!("Directory picker returned {:?}", picked);
        picked
    }
}

/// Modal OK-only message boxes.
#[derive(Debug, Default)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn notify(&mut self, level: NoticeLevel, title: &str, message: &str) {
        let level = match level {
            NoticeLevel::Info => MessageLevel::Info,
            NoticeLevel::Warning => MessageLevel::Warning,
            NoticeLevel::Error => MessageLevel::Error,
        };
        let _ = MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
