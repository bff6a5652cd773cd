//! Filesystem side of a run: discovering candidate images in the selected
//! directory and writing the error log.
pub mod discover;
pub use discover::find_candidate_images;

pub mod error_log;
pub use error_log::write_error_log;
