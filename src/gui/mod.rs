pub mod dialogs;
pub mod logging;

pub use dialogs::{DialogNotifier, DialogPicker};
pub use logging::init_gui_logging;
