#![doc = r#"
quadsplit — split 2x2 composite images into their four quadrants.

Point it at a directory and every `.png`, `.jpg` or `.jpeg` entry directly
inside is cut along its horizontal and vertical midlines. The four pieces are
written to `split/` under that directory as `{name}_ul`, `_ur`, `_ll` and `_lr`
with the original extension. The crate powers both the `quadsplitUI` dialog
binary and the headless `quadsplit` CLI.

Quick start: split one image
----------------------------
```rust,no_run
use std::path::Path;

fn main() -> quadsplit::Result<()> {
    let written = quadsplit::split_image(
        Path::new("/pics/grid.png"),
        Path::new("/pics/split"),
    )?;
    assert_eq!(written.len(), 4);
    Ok(())
}
```

Split a directory headlessly
----------------------------
```rust,no_run
use std::path::Path;
use quadsplit::{split_directory, RecordingNotifier, RunOutcome, SplitParams};

let mut notifier = RecordingNotifier::default();
match split_directory(Path::new("/pics"), &mut notifier, &SplitParams::default()) {
    RunOutcome::Completed { output_dir, files } => {
        println!("{files} image(s) split into {}", output_dir.display())
    }
    RunOutcome::Failed { log_path, .. } => eprintln!("see {}", log_path.display()),
    other => println!("{other:?}"),
}
```

Quadrant geometry
-----------------
```rust
use quadsplit::{quadrant_boxes, Quadrant};

let boxes = quadrant_boxes(101, 81);
assert_eq!(boxes[0], (Quadrant::UpperLeft, quadsplit::CropBox::new(0, 0, 50, 40)));
assert_eq!(boxes[3], (Quadrant::LowerRight, quadsplit::CropBox::new(50, 40, 101, 81)));
```

Feature flags
-------------
- `gui` (default): native dialogs via `rfd` and the `quadsplitUI` binary.
- `full`: everything.

Useful modules
--------------
- [`api`] — the run flow and the `Notifier` / `DirectoryPicker` seams.
- [`core`] — quadrant geometry, the single-image splitter, run parameters.
- [`io`] — candidate discovery and the error log.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// GUI module (only available with gui feature)
#[cfg(feature = "gui")]
pub mod gui;

// Curated public API surface
// Types
pub use core::params::SplitParams;
pub use error::{Error, Result};
pub use types::{CropBox, Quadrant};

// Splitter
pub use core::quadrants::quadrant_boxes;
pub use core::split::{load_image, quadrant_file_name, split_image};

// Discovery and logging
pub use io::{find_candidate_images, write_error_log};

// High-level API re-exports
pub use api::{
    DirectoryPicker, FixedPicker, Notice, NoticeLevel, Notifier, PICKER_TITLE,
    RecordingNotifier, RunOutcome, TracingNotifier, run, split_directory,
};
