#[cfg(feature = "gui")]
use quadsplit::api::run;
#[cfg(feature = "gui")]
use quadsplit::gui::{DialogNotifier, DialogPicker, init_gui_logging};
#[cfg(feature = "gui")]
use quadsplit::SplitParams;

// Every terminal state, a logged failure included, exits with status 0; the
// dialogs and the error log are the only failure signals.
#[cfg(feature = "gui")]
fn main() {
    init_gui_logging();

    let outcome = run(
        &mut DialogPicker,
        &mut DialogNotifier,
        &SplitParams::default(),
    );
    tracing::debug!("Run finished: {:?}", outcome);
}

#[cfg(not(feature = "gui"))]
fn main() {
    eprintln!("GUI feature is not enabled. Please build with --features gui");
    std::process::exit(1);
}
