use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

static LOGGING_INIT: OnceLock<()> = OnceLock::new();

/// Install the stderr subscriber used by the dialog binary.
///
/// `RUST_LOG` wins when set; otherwise quadsplit logs at info and the
/// windowing stack stays quiet.
pub fn init_gui_logging() {
    LOGGING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("quadsplit=info,quadsplitUI=info,rfd=warn"));

        let _ = Registry::default()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init();
    });
}
