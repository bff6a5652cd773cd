use tracing::info;
use tracing_subscriber::EnvFilter;

use quadsplit::api::{RunOutcome, TracingNotifier, split_directory};
use quadsplit::SplitParams;

use super::args::CliArgs;
use super::errors::AppError;

/// Directive used when `RUST_LOG` is unset.
fn default_log_directive(verbose: bool) -> &'static str {
    if verbose {
        "quadsplit=debug"
    } else {
        "quadsplit=info"
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_directive(args.log)));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let input_dir = args.input_dir;
    if !input_dir.is_dir() {
        return Err(AppError::NotADirectory { path: input_dir }.into());
    }

    let params = match &args.config {
        Some(path) => SplitParams::from_json_file(path).map_err(AppError::from)?,
        None => SplitParams::default(),
    };

    info!("Splitting images in: {:?}", input_dir);
    match split_directory(&input_dir, &mut TracingNotifier, &params) {
        RunOutcome::Failed { log_path, .. } => {
            Err(AppError::BatchFailed { log: log_path }.into())
        }
        _ => Ok(()),
    }
}
