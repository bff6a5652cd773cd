//! quadsplit CLI entrypoint.
//!
//! Headless counterpart of the dialog binary: parse args, split the given
//! directory, and exit with an appropriate status. For programmatic use,
//! prefer the library API (`quadsplit::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
