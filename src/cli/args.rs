use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quadsplit", version, about = "Split 2x2 composite images into quadrants")]
pub struct CliArgs {
    /// Directory whose PNG/JPG images are split (not recursive)
    #[arg(short, long)]
    pub input_dir: PathBuf,

    /// JSON file overriding output subdirectory, error log name or extensions
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
