//! Bowelscope - bowel-sound dataset exploration CLI.
//!
//! This crate downloads the public bowel-sounds dataset and renders
//! exploratory visualizations (waveform, mel spectrogram, annotated
//! sound-interval overlays) for manual inspection.

#![warn(missing_docs)]

pub mod analysis;
pub mod annotations;
pub mod audio;
pub mod cli;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod explore;
pub mod plot;
pub mod spectral;

use clap::Parser;
use cli::{Cli, Command};

pub use error::{Error, Result};

/// Main entry point for the bowelscope CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Fetch(args) => dataset::fetch_dataset(&args.dataset, &args.data_dir),
        Command::Explore(args) => explore::run_explore(&args, cli.quiet),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}
