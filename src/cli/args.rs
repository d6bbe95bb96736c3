//! CLI argument definitions.

use crate::constants::{DATASET_ID, DEFAULT_AUDIO_DIR, DEFAULT_DATA_DIR, DEFAULT_PLOT_DIR};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Fetch and explore the bowel-sounds audio dataset.
#[derive(Debug, Parser)]
#[command(name = "bowelscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress informational output.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download and extract the dataset archive.
    Fetch(FetchArgs),
    /// Explore the extracted dataset: summary statistics and annotated plots.
    Explore(ExploreArgs),
}

/// Arguments for the fetch command.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Directory to download and extract the dataset into.
    #[arg(short = 'd', long, default_value = DEFAULT_DATA_DIR, env = "BOWELSCOPE_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Kaggle dataset identifier (owner/slug).
    #[arg(long, default_value = DATASET_ID)]
    pub dataset: String,
}

/// Arguments for the explore command.
#[derive(Debug, Args)]
pub struct ExploreArgs {
    /// Directory holding the extracted .wav/.csv pairs.
    #[arg(short = 'd', long, default_value = DEFAULT_AUDIO_DIR, env = "BOWELSCOPE_AUDIO_DIR")]
    pub data_dir: PathBuf,

    /// Number of examples to plot (skips the interactive prompt).
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Directory rendered figures are written into.
    #[arg(short, long, default_value = DEFAULT_PLOT_DIR, env = "BOWELSCOPE_PLOT_DIR")]
    pub out_dir: PathBuf,

    /// Render figures without opening them in the system viewer.
    #[arg(long)]
    pub no_open: bool,
}
