//! Command implementations for the WebCAT sampler CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented
//! in its own module:
//! - `sample`: batch frame extraction across the requested keys
//! - `download`: fetch one whole archive video
//! - `stations`: list the known station identifiers

pub mod download;
pub mod sample;
pub mod shared;
pub mod stations;

// Re-export the main types and functions
pub use shared::ProcessingStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the WebCAT sampler
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<ProcessingStats> {
    match args.get_command() {
        Commands::Sample(sample_args) => sample::run_sample(sample_args),
        Commands::Download(download_args) => download::run_download(download_args),
        Commands::Stations => stations::run_stations(),
    }
}
