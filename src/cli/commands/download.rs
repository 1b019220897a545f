//! Download command implementation for the WebCAT sampler CLI
//!
//! Fetches a single archive video to a local file. Unlike the batch
//! sampler this command operates on exactly one key and propagates any
//! failure to the caller.

use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use super::shared::{ProcessingStats, setup_logging};
use crate::Result;
use crate::app::models::ResourceKey;
use crate::app::services::downloader;
use crate::cli::args::DownloadArgs;

/// Download command runner for the WebCAT sampler
pub fn run_download(args: DownloadArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(args.get_log_level())?;

    info!("Starting WebCAT video download");
    debug!("Download arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    let key = ResourceKey::new(
        args.station.clone(),
        args.year,
        args.month,
        args.day,
        args.time,
    );

    let dest = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}.mp4", key.name())));

    info!("Downloading {}", key.url());
    let bytes = downloader::download(&key.url(), &dest, args.show_progress())?;

    println!(
        "Saved {} ({}) to {}",
        key.name(),
        ProcessingStats::format_size(bytes),
        dest.display()
    );

    Ok(ProcessingStats {
        keys_requested: 1,
        keys_processed: 1,
        processing_time: start_time.elapsed(),
        ..Default::default()
    })
}
