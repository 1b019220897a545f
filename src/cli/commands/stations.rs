//! Stations command implementation for the WebCAT sampler CLI
//!
//! Prints the known WebCAT station identifiers. The list is informational;
//! the sampler accepts any station string and lets the remote probe decide
//! whether a video exists.

use colored::Colorize;

use super::shared::ProcessingStats;
use crate::Result;
use crate::constants::{STATION_NAMES, WEBCAT_VIDEO_HOST};

/// Stations command runner for the WebCAT sampler
pub fn run_stations() -> Result<ProcessingStats> {
    println!("{}", "Known WebCAT stations".bold());
    println!();

    for name in STATION_NAMES {
        println!("  {}", name.cyan());
    }

    println!();
    println!("Videos are served from {}", WEBCAT_VIDEO_HOST);
    println!(
        "Example: webcat-sampler sample -o ./frames -s {} -y 2019 -m 11 -d 13 -t 1000",
        STATION_NAMES[0]
    );

    Ok(ProcessingStats::default())
}
