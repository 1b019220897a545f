//! Sample command implementation for the WebCAT sampler CLI
//!
//! This is the batch driver: it expands the requested station/date/time
//! lists into individual resource keys and runs the probe-and-extract
//! pipeline per key, isolating per-key failures so that one bad key never
//! aborts the batch.

use colored::Colorize;
use std::fs;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::shared::{ProcessingStats, is_critical_error, load_configuration, setup_logging};
use crate::app::models::ResourceKey;
use crate::app::services::frame_sampler;
use crate::app::services::stream_prober::Session;
use crate::cli::args::SampleArgs;
use crate::config::Config;
use crate::{Error, Result};

/// Sample command runner for the WebCAT sampler
///
/// This function orchestrates the batch workflow:
/// 1. Set up logging and configuration
/// 2. Expand the cross-product of stations, dates and times into keys
/// 3. Probe and sample each key sequentially, skipping failed keys
/// 4. Report summary statistics
pub fn run_sample(args: SampleArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(args.get_log_level())?;

    info!("Starting WebCAT frame sampling");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration with CLI overrides applied
    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let keys = expand_keys(
        &args.stations,
        &args.years,
        &args.months,
        &args.days,
        &args.times,
    );
    info!(
        "Processing {} resource keys across {} stations",
        keys.len(),
        args.stations.len()
    );

    let mut stats = ProcessingStats {
        keys_requested: keys.len(),
        ..Default::default()
    };

    // One reusable session; each key replaces the previous stream.
    let mut session = Session::new();

    for key in &keys {
        match sample_one(&mut session, key, &args, &config) {
            Ok(frames_saved) => {
                stats.keys_processed += 1;
                stats.frames_saved += frames_saved;
                if config.processing.write_manifest {
                    stats.manifests_written += 1;
                }

                info!("Saved {} frames of {}", frames_saved, key.name());
            }
            Err(e) => {
                // Per-key failures are isolated; only configuration
                // problems abort the whole batch.
                if is_critical_error(&e) {
                    return Err(e);
                }

                warn!("{} failed ({}), skipping", key.url(), e);
                stats.keys_skipped += 1;
            }
        }
    }

    stats.processing_time = start_time.elapsed();
    print_final_report(&stats);

    Ok(stats)
}

/// Probe one key and extract its frames
///
/// Failures propagate to the caller untouched; the batch loop above is the
/// only recovery boundary.
fn sample_one(
    session: &mut Session,
    key: &ResourceKey,
    args: &SampleArgs,
    config: &Config,
) -> Result<usize> {
    // Per-key output directory, created on demand
    let key_dir = args.directory.join(&key.station).join(key.name());
    fs::create_dir_all(&key_dir).map_err(|e| {
        Error::io(
            format!("failed to create output directory '{}'", key_dir.display()),
            e,
        )
    })?;

    let handle = session.generate(key.clone())?;

    info!("Saving frames of {}...", key.name());
    let rows = frame_sampler::save_frames(
        handle,
        key,
        config.processing.interval_secs,
        &key_dir,
        config.processing.write_manifest,
        args.show_progress(),
    )?;

    Ok(rows.len())
}

/// Expand the cross-product of the five key dimensions, outer-to-inner:
/// station, year, month, day, time.
pub fn expand_keys(
    stations: &[String],
    years: &[i32],
    months: &[u32],
    days: &[u32],
    times: &[u32],
) -> Vec<ResourceKey> {
    let mut keys =
        Vec::with_capacity(stations.len() * years.len() * months.len() * days.len() * times.len());

    for station in stations {
        for &year in years {
            for &month in months {
                for &day in days {
                    for &time in times {
                        keys.push(ResourceKey::new(station.clone(), year, month, day, time));
                    }
                }
            }
        }
    }

    keys
}

/// Print the batch summary to stdout
fn print_final_report(stats: &ProcessingStats) {
    println!();
    println!("{}", "Sampling complete".green().bold());
    println!("  Keys requested:    {}", stats.keys_requested);
    println!("  Keys processed:    {}", stats.keys_processed);
    if stats.keys_skipped > 0 {
        println!(
            "  Keys skipped:      {}",
            stats.keys_skipped.to_string().yellow()
        );
    } else {
        println!("  Keys skipped:      0");
    }
    println!("  Frames saved:      {}", stats.frames_saved);
    println!("  Manifests written: {}", stats.manifests_written);
    println!(
        "  Elapsed:           {:.2}s",
        stats.processing_time.as_secs_f64()
    );
}
