//! Shared components for CLI commands
//!
//! This module contains the processing statistics type and the logging,
//! configuration and progress helpers used across command implementations.

use tracing::{debug, info};

use crate::cli::args::SampleArgs;
use crate::config::Config;
use crate::{Error, Result};

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of resource keys in the requested batch
    pub keys_requested: usize,
    /// Number of keys fully processed
    pub keys_processed: usize,
    /// Number of keys skipped after a per-key failure
    pub keys_skipped: usize,
    /// Number of frame images written
    pub frames_saved: usize,
    /// Number of CSV manifests written
    pub manifests_written: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl ProcessingStats {
    /// Format a byte count in human-readable form
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging at the given level filter
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("webcat_sampler={}", log_level)));

    // Standard logging with uptime timestamps, written to stderr so that
    // progress bars and reports keep stdout
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (file -> CLI overrides)
pub fn load_configuration(args: &SampleArgs) -> Result<Config> {
    info!("Loading configuration");

    let mut config = Config::load_layered(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &SampleArgs) {
    if let Some(interval) = args.interval {
        config.processing.interval_secs = interval;
    }
    if args.no_meta {
        config.processing.write_manifest = false;
    }
    config.logging.level = args.get_log_level().to_string();
}

/// Check if an error is critical enough to stop batch processing
pub fn is_critical_error(error: &Error) -> bool {
    matches!(error, Error::Configuration { .. })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_args() -> SampleArgs {
        SampleArgs {
            directory: PathBuf::from("."),
            stations: vec!["buxtoncoastalcam".to_string()],
            years: vec![2019],
            months: vec![11],
            days: vec![13],
            times: vec![1000],
            interval: None,
            no_meta: false,
            verbose: 0,
            quiet: false,
            config_file: None,
        }
    }

    #[test]
    fn test_processing_stats_default() {
        let stats = ProcessingStats::default();
        assert_eq!(stats.keys_requested, 0);
        assert_eq!(stats.keys_skipped, 0);
        assert_eq!(stats.frames_saved, 0);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(ProcessingStats::format_size(512), "512 B");
        assert_eq!(ProcessingStats::format_size(2048), "2.00 KB");
        assert_eq!(ProcessingStats::format_size(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_cli_overrides_interval_and_manifest() {
        let mut config = Config::default();
        let mut args = sample_args();
        args.interval = Some(42);
        args.no_meta = true;

        apply_cli_overrides(&mut config, &args);
        assert_eq!(config.processing.interval_secs, 42);
        assert!(!config.processing.write_manifest);
    }

    #[test]
    fn test_cli_defaults_leave_config_untouched() {
        let mut config = Config::default();
        config.processing.interval_secs = 25;

        apply_cli_overrides(&mut config, &sample_args());
        assert_eq!(config.processing.interval_secs, 25);
        assert!(config.processing.write_manifest);
    }

    #[test]
    fn test_critical_errors() {
        assert!(is_critical_error(&Error::configuration("bad setup")));
        assert!(!is_critical_error(&Error::invalid_resource("http://x")));
        assert!(!is_critical_error(&Error::invalid_interval(610, 610)));
        assert!(!is_critical_error(&Error::frame_decode(8400)));
    }
}
