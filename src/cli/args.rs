//! Command-line argument definitions for the WebCAT sampler
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Range validation for key components lives here, at the program
//! boundary; resource keys themselves stay unvalidated values.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::TIME_STEP_MINUTES;
use crate::{Error, Result};

/// CLI arguments for the WebCAT frame sampler
///
/// Samples time-spaced frames from WebCAT coastal webcam videos into local
/// JPEG files with an optional CSV manifest per video.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "webcat-sampler",
    version,
    about = "Sample time-spaced frames from WebCAT coastal webcam videos",
    long_about = "Builds deterministic WebCAT archive URLs from station/date/time keys, \
                  validates each remote video stream, and extracts one frame every N \
                  seconds into per-video directories, together with a CSV manifest of \
                  the extracted frames."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the WebCAT sampler
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Extract frames from one or more archive videos (main command)
    Sample(SampleArgs),
    /// Download a single archive video to a local file
    Download(DownloadArgs),
    /// List the known WebCAT station identifiers
    Stations,
}

/// Arguments for the sample command (batch frame extraction)
#[derive(Debug, Clone, Parser)]
pub struct SampleArgs {
    /// Directory to save frames in
    ///
    /// Each processed video gets its own subdirectory
    /// `<directory>/<station>/<name>` holding a `jpg/` folder of frames and
    /// the CSV manifest. Must already exist.
    #[arg(
        short = 'o',
        long = "directory",
        value_name = "PATH",
        help = "Directory to save frames in"
    )]
    pub directory: PathBuf,

    /// Station name(s), e.g. buxtoncoastalcam
    #[arg(
        short = 's',
        long = "station",
        value_name = "NAME",
        num_args = 1..,
        required = true,
        help = "One or more station names, e.g. buxtoncoastalcam"
    )]
    pub stations: Vec<String>,

    /// Video year(s), e.g. 2019 2020
    #[arg(
        short = 'y',
        long = "year",
        value_name = "YEAR",
        num_args = 1..,
        required = true,
        help = "One or more video years, e.g. 2019 2020"
    )]
    pub years: Vec<i32>,

    /// Video month(s), e.g. 9 10 11
    #[arg(
        short = 'm',
        long = "month",
        value_name = "MONTH",
        num_args = 1..,
        required = true,
        help = "One or more video months, e.g. 9 10 11"
    )]
    pub months: Vec<u32>,

    /// Video day(s), e.g. 1 11 21
    #[arg(
        short = 'd',
        long = "day",
        value_name = "DAY",
        num_args = 1..,
        required = true,
        help = "One or more video days, e.g. 1 11 21"
    )]
    pub days: Vec<u32>,

    /// Video time(s) on a 24h clock in ten-minute steps, e.g. 1000 1330
    #[arg(
        short = 't',
        long = "time",
        value_name = "TIME",
        num_args = 1..,
        required = true,
        help = "One or more video times, e.g. 1000 1330 1510"
    )]
    pub times: Vec<u32>,

    /// Interval in seconds between sampled frames
    ///
    /// Defaults to the configured value (10 seconds unless overridden by a
    /// config file). Must be strictly less than each video's duration.
    #[arg(
        short = 'i',
        long = "interval",
        value_name = "SECONDS",
        help = "Interval in seconds between sampled frames (default: 10)"
    )]
    pub interval: Option<i64>,

    /// Don't save the CSV manifest of extracted frame metadata
    #[arg(
        short = 'n',
        long = "no-meta",
        help = "Don't save a CSV manifest of extracted frame metadata"
    )]
    pub no_meta: bool,

    /// Logging verbosity level; also enables per-video progress bars
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file for defaults. If not specified, looks for
    /// ~/.config/webcat-sampler/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,
}

/// Arguments for the download command (single video fetch)
#[derive(Debug, Clone, Parser)]
pub struct DownloadArgs {
    /// Station name, e.g. buxtoncoastalcam
    #[arg(short = 's', long = "station", value_name = "NAME")]
    pub station: String,

    /// Video year, e.g. 2019
    #[arg(short = 'y', long = "year", value_name = "YEAR")]
    pub year: i32,

    /// Video month, e.g. 11
    #[arg(short = 'm', long = "month", value_name = "MONTH")]
    pub month: u32,

    /// Video day, e.g. 13
    #[arg(short = 'd', long = "day", value_name = "DAY")]
    pub day: u32,

    /// Video time on a 24h clock in ten-minute steps, e.g. 1000
    #[arg(short = 't', long = "time", value_name = "TIME")]
    pub time: u32,

    /// Output file path
    ///
    /// Defaults to `<name>.mp4` in the current directory.
    #[arg(
        short = 'O',
        long = "output",
        value_name = "FILE",
        help = "Output file path (default: <name>.mp4)"
    )]
    pub output: Option<PathBuf>,

    /// Logging verbosity level; also enables the download progress bar
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl SampleArgs {
    /// Validate the sample command arguments for consistency
    ///
    /// Only per-dimension ranges are checked here. Cross-product
    /// combinations that name a nonexistent calendar date (e.g. day 31
    /// with month 2 in a multi-day batch) are left for the remote probe
    /// to reject, so one impossible combination never blocks the batch.
    pub fn validate(&self) -> Result<()> {
        if !self.directory.exists() {
            return Err(Error::configuration(format!(
                "output directory does not exist: {}",
                self.directory.display()
            )));
        }

        if !self.directory.is_dir() {
            return Err(Error::configuration(format!(
                "output path is not a directory: {}",
                self.directory.display()
            )));
        }

        for &month in &self.months {
            if !(1..=12).contains(&month) {
                return Err(Error::configuration(format!(
                    "month {} out of range (1-12)",
                    month
                )));
            }
        }

        for &day in &self.days {
            if !(1..=31).contains(&day) {
                return Err(Error::configuration(format!(
                    "day {} out of range (1-31)",
                    day
                )));
            }
        }

        for &time in &self.times {
            validate_time(time)?;
        }

        if let Some(interval) = self.interval {
            if interval < 1 {
                return Err(Error::configuration(
                    "sampling interval must be at least 1 second",
                ));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (verbose and not quiet)
    pub fn show_progress(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }
}

impl DownloadArgs {
    /// Validate the download command arguments for consistency
    ///
    /// A single key is fully checkable up front, so unlike the batch this
    /// also rejects dates that don't exist on the calendar.
    pub fn validate(&self) -> Result<()> {
        if chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            return Err(Error::configuration(format!(
                "{}-{}-{} is not a valid calendar date",
                self.year, self.month, self.day
            )));
        }

        validate_time(self.time)?;

        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Check if we should show the download progress bar
    pub fn show_progress(&self) -> bool {
        self.verbose > 0
    }
}

/// Validate a 24h archive time value (0-2359 in ten-minute steps)
fn validate_time(time: u32) -> Result<()> {
    if time > 2359 || time % 100 >= 60 {
        return Err(Error::configuration(format!(
            "time {} is not a valid 24h clock value",
            time
        )));
    }

    if time % TIME_STEP_MINUTES != 0 {
        return Err(Error::configuration(format!(
            "time {} is not a multiple of {} minutes",
            time, TIME_STEP_MINUTES
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_args(directory: PathBuf) -> SampleArgs {
        SampleArgs {
            directory,
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
    fn test_sample_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let args = sample_args(temp_dir.path().to_path_buf());
        assert!(args.validate().is_ok());

        // Nonexistent output directory
        let mut invalid = args.clone();
        invalid.directory = PathBuf::from("/nonexistent/path");
        assert!(invalid.validate().is_err());

        // Month out of range
        let mut invalid = args.clone();
        invalid.months = vec![11, 13];
        assert!(invalid.validate().is_err());

        // Day out of range
        let mut invalid = args.clone();
        invalid.days = vec![0];
        assert!(invalid.validate().is_err());

        // Zero interval
        let mut invalid = args.clone();
        invalid.interval = Some(0);
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_sample_args_allow_impossible_cross_product_dates() {
        // Day 31 is in range even though not every month has it; the batch
        // skips the combinations the archive doesn't have.
        let temp_dir = TempDir::new().unwrap();
        let mut args = sample_args(temp_dir.path().to_path_buf());
        args.months = vec![2, 3];
        args.days = vec![30, 31];
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_time_validation() {
        assert!(validate_time(0).is_ok());
        assert!(validate_time(500).is_ok());
        assert!(validate_time(1330).is_ok());
        assert!(validate_time(2350).is_ok());

        // Past the 24h clock
        assert!(validate_time(2400).is_err());
        // Minutes field past 59
        assert!(validate_time(1270).is_err());
        // Not a ten-minute step
        assert!(validate_time(1005).is_err());
    }

    #[test]
    fn test_download_args_validation() {
        let args = DownloadArgs {
            station: "buxtoncoastalcam".to_string(),
            year: 2019,
            month: 11,
            day: 13,
            time: 1000,
            output: None,
            verbose: 0,
        };
        assert!(args.validate().is_ok());

        // A single key rejects impossible calendar dates up front
        let mut invalid = args.clone();
        invalid.month = 2;
        invalid.day = 31;
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.time = 1234;
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = sample_args(temp_dir.path().to_path_buf());

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = sample_args(temp_dir.path().to_path_buf());

        // Progress bars only appear in verbose mode, like the skip notices
        assert!(!args.show_progress());

        args.verbose = 1;
        assert!(args.show_progress());
    }
}
