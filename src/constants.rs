//! Application constants for the WebCAT sampler
//!
//! This module contains the archive host, the known station identifiers,
//! and the default values and fixed names used throughout the application.

// =============================================================================
// Archive Layout
// =============================================================================

/// Host serving the raw WebCAT video archive
pub const WEBCAT_VIDEO_HOST: &str = "http://webcat-video.axds.co";

/// Known WebCAT station identifiers
///
/// Informational only: station strings are never validated against this
/// list, since the archive may gain cameras. Probing the remote stream is
/// the sole validity check.
pub const STATION_NAMES: &[&str] = &[
    "buxtoncoastalcam",
    "cherrypiersouthcam",
    "follypiernorthcam",
    "follypiersouthcam",
    "miami40thcam",
    "northinletcam",
    "oakislandwestcam",
    "staugustinecam",
    "twinpierscam",
];

/// Archive videos are keyed in ten-minute time steps (24h clock, e.g. 1330)
pub const TIME_STEP_MINUTES: u32 = 10;

// =============================================================================
// Output Layout
// =============================================================================

/// Subdirectory (under the per-key output directory) receiving frame images
pub const FRAME_DIR_NAME: &str = "jpg";

/// File extension of extracted frame images
pub const FRAME_IMAGE_EXT: &str = "jpg";

// =============================================================================
// Sampling Defaults
// =============================================================================

/// Default number of seconds between sampled frames
pub const DEFAULT_INTERVAL_SECS: i64 = 10;
