//! WebCAT Frame Sampler Library
//!
//! A Rust library for sampling time-spaced frames from WebCAT coastal
//! webcam videos hosted on the Axiom Data Science archive.
//!
//! This library provides tools for:
//! - Building deterministic archive URLs from (station, date, time) keys
//! - Probing remote video streams and validating they are decodable
//! - Extracting frames at a fixed time interval to local JPEG files
//! - Writing a CSV manifest describing every extracted frame
//! - Downloading whole videos with progress reporting

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod downloader;
        pub mod frame_sampler;
        pub mod stream_prober;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ResourceKey, SampleManifestRow};
pub use app::services::stream_prober::{Session, VideoHandle};
pub use config::Config;

/// Result type alias for the WebCAT sampler
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for WebCAT sampling operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The remote URL does not resolve to a decodable video stream. The
    /// archive transport gives no distinct "not found" signal; a stream
    /// reporting zero frames is the only available indicator.
    #[error("{url} is not a valid WebCAT video resource")]
    InvalidResource { url: String },

    /// Requested sampling interval is not strictly less than the video's
    /// duration in whole seconds
    #[error(
        "sampling interval of {delta_secs}s must be less than the video duration of {duration_secs}s"
    )]
    InvalidInterval { delta_secs: i64, duration_secs: i64 },

    /// A specific sample index could not be decoded after a successful seek
    #[error("failed to decode frame {frame_index}")]
    FrameDecode { frame_index: i64 },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Video backend (OpenCV) call failed
    #[error("video backend error: {message}")]
    Video {
        message: String,
        #[source]
        source: opencv::Error,
    },

    /// Manifest CSV writing error
    #[error("manifest write error: {message}")]
    ManifestWrite {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// Video download error
    #[error("download error for '{url}': {message}")]
    Download { url: String, message: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an invalid resource error for a probed URL
    pub fn invalid_resource(url: impl Into<String>) -> Self {
        Self::InvalidResource { url: url.into() }
    }

    /// Create an invalid interval error
    pub fn invalid_interval(delta_secs: i64, duration_secs: i64) -> Self {
        Self::InvalidInterval {
            delta_secs,
            duration_secs,
        }
    }

    /// Create a frame decode error for a specific sample index
    pub fn frame_decode(frame_index: i64) -> Self {
        Self::FrameDecode { frame_index }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error from a simple message
    pub fn io_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Io {
            source: std::io::Error::other(message.clone()),
            message,
        }
    }

    /// Create a download error with context
    pub fn download(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Download {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<opencv::Error> for Error {
    fn from(error: opencv::Error) -> Self {
        Self::Video {
            message: error.message.clone(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::ManifestWrite {
            message: "CSV manifest writing failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Download {
            url: error
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "<unknown>".to_string()),
            message: error.to_string(),
        }
    }
}
