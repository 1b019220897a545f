//! Configuration management and validation.
//!
//! Provides layered configuration for the sampler: built-in defaults,
//! then an optional TOML file, with command-line overrides applied last
//! by the CLI layer.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::DEFAULT_INTERVAL_SECS;
use crate::{Error, Result};

/// Top-level configuration for the WebCAT sampler
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Frame sampling settings
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Frame sampling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Seconds between sampled frames
    pub interval_secs: i64,

    /// Write a CSV manifest of extracted frames alongside the images
    pub write_manifest: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_INTERVAL_SECS,
            write_manifest: true,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter: error, warn, info, debug or trace
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default location of the user configuration file
    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            Error::configuration("could not determine the user configuration directory")
        })?;
        Ok(base.join("webcat-sampler").join("config.toml"))
    }

    /// Load configuration using the layered approach (defaults -> file)
    ///
    /// When no explicit file is given, the default location is used if a
    /// file exists there. CLI overrides are applied by the caller.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let path = match config_file {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_config_path()
                .ok()
                .filter(|path| path.exists()),
        };

        let config = match path {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_file(&path)?
            }
            None => {
                debug!("No configuration file found, using defaults");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration file in TOML format
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("failed to read config file '{}'", path.display()),
                e,
            )
        })?;

        toml::from_str(&raw).map_err(|e| {
            Error::configuration(format!("invalid config file '{}': {}", path.display(), e))
        })
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.processing.interval_secs < 1 {
            return Err(Error::configuration(
                "sampling interval must be at least 1 second",
            ));
        }

        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(Error::configuration(format!(
                    "unknown log level '{}': expected error, warn, info, debug or trace",
                    other
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.processing.interval_secs, DEFAULT_INTERVAL_SECS);
        assert!(config.processing.write_manifest);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_full() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[processing]\ninterval_secs = 30\nwrite_manifest = false\n\n[logging]\nlevel = \"debug\"\n"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.processing.interval_secs, 30);
        assert!(!config.processing.write_manifest);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_from_file_partial_sections_take_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[processing]\ninterval_secs = 5\n").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.processing.interval_secs, 5);
        assert!(config.processing.write_manifest);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [").unwrap();

        assert!(Config::from_file(file.path()).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = Config::default();
        config.processing.interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_layered_with_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[processing]\ninterval_secs = 60\n").unwrap();

        let config = Config::load_layered(Some(file.path())).unwrap();
        assert_eq!(config.processing.interval_secs, 60);
    }
}
