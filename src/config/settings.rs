//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::naca::stations::MIN_STATIONS;
use crate::output::OutputFormat;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Geometry settings.
    #[serde(default)]
    pub geometry: GeometryConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.geometry.default_stations < MIN_STATIONS {
            return Err(ConfigError::Validation {
                message: format!(
                    "default_stations must be at least {MIN_STATIONS}, got {}",
                    self.geometry.default_stations
                ),
            });
        }

        if OutputFormat::from_str_loose(&self.output.default_format).is_none() {
            return Err(ConfigError::Validation {
                message: format!(
                    "Invalid output format '{}'. Must be one of: raw, ac3d, json",
                    self.output.default_format
                ),
            });
        }
        Ok(())
    }
}

/// Geometry configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeometryConfig {
    /// Chordwise stations per surface when `-n` is not given.
    /// Default: 20
    #[serde(default = "default_stations")]
    pub default_stations: usize,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            default_stations: default_stations(),
        }
    }
}

const fn default_stations() -> usize {
    20
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format when `--format` is not given: "raw", "ac3d", "json".
    /// Default: "raw"
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

fn default_format() -> String {
    "raw".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
