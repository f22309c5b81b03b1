//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::probe::contour::DEFAULT_MARGIN;
use crate::probe::{Outline, ProbeType};

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

    /// Outline settings for column-based generators.
    #[serde(default)]
    pub outline: OutlineConfig,

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
        self.outline.to_outline().map(|_| ())
    }
}

/// Outline configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutlineConfig {
    /// Outline style: "tip" or "rect".
    /// Default: "tip"
    #[serde(default = "default_probe_type")]
    pub probe_type: String,

    /// Clearance between contact centres and the outline, in micrometres.
    #[serde(default = "default_margin")]
    pub margin: f64,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            probe_type: default_probe_type(),
            margin: default_margin(),
        }
    }
}

impl OutlineConfig {
    /// Converts to a validated [`Outline`].
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown probe type or a negative or
    /// non-finite margin.
    pub fn to_outline(&self) -> Result<Outline, ConfigError> {
        let probe_type: ProbeType = self
            .probe_type
            .parse()
            .map_err(|_| ConfigError::ValidationError {
                message: format!(
                    "Invalid outline probe type '{}'. Must be one of: tip, rect",
                    self.probe_type
                ),
            })?;

        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid outline margin {}. Must be a non-negative number",
                    self.margin
                ),
            });
        }

        Ok(Outline {
            probe_type,
            margin: self.margin,
        })
    }
}

fn default_probe_type() -> String {
    "tip".to_string()
}

const fn default_margin() -> f64 {
    DEFAULT_MARGIN
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_true(),
        }
    }
}

const fn default_true() -> bool {
    true
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
