//! TOML-based run configuration with defaults and validation.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level run configuration parsed from TOML.
///
/// All fields have defaults matching the stock single-day run. Load from
/// TOML with [`RunConfig::from_toml_file`] or use [`RunConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Demand data source settings.
    #[serde(default)]
    pub input: InputConfig,
    /// Output image settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// Simulation seeding.
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Demand data source settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Path to the UCI household power consumption text file.
    pub data_path: PathBuf,
    /// Calendar day to slice out of the dataset.
    pub day: NaiveDate,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("household_power_consumption.txt"),
            day: NaiveDate::from_ymd_opt(2008, 6, 1).expect("literal date is valid"),
        }
    }
}

/// Output image settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Path of the rendered PNG.
    pub image_path: PathBuf,
    /// Image width in pixels (must be > 0).
    pub width: u32,
    /// Image height in pixels (must be > 0).
    pub height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            image_path: PathBuf::from("project_balance_simulation.png"),
            width: 1500,
            height: 800,
        }
    }
}

/// Simulation seeding.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Master random seed for the solar and grid-event generators.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"output.width"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl RunConfig {
    /// Parses a run configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a run configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.input.data_path.as_os_str().is_empty() {
            errors.push(ConfigError {
                field: "input.data_path".into(),
                message: "must not be empty".into(),
            });
        }
        if self.output.image_path.as_os_str().is_empty() {
            errors.push(ConfigError {
                field: "output.image_path".into(),
                message: "must not be empty".into(),
            });
        }
        if self.output.width == 0 {
            errors.push(ConfigError {
                field: "output.width".into(),
                message: "must be > 0".into(),
            });
        }
        if self.output.height == 0 {
            errors.push(ConfigError {
                field: "output.height".into(),
                message: "must be > 0".into(),
            });
        }

        errors
    }
}
