//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::Sensor;
use crate::domain::value_objects::{CocDivisor, SensorFormat, ZeissRatio};
use crate::error::ConfigError;
use crate::infrastructure::default_catalog_path;

use super::loader::{self, ConfigWarning};

/// Calculation defaults: which sensor and which CoC divisor to use
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CalculationConfig {
    #[serde(default)]
    pub zeiss: ZeissRatio,

    /// Overrides `zeiss` when set
    #[serde(default)]
    pub coc_divisor: Option<f64>,

    #[serde(default)]
    pub sensor: SensorFormat,

    /// Custom sensor; overrides `sensor` when both dimensions are set
    #[serde(default)]
    pub sensor_width: Option<f64>,

    #[serde(default)]
    pub sensor_height: Option<f64>,
}

/// Where the lens catalog lives
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CatalogConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,

    /// Decimal places for distances in text output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
            precision: default_precision(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_precision() -> usize {
    1
}

/// Color output mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub calculation: CalculationConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load from an explicit path, the working directory, the user config dir,
    /// or defaults, then apply `DOFCALC_*` overrides
    pub fn discover(
        explicit: Option<&Path>,
        project_root: Option<&Path>,
    ) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::discover(explicit, project_root)
    }

    /// The configured sensor, custom dimensions taking precedence over the format
    pub fn sensor(&self) -> Result<Sensor, ConfigError> {
        let calculation = &self.calculation;
        match (calculation.sensor_width, calculation.sensor_height) {
            (Some(width), Some(height)) => Ok(Sensor::new(width, height)?),
            (Some(_), None) => Err(ConfigError::MissingKey {
                key: "calculation.sensor_width",
                requires: "calculation.sensor_height",
            }),
            (None, Some(_)) => Err(ConfigError::MissingKey {
                key: "calculation.sensor_height",
                requires: "calculation.sensor_width",
            }),
            (None, None) => Ok(calculation.sensor.sensor()),
        }
    }

    /// The configured divisor, a custom value taking precedence over the Zeiss ratio
    pub fn coc_divisor(&self) -> Result<CocDivisor, ConfigError> {
        match self.calculation.coc_divisor {
            Some(divisor) => Ok(CocDivisor::custom(divisor)?),
            None => Ok(self.calculation.zeiss.into()),
        }
    }

    /// Catalog file path (configured or the per-user default)
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog
            .path
            .clone()
            .unwrap_or_else(default_catalog_path)
    }
}
