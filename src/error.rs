//! Error types for dofcalc
//!
//! Uses `thiserror` for library errors. Every variant is a validation failure:
//! nothing here is transient and nothing is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for depth-of-field operations
pub type DofResult<T> = Result<T, DofError>;

/// Main error type for sensor, lens and calculation failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DofError {
    /// Requested f-number is wider than the lens opens
    #[error("aperture f/{requested} is below the lens minimum f-number f/{limit}")]
    ApertureBelowLensMinimum { requested: f64, limit: f64 },

    /// Requested f-number is narrower than the lens stops down
    #[error("aperture f/{requested} is above the lens maximum f-number f/{limit}")]
    ApertureAboveLensMaximum { requested: f64, limit: f64 },

    /// Object is closer than the lens can focus
    #[error("object distance {requested} mm is below the minimum focus distance {limit} mm")]
    ObjectDistanceBelowMinimumFocus { requested: f64, limit: f64 },

    /// Sensor width or height is not a positive finite number
    #[error("invalid sensor dimensions {width} x {height} mm (both must be positive)")]
    InvalidSensorDimensions { width: f64, height: f64 },

    /// A lens length or aperture is not a positive finite number
    #[error("invalid lens {field}: {value} (must be a positive number)")]
    InvalidLensParameter { field: &'static str, value: f64 },

    /// Widest aperture is numerically larger than the narrowest one
    #[error("invalid aperture range f/{max_aperture} - f/{min_aperture}: the widest aperture must not exceed the narrowest")]
    InvalidApertureRange { max_aperture: f64, min_aperture: f64 },

    /// Custom circle-of-confusion divisor is zero, negative or not finite
    #[error("circle of confusion divisor must be positive, got {divisor}")]
    NonPositiveCocDivisor { divisor: f64 },
}

/// Errors raised while reading configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("invalid config in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// One key of a pair was set without the other
    #[error("config key '{key}' requires '{requires}' to be set as well")]
    MissingKey {
        key: &'static str,
        requires: &'static str,
    },

    /// Config parsed but describes an impossible setup
    #[error("invalid config value: {0}")]
    Invalid(#[from] DofError),
}
