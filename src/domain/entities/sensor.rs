//! Sensor entity
//!
//! Physical sensor dimensions in millimeters. The diagonal drives the circle
//! of confusion used by every depth-of-field formula.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CocDivisor, SensorFormat, ZeissRatio};
use crate::error::{DofError, DofResult};

/// Camera sensor, immutable once built
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SensorDimensions", into = "SensorDimensions")]
pub struct Sensor {
    width: f64,
    height: f64,
}

#[derive(Serialize, Deserialize)]
struct SensorDimensions {
    width: f64,
    height: f64,
}

impl Sensor {
    /// Create a sensor; both dimensions must be positive and finite
    pub fn new(width: f64, height: f64) -> DofResult<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(DofError::InvalidSensorDimensions { width, height })
        }
    }

    // Only reachable with the positive literals in `SensorFormat::dimensions`.
    pub(crate) fn from_format_dimensions(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn full_frame() -> Self {
        SensorFormat::FullFrame.sensor()
    }

    pub fn aps_h() -> Self {
        SensorFormat::ApsH.sensor()
    }

    pub fn aps_c() -> Self {
        SensorFormat::ApsC.sensor()
    }

    pub fn aps_c_canon() -> Self {
        SensorFormat::ApsCCanon.sensor()
    }

    pub fn foveon() -> Self {
        SensorFormat::Foveon.sensor()
    }

    pub fn micro_four_thirds() -> Self {
        SensorFormat::MicroFourThirds.sensor()
    }

    pub fn one_inch() -> Self {
        SensorFormat::OneInch.sensor()
    }

    pub fn two_thirds_inch() -> Self {
        SensorFormat::TwoThirdsInch.sensor()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// `sqrt(width² + height²)`
    pub fn diagonal(&self) -> f64 {
        (self.width * self.width + self.height * self.height).sqrt()
    }

    /// Diagonal divided by the given divisor
    pub fn circle_of_confusion(&self, divisor: impl Into<CocDivisor>) -> f64 {
        self.diagonal() / divisor.into().value()
    }

    /// Circle of confusion with the modern Zeiss ratio
    pub fn default_circle_of_confusion(&self) -> f64 {
        self.circle_of_confusion(ZeissRatio::Modern)
    }

    /// Diagonal of a full-frame sensor divided by this sensor's diagonal
    pub fn crop_factor(&self) -> f64 {
        Self::full_frame().diagonal() / self.diagonal()
    }

    /// The standard format with exactly these dimensions, if any
    pub fn format(&self) -> Option<SensorFormat> {
        SensorFormat::ALL
            .into_iter()
            .find(|format| format.dimensions() == (self.width, self.height))
    }
}

impl Default for Sensor {
    fn default() -> Self {
        Self::full_frame()
    }
}

impl TryFrom<SensorDimensions> for Sensor {
    type Error = DofError;

    fn try_from(dims: SensorDimensions) -> Result<Self, Self::Error> {
        Sensor::new(dims.width, dims.height)
    }
}

impl From<Sensor> for SensorDimensions {
    fn from(sensor: Sensor) -> Self {
        Self {
            width: sensor.width,
            height: sensor.height,
        }
    }
}

impl std::fmt::Display for Sensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.format() {
            Some(format) => write!(f, "{} ({} x {} mm)", format, self.width, self.height),
            None => write!(f, "{} x {} mm", self.width, self.height),
        }
    }
}
