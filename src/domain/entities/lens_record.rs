//! Six-field lens record
//!
//! The one JSON shape of a lens, shared by the catalog file and `--json`
//! output. `Lens` serializes through it; decoding validates through
//! [`Lens::from_parts`].

use serde::{Deserialize, Serialize};

use super::lens::{Lens, DEFAULT_MIN_APERTURE};
use crate::error::DofError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LensRecord {
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    /// Empty when the lens has no model name
    #[serde(rename = "Model", default)]
    pub model: String,
    #[serde(rename = "MaximumAperture")]
    pub maximum_aperture: f64,
    #[serde(rename = "MinimumAperture", default = "default_min_aperture")]
    pub minimum_aperture: f64,
    #[serde(rename = "FocalLength")]
    pub focal_length: f64,
    #[serde(rename = "MinimalFocalDistance")]
    pub minimal_focal_distance: f64,
}

fn default_min_aperture() -> f64 {
    DEFAULT_MIN_APERTURE
}

impl From<&Lens> for LensRecord {
    fn from(lens: &Lens) -> Self {
        Self {
            manufacturer: lens.manufacturer().to_string(),
            model: lens.model_name().unwrap_or_default().to_string(),
            maximum_aperture: lens.max_aperture(),
            minimum_aperture: lens.min_aperture(),
            focal_length: lens.focal_length(),
            minimal_focal_distance: lens.minimal_focal_distance(),
        }
    }
}

impl From<Lens> for LensRecord {
    fn from(lens: Lens) -> Self {
        LensRecord::from(&lens)
    }
}

impl TryFrom<LensRecord> for Lens {
    type Error = DofError;

    fn try_from(record: LensRecord) -> Result<Self, Self::Error> {
        Lens::from_parts(
            record.manufacturer,
            Some(record.model),
            record.maximum_aperture,
            record.minimum_aperture,
            record.focal_length,
            record.minimal_focal_distance,
        )
    }
}
