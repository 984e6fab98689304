//! Lens entity
//!
//! A fixed focal length lens. Every numeric field is validated on the way in,
//! so a `Lens` value always has a non-empty aperture range and positive
//! lengths. Edits produce new values through the `with_*` methods.
//!
//! Identity (`Eq`/`Hash`) covers manufacturer, model, widest aperture and focal
//! length. Catalog display order ([`Lens::catalog_cmp`]) additionally breaks
//! ties on the remaining fields, so it is a method rather than an `Ord` impl.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::lens_record::LensRecord;
use crate::error::{DofError, DofResult};

/// Narrowest f-number assumed when none is given
pub const DEFAULT_MIN_APERTURE: f64 = 22.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "LensRecord", try_from = "LensRecord")]
pub struct Lens {
    manufacturer: String,
    model_name: Option<String>,
    max_aperture: f64,
    min_aperture: f64,
    focal_length: f64,
    minimal_focal_distance: f64,
}

impl Lens {
    /// Create a lens stopping down to f/22
    pub fn new(
        manufacturer: impl Into<String>,
        focal_length: f64,
        max_aperture: f64,
        minimal_focal_distance: f64,
    ) -> DofResult<Self> {
        Self::from_parts(
            manufacturer,
            None,
            max_aperture,
            DEFAULT_MIN_APERTURE,
            focal_length,
            minimal_focal_distance,
        )
    }

    /// Create a lens from all six fields, validating each
    pub fn from_parts(
        manufacturer: impl Into<String>,
        model_name: Option<String>,
        max_aperture: f64,
        min_aperture: f64,
        focal_length: f64,
        minimal_focal_distance: f64,
    ) -> DofResult<Self> {
        let lens = Self {
            manufacturer: manufacturer.into(),
            model_name: model_name.filter(|name| !name.trim().is_empty()),
            max_aperture,
            min_aperture,
            focal_length,
            minimal_focal_distance,
        };
        lens.validate()?;
        Ok(lens)
    }

    fn validate(&self) -> DofResult<()> {
        positive("focal length", self.focal_length)?;
        positive("minimal focal distance", self.minimal_focal_distance)?;
        positive("maximum aperture", self.max_aperture)?;
        positive("minimum aperture", self.min_aperture)?;
        if self.max_aperture > self.min_aperture {
            return Err(DofError::InvalidApertureRange {
                max_aperture: self.max_aperture,
                min_aperture: self.min_aperture,
            });
        }
        Ok(())
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn model_name(&self) -> Option<&str> {
        self.model_name.as_deref()
    }

    /// Widest f-number (smallest value)
    pub fn max_aperture(&self) -> f64 {
        self.max_aperture
    }

    /// Narrowest f-number (largest value)
    pub fn min_aperture(&self) -> f64 {
        self.min_aperture
    }

    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    pub fn minimal_focal_distance(&self) -> f64 {
        self.minimal_focal_distance
    }

    /// True iff `max_aperture <= aperture <= min_aperture`
    pub fn supports_aperture(&self, aperture: f64) -> bool {
        self.max_aperture <= aperture && aperture <= self.min_aperture
    }

    /// "Manufacturer Model", or "Manufacturer 50mm f/1.4" without a model name
    pub fn display_name(&self) -> String {
        match &self.model_name {
            Some(model) => format!("{} {}", self.manufacturer, model),
            None => format!(
                "{} {}mm f/{}",
                self.manufacturer, self.focal_length, self.max_aperture
            ),
        }
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    pub fn with_model_name(mut self, model_name: Option<String>) -> Self {
        self.model_name = model_name.filter(|name| !name.trim().is_empty());
        self
    }

    pub fn with_max_aperture(mut self, max_aperture: f64) -> DofResult<Self> {
        self.max_aperture = max_aperture;
        self.validate()?;
        Ok(self)
    }

    pub fn with_min_aperture(mut self, min_aperture: f64) -> DofResult<Self> {
        self.min_aperture = min_aperture;
        self.validate()?;
        Ok(self)
    }

    pub fn with_focal_length(mut self, focal_length: f64) -> DofResult<Self> {
        self.focal_length = focal_length;
        self.validate()?;
        Ok(self)
    }

    pub fn with_minimal_focal_distance(mut self, minimal_focal_distance: f64) -> DofResult<Self> {
        self.minimal_focal_distance = minimal_focal_distance;
        self.validate()?;
        Ok(self)
    }

    /// Catalog display order: manufacturer, model, focal length, widest
    /// aperture, narrowest aperture, minimal focal distance
    pub fn catalog_cmp(&self, other: &Lens) -> Ordering {
        self.manufacturer
            .cmp(&other.manufacturer)
            .then_with(|| self.model_name.cmp(&other.model_name))
            .then_with(|| self.focal_length.total_cmp(&other.focal_length))
            .then_with(|| self.max_aperture.total_cmp(&other.max_aperture))
            .then_with(|| self.min_aperture.total_cmp(&other.min_aperture))
            .then_with(|| {
                self.minimal_focal_distance
                    .total_cmp(&other.minimal_focal_distance)
            })
    }
}

fn positive(field: &'static str, value: f64) -> DofResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DofError::InvalidLensParameter { field, value })
    }
}

impl PartialEq for Lens {
    fn eq(&self, other: &Self) -> bool {
        self.manufacturer == other.manufacturer
            && self.model_name == other.model_name
            && self.max_aperture == other.max_aperture
            && self.focal_length == other.focal_length
    }
}

// Validation keeps NaN out of the compared fields.
impl Eq for Lens {}

impl Hash for Lens {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.manufacturer.hash(state);
        self.model_name.hash(state);
        self.max_aperture.to_bits().hash(state);
        self.focal_length.to_bits().hash(state);
    }
}

impl std::fmt::Display for Lens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
