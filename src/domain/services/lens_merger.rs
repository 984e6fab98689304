//! Lens merger
//!
//! Applies a partial update to a lens and returns the edited copy:
//! - Fields set in the update replace the lens fields
//! - Unset fields are kept
//! - The result is validated as a whole, so a merge either yields a valid
//!   lens or fails without touching the input

use crate::domain::entities::Lens;
use crate::error::DofResult;

/// A set of field edits. `model_name: Some(None)` clears the model name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LensUpdate {
    pub manufacturer: Option<String>,
    pub model_name: Option<Option<String>>,
    pub max_aperture: Option<f64>,
    pub min_aperture: Option<f64>,
    pub focal_length: Option<f64>,
    pub minimal_focal_distance: Option<f64>,
}

impl LensUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_model_name(mut self, model_name: Option<String>) -> Self {
        self.model_name = Some(model_name);
        self
    }

    pub fn with_max_aperture(mut self, max_aperture: f64) -> Self {
        self.max_aperture = Some(max_aperture);
        self
    }

    pub fn with_min_aperture(mut self, min_aperture: f64) -> Self {
        self.min_aperture = Some(min_aperture);
        self
    }

    pub fn with_focal_length(mut self, focal_length: f64) -> Self {
        self.focal_length = Some(focal_length);
        self
    }

    pub fn with_minimal_focal_distance(mut self, minimal_focal_distance: f64) -> Self {
        self.minimal_focal_distance = Some(minimal_focal_distance);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// An update that overwrites every field with the values of `lens`
    pub fn from_lens(lens: &Lens) -> Self {
        Self {
            manufacturer: Some(lens.manufacturer().to_string()),
            model_name: Some(lens.model_name().map(str::to_string)),
            max_aperture: Some(lens.max_aperture()),
            min_aperture: Some(lens.min_aperture()),
            focal_length: Some(lens.focal_length()),
            minimal_focal_distance: Some(lens.minimal_focal_distance()),
        }
    }
}

/// Merge `from` into `into`, returning the updated lens
pub fn merge(into: &Lens, from: &LensUpdate) -> DofResult<Lens> {
    Lens::from_parts(
        from.manufacturer
            .clone()
            .unwrap_or_else(|| into.manufacturer().to_string()),
        from.model_name
            .clone()
            .unwrap_or_else(|| into.model_name().map(str::to_string)),
        from.max_aperture.unwrap_or(into.max_aperture()),
        from.min_aperture.unwrap_or(into.min_aperture()),
        from.focal_length.unwrap_or(into.focal_length()),
        from.minimal_focal_distance
            .unwrap_or(into.minimal_focal_distance()),
    )
}
