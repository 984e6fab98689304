//! Calculate options

use crate::domain::value_objects::CocDivisor;

/// Options for a single calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculateOptions {
    /// f-number to calculate for
    pub aperture: f64,
    /// Circle-of-confusion divisor
    pub divisor: CocDivisor,
    /// Focus distance in millimeters (None = hyperfocal only)
    pub object_distance: Option<f64>,
}

impl CalculateOptions {
    /// Create options for an aperture with the default divisor
    pub fn new(aperture: f64) -> Self {
        Self {
            aperture,
            divisor: CocDivisor::default(),
            object_distance: None,
        }
    }

    /// Set divisor
    pub fn with_divisor(mut self, divisor: impl Into<CocDivisor>) -> Self {
        self.divisor = divisor.into();
        self
    }

    /// Set focus distance
    pub fn with_object_distance(mut self, object_distance: Option<f64>) -> Self {
        self.object_distance = object_distance;
        self
    }
}
