//! Calculate result types

use serde::Serialize;

use crate::domain::entities::{Lens, Sensor};
use crate::domain::value_objects::Distance;

/// Limits for the requested focus distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FocusReport {
    pub object_distance: f64,
    pub near: Distance,
    pub far: Distance,
    pub total: Distance,
}

/// Result of a calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DofReport {
    pub sensor: Sensor,
    pub lens: Lens,
    pub aperture: f64,
    /// Divisor actually applied to the sensor diagonal
    pub coc_divisor: f64,
    /// Circle of confusion in millimeters
    pub circle_of_confusion: f64,
    /// Hyperfocal distance in millimeters
    pub hyperfocal: f64,
    /// Present when a focus distance was requested
    pub focus: Option<FocusReport>,
}

impl DofReport {
    /// True when everything behind the focus distance is acceptably sharp
    pub fn far_is_infinite(&self) -> bool {
        self.focus.is_some_and(|focus| focus.far.is_infinite())
    }
}
