//! Depth-of-field calculator
//!
//! Combines a sensor and a lens into hyperfocal distance and the near/far
//! limits of acceptable sharpness. All distances are millimeters.
//!
//! ```text
//! coc  = sensor diagonal / divisor
//! H    = f² / (N · coc) + f
//! near = s (H − f) / (H + s − 2f)
//! far  = s (H − f) / (H − s)          (∞ once s ≥ H)
//! ```
//!
//! The calculator owns copies of its sensor and lens, so the parameters a call
//! reads cannot change underneath it.

use serde::Serialize;

use crate::domain::entities::{Lens, Sensor};
use crate::domain::value_objects::{CocDivisor, Distance};
use crate::error::{DofError, DofResult};

#[derive(Debug, Clone, PartialEq)]
pub struct DofCalculator {
    sensor: Sensor,
    lens: Lens,
}

/// All limits for one focus distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepthOfField {
    pub hyperfocal: f64,
    pub near: Distance,
    pub far: Distance,
    pub total: Distance,
}

impl DofCalculator {
    pub fn new(sensor: Sensor, lens: Lens) -> Self {
        Self { sensor, lens }
    }

    pub fn sensor(&self) -> &Sensor {
        &self.sensor
    }

    pub fn lens(&self) -> &Lens {
        &self.lens
    }

    /// Hyperfocal distance for the given f-number
    ///
    /// # Errors
    ///
    /// `ApertureBelowLensMinimum` if the aperture is wider than the lens opens,
    /// `ApertureAboveLensMaximum` if it is narrower than the lens stops down.
    pub fn hyperfocal_distance(
        &self,
        aperture: f64,
        divisor: impl Into<CocDivisor>,
    ) -> DofResult<f64> {
        self.check_aperture(aperture)?;

        let f = self.lens.focal_length();
        let coc = self.sensor.circle_of_confusion(divisor);
        Ok((f * f / (aperture * coc)) + f)
    }

    /// Near limit of acceptable sharpness when focused at `object_distance`
    ///
    /// # Errors
    ///
    /// `ObjectDistanceBelowMinimumFocus` if the lens cannot focus that close,
    /// plus the aperture errors of [`Self::hyperfocal_distance`].
    pub fn near_distance(
        &self,
        object_distance: f64,
        aperture: f64,
        divisor: impl Into<CocDivisor>,
    ) -> DofResult<Distance> {
        self.check_object_distance(object_distance)?;
        let h = self.hyperfocal_distance(aperture, divisor)?;
        Ok(near_limit(h, self.lens.focal_length(), object_distance))
    }

    /// Far limit of acceptable sharpness when focused at `object_distance`
    ///
    /// Returns [`Distance::Infinity`] once the object distance reaches the
    /// hyperfocal distance.
    ///
    /// # Errors
    ///
    /// Same as [`Self::near_distance`].
    pub fn far_distance(
        &self,
        object_distance: f64,
        aperture: f64,
        divisor: impl Into<CocDivisor>,
    ) -> DofResult<Distance> {
        self.check_object_distance(object_distance)?;
        let h = self.hyperfocal_distance(aperture, divisor)?;
        Ok(far_limit(h, self.lens.focal_length(), object_distance))
    }

    /// Hyperfocal distance, both limits and the zone between them
    pub fn depth_of_field(
        &self,
        object_distance: f64,
        aperture: f64,
        divisor: impl Into<CocDivisor>,
    ) -> DofResult<DepthOfField> {
        self.check_object_distance(object_distance)?;
        let hyperfocal = self.hyperfocal_distance(aperture, divisor)?;
        let f = self.lens.focal_length();
        let near = near_limit(hyperfocal, f, object_distance);
        let far = far_limit(hyperfocal, f, object_distance);

        Ok(DepthOfField {
            hyperfocal,
            near,
            far,
            total: Distance::span(near, far),
        })
    }

    // Written as negated comparisons so NaN is rejected rather than passed through.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn check_aperture(&self, aperture: f64) -> DofResult<()> {
        if !(aperture >= self.lens.max_aperture()) {
            return Err(DofError::ApertureBelowLensMinimum {
                requested: aperture,
                limit: self.lens.max_aperture(),
            });
        }
        if !(aperture <= self.lens.min_aperture()) {
            return Err(DofError::ApertureAboveLensMaximum {
                requested: aperture,
                limit: self.lens.min_aperture(),
            });
        }
        Ok(())
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn check_object_distance(&self, object_distance: f64) -> DofResult<()> {
        if !(object_distance >= self.lens.minimal_focal_distance()) {
            return Err(DofError::ObjectDistanceBelowMinimumFocus {
                requested: object_distance,
                limit: self.lens.minimal_focal_distance(),
            });
        }
        Ok(())
    }
}

fn near_limit(h: f64, f: f64, s: f64) -> Distance {
    // Focused at infinity the near limit converges to H - f.
    if s.is_infinite() {
        return Distance::Finite(h - f);
    }
    let p = s * (h - f);
    let q = (h + s) - (2.0 * f);
    Distance::from_ratio(p, q)
}

fn far_limit(h: f64, f: f64, s: f64) -> Distance {
    let p = s * (h - f);
    let q = h - s;
    Distance::from_ratio(p, q)
}
