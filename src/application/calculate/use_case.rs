//! Calculate Use Case

use crate::domain::services::DofCalculator;
use crate::error::DofResult;

use super::options::CalculateOptions;
use super::result::{DofReport, FocusReport};

/// Calculate use case - wraps a calculator bound to one sensor and lens
pub struct CalculateUseCase {
    calculator: DofCalculator,
}

impl CalculateUseCase {
    /// Create a new calculate use case
    pub fn new(calculator: DofCalculator) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &DofCalculator {
        &self.calculator
    }

    /// Execute the calculation
    pub fn execute(&self, options: &CalculateOptions) -> DofResult<DofReport> {
        let calc = &self.calculator;
        tracing::debug!(
            sensor = %calc.sensor(),
            lens = %calc.lens(),
            aperture = options.aperture,
            divisor = %options.divisor,
            "calculating depth of field"
        );

        let hyperfocal = calc.hyperfocal_distance(options.aperture, options.divisor)?;

        let focus = match options.object_distance {
            Some(object_distance) => {
                let dof =
                    calc.depth_of_field(object_distance, options.aperture, options.divisor)?;
                Some(FocusReport {
                    object_distance,
                    near: dof.near,
                    far: dof.far,
                    total: dof.total,
                })
            }
            None => None,
        };

        if let Some(focus) = &focus {
            tracing::debug!(near = ?focus.near, far = ?focus.far, "focus limits");
        }

        Ok(DofReport {
            sensor: *calc.sensor(),
            lens: calc.lens().clone(),
            aperture: options.aperture,
            coc_divisor: options.divisor.value(),
            circle_of_confusion: calc.sensor().circle_of_confusion(options.divisor),
            hyperfocal,
            focus,
        })
    }
}
