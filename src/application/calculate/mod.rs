//! Calculate use case
//!
//! Runs the depth-of-field calculator for one aperture and, optionally, one
//! focus distance, and collects everything a front end displays.

mod options;
mod result;
mod use_case;

pub use options::CalculateOptions;
pub use result::{DofReport, FocusReport};
pub use use_case::CalculateUseCase;
