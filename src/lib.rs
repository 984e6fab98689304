//! dofcalc - depth-of-field calculator
//!
//! Computes the hyperfocal distance and the near and far limits of acceptable
//! sharpness for a sensor, a lens, an aperture and a focus distance. Lenses can
//! be kept in a JSON catalog and reused by name.
//!
//! ```
//! use dofcalc::{DofCalculator, Lens, Sensor, ZeissRatio};
//!
//! let lens = Lens::new("Sigma", 105.0, 2.8, 295.0).unwrap();
//! let calc = DofCalculator::new(Sensor::full_frame(), lens);
//! let hyperfocal = calc.hyperfocal_distance(8.0, ZeissRatio::Modern).unwrap();
//! assert!((hyperfocal - 47_882.89).abs() < 0.01);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{Lens, LensCatalog, Sensor};
pub use domain::services::{DepthOfField, DofCalculator, LensUpdate};
pub use domain::value_objects::{
    parse_length, CocDivisor, Distance, LengthUnit, SensorFormat, ZeissRatio,
};
pub use error::{ConfigError, DofError, DofResult};
