//! Domain Entities
//!
//! - `Sensor` - Physical sensor dimensions
//! - `Lens` - Fixed focal length lens with a validated aperture range
//! - `LensRecord` - The six-field JSON form of a lens
//! - `LensCatalog` - A user's lens collection

mod catalog;
mod lens;
mod lens_record;
mod sensor;

pub use catalog::LensCatalog;
pub use lens::{Lens, DEFAULT_MIN_APERTURE};
pub use lens_record::LensRecord;
pub use sensor::Sensor;
