//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod coc_divisor;
mod distance;
mod length_unit;
mod sensor_format;

pub use coc_divisor::{CocDivisor, CustomDivisor, ZeissRatio};
pub use distance::Distance;
pub use length_unit::{parse_length, to_millimeters, LengthParseError, LengthUnit};
pub use sensor_format::SensorFormat;
