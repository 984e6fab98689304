//! Domain Layer
//!
//! The calculation core: sensors, lenses and the depth-of-field formulas.
//!
//! ## Structure
//!
//! - `entities/` - Sensor, Lens, LensCatalog
//! - `value_objects/` - Immutable value types (ZeissRatio, CocDivisor, Distance, LengthUnit)
//! - `services/` - DofCalculator and the lens merger
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system and never logs
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Persistence and notification go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
