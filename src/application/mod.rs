//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CalculateUseCase` - Hyperfocal distance and focus limits for one setup
//! - `CatalogUseCase` - List, add, remove and edit catalog lenses
//! - `LensEditor` - Observable editing of a single lens

pub mod calculate;
pub mod catalog;
pub mod lens_editor;

pub use calculate::{CalculateOptions, CalculateUseCase, DofReport, FocusReport};
pub use catalog::{CatalogUseCase, CatalogUseCaseError};
pub use lens_editor::LensEditor;
