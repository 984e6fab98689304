//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod lens_catalog_repository;
pub mod lens_events;

pub use lens_catalog_repository::{CatalogError, LensCatalogRepository};
pub use lens_events::{LensEvent, LensObserver};
