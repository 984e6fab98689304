//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Per-user directory shared by the config and the catalog
//! - `repositories/` - Repository implementations (JSON lens catalog)

pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use fs::dofcalc_config_dir;
pub use repositories::{default_catalog_path, JsonLensCatalogRepository};
