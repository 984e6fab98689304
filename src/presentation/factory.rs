//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;

use crate::application::{CalculateUseCase, CatalogUseCase};
use crate::config::Config;
use crate::domain::entities::{Lens, Sensor};
use crate::domain::services::DofCalculator;
use crate::infrastructure::JsonLensCatalogRepository;

/// Type alias for the catalog use case backed by the JSON file
pub type ConcreteCatalogUseCase = CatalogUseCase<JsonLensCatalogRepository>;

/// Catalog use case for the file named by `config` (or the default location)
pub fn create_catalog_use_case(config: &Config) -> ConcreteCatalogUseCase {
    create_catalog_use_case_at(config.catalog_path())
}

pub fn create_catalog_use_case_at(path: PathBuf) -> ConcreteCatalogUseCase {
    CatalogUseCase::new(JsonLensCatalogRepository::with_path(path))
}

pub fn create_calculate_use_case(sensor: Sensor, lens: Lens) -> CalculateUseCase {
    CalculateUseCase::new(DofCalculator::new(sensor, lens))
}
