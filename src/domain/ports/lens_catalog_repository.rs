//! LensCatalogRepository port
//!
//! Loads and stores the user's lens catalog.

use std::path::PathBuf;

use crate::domain::entities::LensCatalog;
use crate::error::DofError;

pub trait LensCatalogRepository {
    /// Load the catalog; a missing catalog is an empty one
    fn load(&self) -> Result<LensCatalog, CatalogError>;
    fn save(&self, catalog: &LensCatalog) -> Result<(), CatalogError>;
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("Failed to access lens catalog: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize lens catalog: {message}")]
    SerializationError { message: String },

    #[error(
        "lens catalog corrupted: {path}\n  → Fix: repair the JSON or move the file aside\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },

    #[error("invalid lens #{index} in catalog: {source}")]
    InvalidLens {
        index: usize,
        #[source]
        source: DofError,
    },
}
