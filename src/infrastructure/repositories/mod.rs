//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod catalog;

pub use catalog::{
    default_catalog_path, parse_catalog, render_catalog, JsonLensCatalogRepository,
};
