//! JSON Lens Catalog Repository
//!
//! Persists the lens catalog as `{ "Lenses": [ ... ] }` with one six-field
//! record per lens. Writes go through a temp file in the same directory and
//! are renamed into place.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Lens, LensCatalog, LensRecord};
use crate::domain::ports::{CatalogError, LensCatalogRepository};
use crate::infrastructure::fs::dofcalc_config_dir;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogDocument {
    #[serde(rename = "Lenses", default)]
    lenses: Vec<LensRecord>,
}

/// Decode a catalog document from JSON text
pub fn parse_catalog(content: &str, path: &Path) -> Result<LensCatalog, CatalogError> {
    let document: CatalogDocument =
        serde_json::from_str(content).map_err(|e| CatalogError::Corrupted {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let lenses = document
        .lenses
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Lens::try_from(record).map_err(|source| CatalogError::InvalidLens { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LensCatalog::from_lenses(lenses))
}

/// Encode a catalog as pretty-printed JSON, lenses in catalog order
pub fn render_catalog(catalog: &LensCatalog) -> Result<String, CatalogError> {
    let document = CatalogDocument {
        lenses: catalog.sorted().into_iter().map(LensRecord::from).collect(),
    };
    serde_json::to_string_pretty(&document).map_err(|e| CatalogError::SerializationError {
        message: e.to_string(),
    })
}

pub struct JsonLensCatalogRepository {
    path: PathBuf,
}

impl JsonLensCatalogRepository {
    pub fn new() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn write_atomic(&self, content: &str) -> Result<(), CatalogError> {
        let access = |e: std::io::Error| CatalogError::AccessError {
            message: e.to_string(),
        };

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(access)?;

        let mut temp = tempfile::NamedTempFile::new_in(&parent).map_err(access)?;
        temp.write_all(content.as_bytes()).map_err(access)?;
        temp.write_all(b"\n").map_err(access)?;
        temp.persist(&self.path)
            .map_err(|e| CatalogError::AccessError {
                message: e.error.to_string(),
            })?;
        Ok(())
    }
}

impl Default for JsonLensCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LensCatalogRepository for JsonLensCatalogRepository {
    fn load(&self) -> Result<LensCatalog, CatalogError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no lens catalog yet, starting empty");
            return Ok(LensCatalog::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| CatalogError::AccessError {
            message: e.to_string(),
        })?;
        let catalog = parse_catalog(&content, &self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            lenses = catalog.len(),
            "loaded lens catalog"
        );
        Ok(catalog)
    }

    fn save(&self, catalog: &LensCatalog) -> Result<(), CatalogError> {
        let content = render_catalog(catalog)?;
        self.write_atomic(&content)?;
        tracing::info!(
            path = %self.path.display(),
            lenses = catalog.len(),
            "saved lens catalog"
        );
        Ok(())
    }
}

/// `lenses.json` next to the user config (see [`dofcalc_config_dir`])
pub fn default_catalog_path() -> PathBuf {
    dofcalc_config_dir()
        .map(|dir| dir.join("lenses.json"))
        .unwrap_or_else(|| PathBuf::from("lenses.json"))
}
