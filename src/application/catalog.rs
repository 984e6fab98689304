//! Catalog Use Case
//!
//! Lists, adds, removes and edits lenses in the persisted catalog. Lenses
//! are addressed by a free-text query (see [`LensCatalog::find`]).

use thiserror::Error;

use crate::domain::entities::{Lens, LensCatalog};
use crate::domain::ports::{CatalogError, LensCatalogRepository, LensEvent};
use crate::domain::services::LensUpdate;
use crate::error::DofError;

use super::lens_editor::LensEditor;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogUseCaseError {
    #[error("no lens in the catalog matches '{query}'")]
    NotFound { query: String },

    #[error("'{query}' matches {} lenses: {}", .matches.len(), .matches.join(", "))]
    Ambiguous { query: String, matches: Vec<String> },

    #[error("edited lens would replace '{existing}', which is already in the catalog")]
    Conflict { existing: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    InvalidLens(#[from] DofError),
}

/// Catalog use case - one repository, loaded fresh for every operation
pub struct CatalogUseCase<R>
where
    R: LensCatalogRepository,
{
    repo: R,
}

impl<R> CatalogUseCase<R>
where
    R: LensCatalogRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// All lenses in catalog display order
    pub fn list(&self) -> Result<Vec<Lens>, CatalogUseCaseError> {
        let catalog = self.repo.load()?;
        Ok(catalog.sorted().into_iter().cloned().collect())
    }

    /// Add a lens; an equal lens already in the catalog is replaced.
    /// Returns true if the lens was new.
    pub fn add(&self, lens: Lens) -> Result<bool, CatalogUseCaseError> {
        let mut catalog = self.repo.load()?;
        let name = lens.display_name();
        let added = catalog.upsert(lens);
        self.repo.save(&catalog)?;
        tracing::info!(lens = %name, added, "stored lens");
        Ok(added)
    }

    /// Resolve a query to exactly one lens
    pub fn find(&self, query: &str) -> Result<Lens, CatalogUseCaseError> {
        let catalog = self.repo.load()?;
        resolve(&catalog, query).cloned()
    }

    pub fn remove(&self, query: &str) -> Result<Lens, CatalogUseCaseError> {
        let mut catalog = self.repo.load()?;
        let lens = resolve(&catalog, query)?.clone();
        catalog.remove(&lens);
        self.repo.save(&catalog)?;
        tracing::info!(lens = %lens, "removed lens");
        Ok(lens)
    }

    /// Apply `update` to the lens matching `query` and store the result
    pub fn edit(&self, query: &str, update: &LensUpdate) -> Result<Lens, CatalogUseCaseError> {
        let mut catalog = self.repo.load()?;
        let original = resolve(&catalog, query)?.clone();

        let mut editor = LensEditor::new(original.clone());
        editor.subscribe(|event: &LensEvent| {
            let LensEvent::Changed { old, new } = event;
            tracing::debug!(old = %old, new = %new, "lens edited");
        });
        editor.apply(update)?;
        let edited = editor.into_lens();

        if edited != original {
            if let Some(existing) = catalog.iter().find(|lens| **lens == edited) {
                return Err(CatalogUseCaseError::Conflict {
                    existing: existing.display_name(),
                });
            }
        }

        catalog.remove(&original);
        catalog.upsert(edited.clone());
        self.repo.save(&catalog)?;
        Ok(edited)
    }
}

/// One match, or an exact display-name match among several
fn resolve<'a>(catalog: &'a LensCatalog, query: &str) -> Result<&'a Lens, CatalogUseCaseError> {
    let matches = catalog.find(query);
    match matches.as_slice() {
        [] => Err(CatalogUseCaseError::NotFound {
            query: query.to_string(),
        }),
        [single] => Ok(*single),
        several => several
            .iter()
            .copied()
            .find(|lens| lens.display_name().eq_ignore_ascii_case(query.trim()))
            .ok_or_else(|| CatalogUseCaseError::Ambiguous {
                query: query.to_string(),
                matches: several.iter().map(|lens| lens.display_name()).collect(),
            }),
    }
}
