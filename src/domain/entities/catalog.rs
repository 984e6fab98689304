//! Lens catalog entity
//!
//! The user's collection of lenses. Lenses are unique by lens identity;
//! adding an equal lens replaces the stored one.

use super::Lens;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LensCatalog {
    lenses: Vec<Lens>,
}

impl LensCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lenses(lenses: impl IntoIterator<Item = Lens>) -> Self {
        let mut catalog = Self::new();
        for lens in lenses {
            catalog.upsert(lens);
        }
        catalog
    }

    /// Insert a lens, replacing an equal one. Returns true if it was new.
    pub fn upsert(&mut self, lens: Lens) -> bool {
        if let Some(existing) = self.lenses.iter_mut().find(|l| **l == lens) {
            *existing = lens;
            false
        } else {
            self.lenses.push(lens);
            true
        }
    }

    pub fn remove(&mut self, lens: &Lens) -> bool {
        let len_before = self.lenses.len();
        self.lenses.retain(|l| l != lens);
        self.lenses.len() != len_before
    }

    /// Lenses in catalog display order
    pub fn sorted(&self) -> Vec<&Lens> {
        let mut lenses: Vec<&Lens> = self.lenses.iter().collect();
        lenses.sort_by(|a, b| a.catalog_cmp(b));
        lenses
    }

    /// Case-insensitive search over manufacturer, model and display name,
    /// in catalog display order
    pub fn find(&self, query: &str) -> Vec<&Lens> {
        let query = query.trim().to_lowercase();
        self.sorted()
            .into_iter()
            .filter(|lens| {
                lens.display_name().to_lowercase().contains(&query)
                    || lens.manufacturer().to_lowercase() == query
                    || lens
                        .model_name()
                        .is_some_and(|model| model.to_lowercase() == query)
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lens> {
        self.lenses.iter()
    }

    pub fn len(&self) -> usize {
        self.lenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lenses.is_empty()
    }
}
