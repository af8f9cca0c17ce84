//! Category catalog
//!
//! The full set of categories available for selection. It is populated in
//! one synchronous step before anything reads from it.

pub mod seed;

use thiserror::Error;

use crate::models::{Category, CategoryId, ModelResult, Unit};

/// Catalog lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Unknown unit '{unit}' in category '{category}'")]
    UnknownUnit { category: String, unit: String },

    #[error("No category selected")]
    NoCategorySelected,
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Ordered collection of categories
#[derive(Debug, Default)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the built-in Time and Distance categories
    pub fn seeded() -> ModelResult<Self> {
        let categories = seed::default_categories()?;
        tracing::debug!(
            categories = categories.len(),
            units = categories.iter().map(Category::len).sum::<usize>(),
            "Catalog seeded"
        );
        Ok(Self { categories })
    }

    /// Append a category and hand it back for population
    pub fn push(&mut self, category: Category) -> &mut Category {
        self.categories.push(category);
        let index = self.categories.len() - 1;
        &mut self.categories[index]
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn unit_count(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }

    /// Position of the category with the given name (case-insensitive)
    pub fn position(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.categories
            .iter()
            .position(|c| c.name().eq_ignore_ascii_case(wanted))
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn category(&self, name: &str) -> CatalogResult<&Category> {
        self.position(name)
            .map(|i| &self.categories[i])
            .ok_or_else(|| CatalogError::UnknownCategory(name.to_string()))
    }

    pub fn category_by_id(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    /// The category owning the unit, if it is in this catalog
    pub fn category_of(&self, unit: &Unit) -> Option<&Category> {
        self.category_by_id(unit.category_id())
    }

    /// Look up a unit by category and unit name
    pub fn unit(&self, category: &str, unit: &str) -> CatalogResult<&Unit> {
        let found = self.category(category)?;
        found
            .find_unit(unit)
            .ok_or_else(|| CatalogError::UnknownUnit {
                category: found.name().to_string(),
                unit: unit.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.unit_count(), 14);
        assert_eq!(catalog.get(0).unwrap().name(), "Time");
    }

    #[test]
    fn test_category_lookup() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.category("distance").unwrap().name(), "Distance");
        assert_eq!(
            catalog.category("Mass").unwrap_err(),
            CatalogError::UnknownCategory("Mass".to_string())
        );
    }

    #[test]
    fn test_unit_lookup() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.unit("Time", "Minutes").unwrap().value(), 95.0);
        assert_eq!(
            catalog.unit("time", "Parsecs").unwrap_err(),
            CatalogError::UnknownUnit {
                category: "Time".to_string(),
                unit: "Parsecs".to_string()
            }
        );
    }

    #[test]
    fn test_category_of_resolves_back_reference() {
        let catalog = Catalog::seeded().unwrap();
        let yards = catalog.unit("Distance", "Yards").unwrap();
        let owner = catalog.category_of(yards).unwrap();
        assert_eq!(owner.name(), "Distance");
        assert_eq!(owner.id(), yards.category_id());
        assert!(owner.owns(yards));
    }

    #[test]
    fn test_push_appends_category() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        let volume = catalog.push(Category::new("Volume"));
        volume.add_unit("Liters", "l", 300.0).unwrap();

        assert_eq!(catalog.len(), 1);
        let liters = catalog.unit("Volume", "Liters").unwrap();
        assert_eq!(catalog.category_of(liters).unwrap().name(), "Volume");
    }

    #[test]
    fn test_unit_from_another_catalog_is_not_resolved() {
        let first = Catalog::seeded().unwrap();
        let second = Catalog::seeded().unwrap();
        let minutes = first.unit("Time", "Minutes").unwrap();
        assert!(second.category_of(minutes).is_none());
    }
}
