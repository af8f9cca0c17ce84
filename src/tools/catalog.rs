//! Catalog MCP Tools
//!
//! Browsing categories and their units.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::{Category, Unit};

/// Summary of a category for list results
#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub unit_count: usize,
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name().to_string(),
            unit_count: category.len(),
        }
    }
}

/// Response for list_categories
#[derive(Debug, Serialize)]
pub struct ListCategoriesResponse {
    pub categories: Vec<CategorySummary>,
    pub total: usize,
}

/// A unit with its factor
#[derive(Debug, Serialize)]
pub struct UnitDetail {
    pub name: String,
    pub symbol: String,
    /// Units per Shrek
    pub per_shrek: f64,
    /// Shreks per unit
    pub shreks_each: f64,
}

impl From<&Unit> for UnitDetail {
    fn from(unit: &Unit) -> Self {
        Self {
            name: unit.name().to_string(),
            symbol: unit.symbol().to_string(),
            per_shrek: unit.value(),
            shreks_each: 1.0 / unit.value(),
        }
    }
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub category: String,
    pub units: Vec<UnitDetail>,
    pub total: usize,
}

pub fn list_categories(catalog: &Catalog) -> ListCategoriesResponse {
    let categories: Vec<CategorySummary> =
        catalog.categories().iter().map(CategorySummary::from).collect();
    let total = categories.len();
    ListCategoriesResponse { categories, total }
}

pub fn list_units(catalog: &Catalog, category: &str) -> Result<ListUnitsResponse, String> {
    let category = catalog.category(category).map_err(|e| e.to_string())?;
    let units: Vec<UnitDetail> = category.units().iter().map(UnitDetail::from).collect();
    Ok(ListUnitsResponse {
        category: category.name().to_string(),
        total: units.len(),
        units,
    })
}
