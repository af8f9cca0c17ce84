//! Converter session
//!
//! Selection state for an interactive surface: the chosen category and unit,
//! and whether input is given in Shreks. Replaces the activity state of the
//! mobile app.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{Catalog, CatalogError, CatalogResult};
use crate::config::Config;
use crate::conversion::{
    Conversion, ConversionRequest, ConversionResult, Direction, BASE_UNIT_LABEL,
};
use crate::models::{Category, Unit};

/// Serializable view of a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub category: Option<String>,
    pub unit: Option<String>,
    pub unit_symbol: Option<String>,
    pub shrek_mode: bool,
    pub direction: Direction,
    pub hint: String,
    pub can_convert: bool,
    pub available_units: Vec<String>,
}

pub struct Session {
    catalog: Arc<Catalog>,
    category: Option<usize>,
    unit: Option<usize>,
    shrek_mode: bool,
    precision: usize,
}

impl Session {
    /// Start with the first category and its first unit selected
    pub fn new(catalog: Arc<Catalog>, precision: usize) -> Self {
        let category = if catalog.is_empty() { None } else { Some(0) };
        let mut session = Self {
            catalog,
            category,
            unit: None,
            shrek_mode: false,
            precision,
        };
        session.unit = session.first_unit_index();
        session
    }

    /// Start with the configured default category, if it exists
    pub fn from_config(catalog: Arc<Catalog>, config: &Config) -> Self {
        let mut session = Self::new(catalog, config.precision);
        if let Some(name) = &config.default_category {
            if let Err(e) = session.select_category(name) {
                tracing::warn!("{}; starting with the first category", e);
            }
        }
        session
    }

    fn first_unit_index(&self) -> Option<usize> {
        self.selected_category()
            .filter(|c| !c.is_empty())
            .map(|_| 0)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.category.and_then(|i| self.catalog.get(i))
    }

    pub fn selected_unit(&self) -> Option<&Unit> {
        let category = self.selected_category()?;
        self.unit.and_then(|i| category.unit(i))
    }

    /// Select a category by name; the unit selection moves to its first unit
    pub fn select_category(&mut self, name: &str) -> CatalogResult<&Category> {
        let index = self
            .catalog
            .position(name)
            .ok_or_else(|| CatalogError::UnknownCategory(name.to_string()))?;
        self.category = Some(index);
        self.unit = self.first_unit_index();
        tracing::debug!(category = name, "Category selected");
        Ok(&self.catalog.categories()[index])
    }

    pub fn select_unit(&mut self, name: &str) -> CatalogResult<&Unit> {
        let category = self
            .selected_category()
            .ok_or(CatalogError::NoCategorySelected)?;
        let index = category
            .position(name)
            .ok_or_else(|| CatalogError::UnknownUnit {
                category: category.name().to_string(),
                unit: name.to_string(),
            })?;
        self.unit = Some(index);
        tracing::debug!(unit = name, "Unit selected");
        self.selected_unit().ok_or(CatalogError::NoCategorySelected)
    }

    pub fn shrek_mode(&self) -> bool {
        self.shrek_mode
    }

    /// Flip Shrek mode and return the new state
    pub fn toggle_shrek_mode(&mut self) -> bool {
        self.shrek_mode = !self.shrek_mode;
        self.shrek_mode
    }

    /// In Shrek mode the input is in Shreks and the result in the unit
    pub fn direction(&self) -> Direction {
        if self.shrek_mode {
            Direction::ToUnit
        } else {
            Direction::ToBase
        }
    }

    /// Placeholder text for the amount input
    pub fn hint(&self) -> String {
        if self.shrek_mode {
            return format!("# {}", BASE_UNIT_LABEL);
        }
        match self.selected_unit() {
            Some(unit) => format!("# {}", unit.name()),
            None => "#".to_string(),
        }
    }

    /// Conversion is only offered once a unit is selected
    pub fn can_convert(&self) -> bool {
        self.selected_unit().is_some()
    }

    pub fn conversion(&self, amount: &str) -> ConversionResult<Conversion> {
        ConversionRequest::new(amount, self.selected_unit(), self.direction()).execute()
    }

    /// Convert the amount for the current selection and format the result
    pub fn convert(&self, amount: &str) -> ConversionResult<String> {
        Ok(self.conversion(amount)?.format(self.precision))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let unit = self.selected_unit();
        SessionSnapshot {
            category: self.selected_category().map(|c| c.name().to_string()),
            unit: unit.map(|u| u.name().to_string()),
            unit_symbol: unit.map(|u| u.symbol().to_string()),
            shrek_mode: self.shrek_mode,
            direction: self.direction(),
            hint: self.hint(),
            can_convert: self.can_convert(),
            available_units: self
                .selected_category()
                .map(|c| c.units().iter().map(|u| u.name().to_string()).collect())
                .unwrap_or_default(),
        }
    }
}
