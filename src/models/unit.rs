//! Unit model
//!
//! A unit of measurement and its factor relative to one Shrek.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::category::CategoryId;
use super::text::DisplayText;

/// Model validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Invalid conversion factor {value}: must be a positive finite number")]
    InvalidFactor { value: f64 },
}

pub type ModelResult<T> = Result<T, ModelError>;

/// Check that a factor can be used for conversion in both directions
pub fn validate_factor(value: f64) -> ModelResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ModelError::InvalidFactor { value })
    }
}

/// A unit of measurement owned by a [`Category`](super::Category)
///
/// Units only come into existence through `Category::add_unit`, so the
/// back-reference always names the category holding them. Not `Clone`, so
/// no copy can live outside that category.
#[derive(Debug, PartialEq, Serialize)]
pub struct Unit {
    name: String,
    symbol: String,
    /// Count of this unit equal to one Shrek
    value: f64,
    #[serde(skip)]
    category: CategoryId,
}

impl Unit {
    pub(super) fn new(
        category: CategoryId,
        name: DisplayText,
        symbol: DisplayText,
        value: f64,
    ) -> ModelResult<Self> {
        Ok(Self {
            name: name.into_string(),
            symbol: symbol.into_string(),
            value: validate_factor(value)?,
            category,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<DisplayText>) {
        self.name = name.into().into_string();
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn set_symbol(&mut self, symbol: impl Into<DisplayText>) {
        self.symbol = symbol.into().into_string();
    }

    /// Conversion factor, in units per Shrek
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Replace the conversion factor. The old factor is kept on error.
    pub fn set_value(&mut self, value: f64) -> ModelResult<()> {
        self.value = validate_factor(value)?;
        Ok(())
    }

    /// Identity of the owning category
    pub fn category_id(&self) -> CategoryId {
        self.category
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_validate_factor() {
        assert_eq!(validate_factor(95.0), Ok(95.0));
        assert_eq!(validate_factor(0.0024384), Ok(0.0024384));
        assert!(validate_factor(0.0).is_err());
        assert!(validate_factor(-1.0).is_err());
        assert!(validate_factor(f64::NAN).is_err());
        assert!(validate_factor(f64::INFINITY).is_err());
    }

    #[test]
    fn test_set_value_rejects_non_positive_and_keeps_old_value() {
        let mut time = Category::new("Time");
        let minutes = time.add_unit("Minutes", "min", 95.0).unwrap();

        assert_eq!(
            minutes.set_value(0.0),
            Err(ModelError::InvalidFactor { value: 0.0 })
        );
        assert!(minutes.set_value(-1.0).is_err());
        assert_eq!(minutes.value(), 95.0);

        minutes.set_value(96.0).unwrap();
        assert_eq!(minutes.value(), 96.0);
    }

    #[test]
    fn test_setters_coerce_absent_text() {
        let mut time = Category::new("Time");
        let unit = time.add_unit("Hours", "h", 1.58333).unwrap();

        unit.set_name(None::<&str>);
        unit.set_symbol(None::<String>);
        assert_eq!(unit.name(), "null");
        assert_eq!(unit.symbol(), "null");

        unit.set_name("Stunden");
        assert_eq!(unit.to_string(), "Stunden");
    }
}
