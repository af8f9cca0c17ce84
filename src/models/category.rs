//! Category model
//!
//! A named, ordered group of units that convert into each other through
//! the Shrek.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use super::text::DisplayText;
use super::unit::{ModelResult, Unit};

static NEXT_CATEGORY_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CategoryId(u64);

impl CategoryId {
    fn next() -> Self {
        Self(NEXT_CATEGORY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// A category owning its units exclusively
///
/// Not `Clone`: a copy would share the identity its units point back to.
#[derive(Debug, Serialize)]
pub struct Category {
    #[serde(skip)]
    id: CategoryId,
    name: String,
    units: Vec<Unit>,
}

impl Category {
    pub fn new(name: impl Into<DisplayText>) -> Self {
        Self {
            id: CategoryId::next(),
            name: name.into().into_string(),
            units: Vec::new(),
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<DisplayText>) {
        self.name = name.into().into_string();
    }

    /// Units in insertion order
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Create a unit owned by this category and append it
    ///
    /// Returns the new unit so callers can keep editing it.
    pub fn add_unit(
        &mut self,
        name: impl Into<DisplayText>,
        symbol: impl Into<DisplayText>,
        value: f64,
    ) -> ModelResult<&mut Unit> {
        let unit = Unit::new(self.id, name.into(), symbol.into(), value)?;
        self.units.push(unit);
        let index = self.units.len() - 1;
        Ok(&mut self.units[index])
    }

    pub fn unit(&self, index: usize) -> Option<&Unit> {
        self.units.get(index)
    }

    pub fn unit_mut(&mut self, index: usize) -> Option<&mut Unit> {
        self.units.get_mut(index)
    }

    /// Position of the unit with the given name (case-insensitive)
    pub fn position(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.units
            .iter()
            .position(|u| u.name().eq_ignore_ascii_case(wanted))
    }

    pub fn find_unit(&self, name: &str) -> Option<&Unit> {
        self.position(name).map(|i| &self.units[i])
    }

    pub fn find_unit_mut(&mut self, name: &str) -> Option<&mut Unit> {
        let index = self.position(name)?;
        self.units.get_mut(index)
    }

    /// Whether the unit was created by this category
    pub fn owns(&self, unit: &Unit) -> bool {
        unit.category_id() == self.id
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelError;

    #[test]
    fn test_new_category_coerces_absent_name() {
        let category = Category::new(None::<&str>);
        assert_eq!(category.name(), "null");
        assert_eq!(category.to_string(), "null");
        assert!(category.is_empty());
    }

    #[test]
    fn test_set_name() {
        let mut category = Category::new("Time");
        category.set_name("Zeit");
        assert_eq!(category.name(), "Zeit");
        category.set_name(None::<String>);
        assert_eq!(category.name(), "null");
    }

    #[test]
    fn test_add_unit_appends_and_returns_unit() {
        let mut time = Category::new("Time");
        time.add_unit("Seconds", "sec", 5700.0).unwrap();

        let minutes = time.add_unit("Minutes", "min", 95.0).unwrap();
        assert_eq!(minutes.name(), "Minutes");
        minutes.set_symbol("m");

        assert_eq!(time.len(), 2);
        let last = time.units().last().unwrap();
        assert_eq!(last.name(), "Minutes");
        assert_eq!(last.symbol(), "m");
        assert_eq!(last.category_id(), time.id());
        assert!(time.owns(last));
    }

    #[test]
    fn test_added_unit_lives_inside_its_category() {
        let mut time = Category::new("Time");
        let added: *const Unit = time.add_unit("Minutes", "min", 95.0).unwrap();
        assert!(std::ptr::eq(added, &time.units()[0]));

        // Edits through the returned unit land in the category itself
        time.add_unit("Hours", "h", 1.0)
            .unwrap()
            .set_value(1.58333)
            .unwrap();
        time.unit_mut(0).unwrap().set_value(96.0).unwrap();
        assert_eq!(time.units()[0].value(), 96.0);
        assert_eq!(time.units()[1].value(), 1.58333);
        assert!(time.units().iter().all(|u| time.owns(u)));
    }

    #[test]
    fn test_add_unit_rejects_invalid_factor() {
        let mut distance = Category::new("Distance");
        assert_eq!(
            distance.add_unit("Nothing", "0", 0.0).unwrap_err(),
            ModelError::InvalidFactor { value: 0.0 }
        );
        assert!(distance.add_unit("Backwards", "-", -1.0).is_err());
        assert!(distance.is_empty());
    }

    #[test]
    fn test_units_are_not_shared_across_categories() {
        let mut time = Category::new("Time");
        let mut distance = Category::new("Distance");
        time.add_unit("Minutes", "min", 95.0).unwrap();
        distance.add_unit("Feet", "\"", 8.0).unwrap();

        assert_ne!(time.id(), distance.id());
        assert!(!distance.owns(&time.units()[0]));
        assert!(!time.owns(&distance.units()[0]));
    }

    #[test]
    fn test_find_unit_is_case_insensitive() {
        let mut time = Category::new("Time");
        time.add_unit("Hours", "h", 1.58333).unwrap();
        time.add_unit("Days", "d", 0.0659722).unwrap();

        assert_eq!(time.position(" days "), Some(1));
        assert_eq!(time.find_unit("HOURS").map(Unit::symbol), Some("h"));
        assert!(time.find_unit("Fortnights").is_none());

        time.find_unit_mut("days").unwrap().set_value(0.066).unwrap();
        assert_eq!(time.unit(1).unwrap().value(), 0.066);
    }
}
