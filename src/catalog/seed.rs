//! Built-in categories
//!
//! Factors are the number of each unit in one Shrek (about 57 seconds, or
//! 2.4384 meters).

use crate::models::{Category, ModelResult};

/// (name, symbol, units per Shrek)
pub type UnitSeed = (&'static str, &'static str, f64);

pub const TIME: &str = "Time";

pub const TIME_UNITS: &[UnitSeed] = &[
    ("Milliseconds", "ms", 5_700_000.0),
    ("Seconds", "sec", 5_700.0),
    ("Minutes", "min", 95.0),
    ("Hours", "h", 1.58333),
    ("Days", "d", 0.0659722),
    ("Weeks", "w", 0.0094246),
];

pub const DISTANCE: &str = "Distance";

// Symbols are kept as shipped, including the shared "m" for miles and meters
pub const DISTANCE_UNITS: &[UnitSeed] = &[
    ("Inches", "'", 96.0),
    ("Feet", "\"", 8.0),
    ("Yards", "yd", 2.66667),
    ("Miles", "m", 0.00151515),
    ("Millimeters", "mm", 2438.4),
    ("Centimeters", "cm", 243.84),
    ("Meters", "m", 2.4384),
    ("Kilometers", "km", 0.0024384),
];

/// Build a category from a seed table, preserving table order
pub fn build_category(name: &str, units: &[UnitSeed]) -> ModelResult<Category> {
    let mut category = Category::new(name);
    for &(unit_name, symbol, value) in units {
        category.add_unit(unit_name, symbol, value)?;
    }
    Ok(category)
}

/// All built-in categories, in display order
pub fn default_categories() -> ModelResult<Vec<Category>> {
    Ok(vec![
        build_category(TIME, TIME_UNITS)?,
        build_category(DISTANCE, DISTANCE_UNITS)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_factors_are_valid() {
        for &(name, _, value) in TIME_UNITS.iter().chain(DISTANCE_UNITS) {
            assert!(value > 0.0 && value.is_finite(), "{} has factor {}", name, value);
        }
    }

    #[test]
    fn test_build_category_keeps_order_and_values() {
        let time = build_category(TIME, TIME_UNITS).unwrap();
        let names: Vec<&str> = time.units().iter().map(|u| u.name()).collect();
        assert_eq!(
            names,
            ["Milliseconds", "Seconds", "Minutes", "Hours", "Days", "Weeks"]
        );
        assert_eq!(time.units()[0].value(), 5_700_000.0);
        assert_eq!(time.units()[5].value(), 0.0094246);
    }

    #[test]
    fn test_default_categories() {
        let categories = default_categories().unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name(), "Time");
        assert_eq!(categories[0].len(), 6);
        assert_eq!(categories[1].name(), "Distance");
        assert_eq!(categories[1].len(), 8);
        assert_eq!(categories[1].find_unit("Meters").unwrap().value(), 2.4384);
        assert_eq!(categories[1].find_unit("Kilometers").unwrap().value(), 0.0024384);
    }
}
