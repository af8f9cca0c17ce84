//! Conversion MCP Tools
//!
//! Stateless conversions addressed by category and unit name.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::conversion::{self, format_amount, parse_amount, Direction};

/// Response for convert
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub category: String,
    pub unit: String,
    pub direction: Direction,
    pub amount: f64,
    pub value: f64,
    pub label: String,
    pub formatted: String,
}

/// Response for convert_between
#[derive(Debug, Serialize)]
pub struct ConvertBetweenResponse {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub amount: f64,
    pub value: f64,
    pub formatted: String,
}

pub fn parse_direction(direction: &str) -> Result<Direction, String> {
    Direction::from_str(direction).ok_or_else(|| {
        format!(
            "Unknown direction '{}': use 'to_unit' (from Shreks) or 'to_base' (into Shreks)",
            direction
        )
    })
}

pub fn convert(
    catalog: &Catalog,
    category: &str,
    unit: &str,
    amount: &str,
    direction: &str,
    precision: usize,
) -> Result<ConvertResponse, String> {
    let direction = parse_direction(direction)?;
    let found = catalog.unit(category, unit).map_err(|e| e.to_string())?;
    let amount = parse_amount(amount).map_err(|e| e.to_string())?;
    let result = conversion::convert(amount, found, direction).map_err(|e| e.to_string())?;

    let category = catalog
        .category_of(found)
        .map(|c| c.name().to_string())
        .unwrap_or_else(|| category.to_string());

    Ok(ConvertResponse {
        category,
        unit: found.name().to_string(),
        direction,
        amount,
        value: result.value,
        formatted: result.format(precision),
        label: result.label,
    })
}

pub fn convert_between(
    catalog: &Catalog,
    category: &str,
    from_unit: &str,
    to_unit: &str,
    amount: &str,
    precision: usize,
) -> Result<ConvertBetweenResponse, String> {
    let from = catalog.unit(category, from_unit).map_err(|e| e.to_string())?;
    let to = catalog.unit(category, to_unit).map_err(|e| e.to_string())?;
    let amount = parse_amount(amount).map_err(|e| e.to_string())?;
    let value = conversion::convert_between(amount, from, to).map_err(|e| e.to_string())?;

    Ok(ConvertBetweenResponse {
        category: catalog
            .category_of(from)
            .map(|c| c.name().to_string())
            .unwrap_or_else(|| category.to_string()),
        from_unit: from.name().to_string(),
        to_unit: to.name().to_string(),
        amount,
        value,
        formatted: format_amount(value, to.symbol(), precision),
    })
}
