//! Conversion functions
//!
//! Every unit's factor says how many of it make one Shrek, so converting is
//! a single multiplication or division.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::{format_amount, BASE_UNIT_LABEL};
use crate::models::Unit;

/// Conversion errors, reported to the user as-is
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("'{input}' is not a number")]
    InvalidAmount { input: String },

    #[error("No unit selected")]
    NoUnitSelected,

    #[error("Cannot convert between '{from}' and '{to}': they belong to different categories")]
    CategoryMismatch { from: String, to: String },

    #[error("Result of converting {amount} is too large to represent")]
    OutOfRange { amount: f64 },
}

pub type ConversionResult<T> = Result<T, ConversionError>;

/// Which way an amount travels relative to the base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Amount is in Shreks, result is in the unit
    ToUnit,
    /// Amount is in the unit, result is in Shreks
    ToBase,
}

/// Direction used when a caller doesn't name one
pub const DEFAULT_DIRECTION: Direction = Direction::ToBase;

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::ToUnit => "to_unit",
            Direction::ToBase => "to_base",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "to_unit" | "from_base" | "from_shreks" => Some(Direction::ToUnit),
            "to_base" | "from_unit" | "to_shreks" => Some(Direction::ToBase),
            _ => None,
        }
    }
}

/// Parse a free-text amount
///
/// Surrounding whitespace is ignored. NaN and infinities are rejected along
/// with anything that isn't a number.
pub fn parse_amount(input: &str) -> ConversionResult<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(ConversionError::InvalidAmount {
            input: input.to_string(),
        }),
    }
}

/// Shreks to units
pub fn to_unit(amount: f64, unit: &Unit) -> f64 {
    amount * unit.value()
}

/// Units to Shreks
pub fn to_base(amount: f64, unit: &Unit) -> f64 {
    amount / unit.value()
}

/// Result of one conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub amount: f64,
    pub direction: Direction,
    pub value: f64,
    /// Unit symbol or the base unit label
    pub label: String,
}

impl Conversion {
    pub fn format(&self, precision: usize) -> String {
        format_amount(self.value, &self.label, precision)
    }
}

/// Convert a parsed amount in the given direction
pub fn convert(amount: f64, unit: &Unit, direction: Direction) -> ConversionResult<Conversion> {
    let (value, label) = match direction {
        Direction::ToUnit => (to_unit(amount, unit), unit.symbol().to_string()),
        Direction::ToBase => (to_base(amount, unit), BASE_UNIT_LABEL.to_string()),
    };

    if !value.is_finite() {
        return Err(ConversionError::OutOfRange { amount });
    }

    Ok(Conversion {
        amount,
        direction,
        value,
        label,
    })
}

/// A conversion as requested from an interactive surface
///
/// The unit is optional because nothing may be selected yet.
#[derive(Debug, Clone, Copy)]
pub struct ConversionRequest<'a> {
    pub amount: &'a str,
    pub unit: Option<&'a Unit>,
    pub direction: Direction,
}

impl<'a> ConversionRequest<'a> {
    pub fn new(amount: &'a str, unit: Option<&'a Unit>, direction: Direction) -> Self {
        Self {
            amount,
            unit,
            direction,
        }
    }

    pub fn execute(&self) -> ConversionResult<Conversion> {
        let unit = self.unit.ok_or(ConversionError::NoUnitSelected)?;
        let amount = parse_amount(self.amount)?;
        convert(amount, unit, self.direction)
    }
}

/// Convert directly from one unit to another of the same category
pub fn convert_between(amount: f64, from: &Unit, to: &Unit) -> ConversionResult<f64> {
    if from.category_id() != to.category_id() {
        return Err(ConversionError::CategoryMismatch {
            from: from.name().to_string(),
            to: to.name().to_string(),
        });
    }

    // Scale by the factor ratio first so extreme factors don't overflow
    // the intermediate Shrek amount
    let ratio = to.value() / from.value();
    let value = if ratio.is_finite() && ratio > 0.0 {
        amount * ratio
    } else {
        to_unit(to_base(amount, from), to)
    };
    if !value.is_finite() {
        return Err(ConversionError::OutOfRange { amount });
    }
    Ok(value)
}
