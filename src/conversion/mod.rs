//! Conversion module
//!
//! Parsing amounts, converting through the base unit, and formatting results.

pub mod converter;
pub mod format;

pub use converter::{
    convert, convert_between, parse_amount, to_base, to_unit, Conversion, ConversionError,
    ConversionRequest, ConversionResult, Direction, DEFAULT_DIRECTION,
};
pub use format::{
    format_amount, format_fixed, BASE_UNIT_LABEL, DEFAULT_PRECISION, MAX_PRECISION,
};
