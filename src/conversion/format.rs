//! Result formatting
//!
//! Fixed-point output, independent of locale: no digit grouping and always a
//! `.` decimal separator.

/// Label printed after amounts expressed in the base unit
pub const BASE_UNIT_LABEL: &str = "Shreks";

/// Decimals used when nothing else is configured
pub const DEFAULT_PRECISION: usize = 6;

/// Highest precision accepted from configuration
pub const MAX_PRECISION: usize = 15;

/// Format a number with a fixed count of decimals
pub fn format_fixed(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*}", precision.min(MAX_PRECISION), value);
    // "-0.000000" reads as a bug to users
    if formatted.starts_with('-') && formatted[1..].chars().all(|c| c == '0' || c == '.') {
        formatted[1..].to_string()
    } else {
        formatted
    }
}

/// Format a number followed by its unit label
pub fn format_amount(value: f64, label: &str, precision: usize) -> String {
    format!("{} {}", format_fixed(value, precision), label)
}
