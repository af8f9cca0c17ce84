//! Data models
//!
//! Categories and the units they own.

mod category;
mod text;
mod unit;

pub use category::{Category, CategoryId};
pub use text::{DisplayText, NULL_TEXT};
pub use unit::{validate_factor, ModelError, ModelResult, Unit};
