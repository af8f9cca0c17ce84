//! Shrekdroid Library
//!
//! Unit conversion through an in-joke base unit, the Shrek.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod conversion;
pub mod mcp;
pub mod models;
pub mod session;
pub mod tools;
