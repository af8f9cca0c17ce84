//! Tools module
//!
//! Tool implementations behind the MCP service.

pub mod catalog;
pub mod convert;
pub mod session;
pub mod status;
