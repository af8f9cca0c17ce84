//! MCP module
//!
//! The stdio tool server.

mod server;

pub use server::ShrekService;
