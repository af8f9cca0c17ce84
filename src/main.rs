//! Shrekdroid
//!
//! An MCP server converting time and distance units through the Shrek.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use shrekdroid::build_info;
use shrekdroid::catalog::Catalog;
use shrekdroid::config::Config;
use shrekdroid::mcp::ShrekService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr so stdout stays clean for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("shrekdroid=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env();
    tracing::info!(precision = config.precision, "Configuration loaded");

    // Populate everything before the first request can select from it
    let catalog = Catalog::seeded()?;
    tracing::info!(
        categories = catalog.len(),
        units = catalog.unit_count(),
        "Catalog ready"
    );

    let service = ShrekService::new(catalog, config);

    eprintln!("Starting MCP server on stdio...");
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
