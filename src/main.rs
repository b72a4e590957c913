//! USDA FoodData Central MCP Server
//!
//! Exposes FDC food search, detail, and comparison tools over MCP stdio.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

mod build_info;
mod config;
mod fdc;
mod format;
mod mcp;
mod models;
mod tools;

use config::FdcConfig;
use mcp::FdcService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("usda_fdc_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    // Read configuration once; a missing key degrades the data tools rather
    // than preventing startup
    let fdc_config = FdcConfig::from_env();
    eprintln!("Upstream base URL: {}", fdc_config.base_url);
    if fdc_config.api_key.is_none() {
        eprintln!("Warning: FDC_API_KEY is not set; data tools will return errors");
    }

    // Create the service
    let service = FdcService::new(fdc_config);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
