//! Variant Units
//!
//! An MCP server for variant unit scaling, naming and unit pricing.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use variant_units::build_info;
use variant_units::mcp::UnitsService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("variant_units=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    tracing::info!(
        families = variant_units::units::UnitFamily::ALL.len(),
        options = variant_units::units::variant_unit_options().len(),
        "scale tables loaded"
    );
    eprintln!("Starting MCP server on stdio...");

    let service = UnitsService::new();

    // Create stdio transport
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
