//! Conversion
//!
//! An MCP server exposing the conversion form as tools.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use conversion::build_info;
use conversion::mcp::ConversionService;
use conversion::units::{resolve_category, ConversionCategory};

/// Get the category new forms start on from environment or use Temperature
fn get_default_category() -> ConversionCategory {
    match std::env::var("CONVERSION_DEFAULT_CATEGORY") {
        Ok(label) => match resolve_category(&label) {
            ConversionCategory::None => {
                tracing::warn!(
                    "CONVERSION_DEFAULT_CATEGORY='{}' is not a category, using Temperature",
                    label
                );
                ConversionCategory::Temperature
            }
            category => category,
        },
        Err(_) => ConversionCategory::Temperature,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("conversion=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let default_category = get_default_category();

    build_info::print_startup_banner(default_category);
    tracing::info!("Starting MCP server on stdio");

    let service = ConversionService::new(default_category);

    // Create stdio transport
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
