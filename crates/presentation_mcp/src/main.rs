//! Auckland Transport MCP Server
//!
//! Model Context Protocol server exposing Auckland Transport stop search and
//! stop-trip lookup to LLM agents over stdio.

use std::sync::Arc;

use integration_transit::{AucklandTransportClient, TransitConfig};
use presentation_mcp::AucklandTransportServer;
use rmcp::ServiceExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("auckland_transport_mcp=info".parse()?)
                .add_directive("presentation_mcp=info".parse()?)
                .add_directive("integration_transit=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Ok(path) = dotenvy::dotenv() {
        info!(path = %path.display(), "Loaded environment file");
    }

    let config = TransitConfig::from_env()?;
    info!(
        base_url = %config.base_url,
        timeout_secs = config.timeout_secs,
        timezone = config.timezone.as_deref().unwrap_or("local"),
        "Configuration loaded"
    );

    let transit = AucklandTransportClient::new(&config)?;
    let server = AucklandTransportServer::new(Arc::new(transit));

    info!("auckland-transport-mcp v{} starting (stdio transport)", env!("CARGO_PKG_VERSION"));

    let service = server.serve(rmcp::transport::io::stdio()).await?;
    service.waiting().await?;

    Ok(())
}
