//! MCP ServerHandler implementation for Auckland Transport.
//!
//! Exposes two read-only tools backed by a [`TransitClient`]:
//!
//! - `search_stop` — Find stops by name (case-insensitive substring match)
//! - `get_stop_trips_by_stop_id` — List today's trips at a stop from the current hour

use std::fmt;
use std::sync::Arc;

use integration_transit::{StopResponse, StopTripResponse, TransitClient, TransitError};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::{Json, Parameters};
use rmcp::model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde_json::json;
use tracing::warn;

use crate::params::{SearchStopParams, StopTripsParams};

/// Auckland Transport MCP server handler.
///
/// Holds the shared transit client; cloned per connection, never mutated.
#[derive(Clone)]
pub struct AucklandTransportServer {
    tool_router: ToolRouter<Self>,
    transit: Arc<dyn TransitClient>,
}

impl fmt::Debug for AucklandTransportServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AucklandTransportServer")
            .field("tool_router", &self.tool_router)
            .finish_non_exhaustive()
    }
}

impl AucklandTransportServer {
    /// Create a server delegating to the given transit client.
    pub fn new(transit: Arc<dyn TransitClient>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            transit,
        }
    }
}

/// Turn a transit failure into a protocol error the host reports to the caller.
fn tool_error(tool: &str, err: &TransitError) -> McpError {
    warn!(tool, error = %err, "Tool invocation failed");
    let kind = if err.is_validation() {
        "validation_error"
    } else {
        "request_error"
    };
    McpError::internal_error(err.to_string(), Some(json!({ "tool": tool, "kind": kind })))
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for AucklandTransportServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "auckland-transport".to_string(),
                title: Some("Auckland Transport MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "Auckland Transport GTFS lookups: stop search by name and today's \
                     trips at a stop"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Auckland Transport public transit data (GTFS).\n\
                 Workflow: search_stop to find a stop by name → take its stop_id → \
                 get_stop_trips_by_stop_id for trips at that stop today, from the current hour.\n\
                 search_stop matches any part of the stop name, ignoring case."
                    .to_string(),
            ),
        }
    }
}

#[tool_router(router = tool_router)]
impl AucklandTransportServer {
    /// Search for stops by name.
    #[tool(
        name = "search_stop",
        description = "Search for Auckland Transport stops by name (case-insensitive substring match). Returns matching stops with stop_id, stop_code, stop_name, stop_lat, stop_lon, location_type, and wheelchair_boarding. An empty name returns no stops."
    )]
    pub async fn search_stop(
        &self,
        Parameters(params): Parameters<SearchStopParams>,
    ) -> Result<Json<StopResponse>, McpError> {
        let name = params.name.unwrap_or_default();
        let stops = self
            .transit
            .search_stop(&name)
            .await
            .map_err(|e| tool_error("search_stop", &e))?;

        Ok(Json(stops))
    }

    /// Get trips at a stop for today from the current hour.
    #[tool(
        name = "get_stop_trips_by_stop_id",
        description = "Get the trips serving a stop today, starting from the current hour. Returns arrival_time, departure_time, direction_id, drop_off_type, pickup_type, route_id, service_date, shape_id, stop_headsign, stop_id, stop_sequence, and trip_headsign per trip. An empty stop_id returns no trips."
    )]
    pub async fn get_stop_trips_by_stop_id(
        &self,
        Parameters(params): Parameters<StopTripsParams>,
    ) -> Result<Json<StopTripResponse>, McpError> {
        let stop_id = params.stop_id.unwrap_or_default();
        let trips = self
            .transit
            .get_stop_trips_by_stop_id(&stop_id)
            .await
            .map_err(|e| tool_error("get_stop_trips_by_stop_id", &e))?;

        Ok(Json(trips))
    }
}
