//! Parameter structs for the MCP tools.
//!
//! Parameters derive `Deserialize + JsonSchema` for tool registration.

use schemars::JsonSchema;
use serde::Deserialize;

// ── search_stop ──

/// Parameters for the `search_stop` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct SearchStopParams {
    /// Stop name fragment.
    #[serde(default)]
    #[schemars(
        description = "Stop name to search for (case-insensitive substring, e.g. 'britomart'). Empty returns no stops."
    )]
    pub name: Option<String>,
}

// ── get_stop_trips_by_stop_id ──

/// Parameters for the `get_stop_trips_by_stop_id` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct StopTripsParams {
    /// GTFS stop identifier.
    #[serde(default)]
    #[schemars(
        description = "stop_id of the stop (as returned by search_stop, e.g. '100-1'). Empty returns no trips."
    )]
    pub stop_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_default_to_none() {
        let params: SearchStopParams = serde_json::from_str("{}").unwrap();
        assert!(params.name.is_none());

        let params: StopTripsParams = serde_json::from_str(r#"{"stop_id": "100-1"}"#).unwrap();
        assert_eq!(params.stop_id.as_deref(), Some("100-1"));
    }

    #[test]
    fn test_schema_carries_descriptions() {
        let schema = serde_json::to_value(schemars::schema_for!(SearchStopParams)).unwrap();
        let description = schema["properties"]["name"]["description"]
            .as_str()
            .unwrap();
        assert!(description.contains("case-insensitive"));
    }
}
