//! GTFS data models
//!
//! Typed representations of the stop and stop-trip resources returned by the
//! Auckland Transport GTFS API. Every resource arrives in a `{type, id, attributes}`
//! envelope and every response wraps a list of envelopes under `data`.
//!
//! Deserializing into these types is the validation step: a missing or mistyped
//! field rejects the whole response.

use serde::de::DeserializeOwned;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TransitError;

/// Attributes of a transit stop
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StopAttributes {
    /// Location type (0 = stop, 1 = station, 2 = entrance, ...)
    pub location_type: i64,
    /// Public-facing stop code
    pub stop_code: String,
    /// Unique stop identifier
    pub stop_id: String,
    /// Latitude coordinate
    pub stop_lat: f64,
    /// Longitude coordinate
    pub stop_lon: f64,
    /// Human-readable stop name
    pub stop_name: String,
    /// Wheelchair accessibility (0 = unknown, 1 = accessible, 2 = not accessible)
    pub wheelchair_boarding: i64,
}

/// A transit stop resource
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Stop {
    /// Resource type tag, `"stop"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Resource identifier
    pub id: String,
    /// Stop details
    pub attributes: StopAttributes,
}

/// List of stops
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StopResponse {
    /// Stops in upstream order
    pub data: Vec<Stop>,
}

impl StopResponse {
    /// A response with no stops
    #[must_use]
    pub const fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Validate a decoded JSON payload
    ///
    /// # Errors
    ///
    /// Returns [`TransitError::ValidationError`] if any stop is missing a
    /// field or has a field of the wrong type.
    pub fn validate(raw: serde_json::Value) -> Result<Self, TransitError> {
        validate(raw)
    }

    /// Validate a raw response body
    ///
    /// # Errors
    ///
    /// Returns [`TransitError::ValidationError`] if the body is not JSON or
    /// does not match the schema.
    pub fn from_json_str(body: &str) -> Result<Self, TransitError> {
        from_json_str(body)
    }

    /// Keep only stops whose name contains `query`, ignoring case
    ///
    /// The query is trimmed, stop names are not. Relative order is kept.
    #[must_use]
    pub fn matching_name(self, query: &str) -> Self {
        let needle = query.trim().to_lowercase();
        let data = self
            .data
            .into_iter()
            .filter(|stop| stop.attributes.stop_name.to_lowercase().contains(&needle))
            .collect();
        Self { data }
    }

    /// Number of stops
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the response holds no stops
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Attributes of a scheduled vehicle visit to a stop
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StopTripAttributes {
    /// Scheduled arrival time (`HH:MM:SS`, may exceed 24:00:00)
    pub arrival_time: String,
    /// Scheduled departure time (`HH:MM:SS`)
    pub departure_time: String,
    /// Direction of travel (0 or 1)
    pub direction_id: u8,
    /// Drop-off type (0 = regular, 1 = none, 2 = phone agency, 3 = ask driver)
    pub drop_off_type: u8,
    /// Pickup type (0 = regular, 1 = none, 2 = phone agency, 3 = ask driver)
    pub pickup_type: u8,
    /// Route identifier
    pub route_id: String,
    /// Service date (`YYYY-MM-DD`)
    pub service_date: String,
    /// Shape identifier
    pub shape_id: String,
    /// Headsign shown at this stop
    pub stop_headsign: String,
    /// Stop identifier
    pub stop_id: String,
    /// Position of this stop within the trip
    pub stop_sequence: i64,
    /// Headsign shown on the vehicle
    pub trip_headsign: String,
}

/// A stop trip resource
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StopTrip {
    /// Resource type tag, `"stoptrip"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Resource identifier
    pub id: String,
    /// Trip details
    pub attributes: StopTripAttributes,
}

/// List of stop trips
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StopTripResponse {
    /// Trips in upstream order
    pub data: Vec<StopTrip>,
}

impl StopTripResponse {
    /// A response with no trips
    #[must_use]
    pub const fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Validate a decoded JSON payload
    ///
    /// # Errors
    ///
    /// Returns [`TransitError::ValidationError`] if any trip is missing a
    /// field or has a field of the wrong type.
    pub fn validate(raw: serde_json::Value) -> Result<Self, TransitError> {
        validate(raw)
    }

    /// Validate a raw response body
    ///
    /// # Errors
    ///
    /// Returns [`TransitError::ValidationError`] if the body is not JSON or
    /// does not match the schema.
    pub fn from_json_str(body: &str) -> Result<Self, TransitError> {
        from_json_str(body)
    }

    /// Number of trips
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the response holds no trips
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn validate<T: DeserializeOwned>(raw: serde_json::Value) -> Result<T, TransitError> {
    Ok(serde_json::from_value(raw)?)
}

fn from_json_str<T: DeserializeOwned>(body: &str) -> Result<T, TransitError> {
    Ok(serde_json::from_str(body)?)
}
