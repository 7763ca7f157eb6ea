//! Auckland Transport GTFS client
//!
//! Provides stop search and stop-trip lookup against the Auckland Transport
//! GTFS API. Stop search has no server-side name filter, so the client fetches
//! the day's stops and filters them locally.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, instrument};
use url::Url;

use crate::clock::{Clock, SystemClock};
use crate::config::TransitConfig;
use crate::endpoint::Endpoint;
use crate::error::TransitError;
use crate::models::{StopResponse, StopTripResponse};

const SUBSCRIPTION_KEY_HEADER: &str = "ocp-apim-subscription-key";

/// Trait for transit service clients
#[async_trait]
pub trait TransitClient: Send + Sync {
    /// Search for stops whose name contains `name`, ignoring case
    ///
    /// An empty name yields an empty response without calling upstream.
    async fn search_stop(&self, name: &str) -> Result<StopResponse, TransitError>;

    /// Trips serving `stop_id` today, starting from the current hour
    ///
    /// An empty stop id yields an empty response without calling upstream.
    async fn get_stop_trips_by_stop_id(
        &self,
        stop_id: &str,
    ) -> Result<StopTripResponse, TransitError>;
}

/// Transit client for the Auckland Transport GTFS API
#[derive(Debug, Clone)]
pub struct AucklandTransportClient {
    client: Client,
    base_url: Url,
    timeout_secs: u64,
    clock: Arc<dyn Clock>,
}

impl AucklandTransportClient {
    /// Create a new client reading time from the system clock
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &TransitConfig) -> Result<Self, TransitError> {
        let clock = match config.timezone.as_deref() {
            Some(tz) => SystemClock::in_timezone(tz)?,
            None => SystemClock::local(),
        };
        Self::with_clock(config, Arc::new(clock))
    }

    /// Create a new client with an explicit time source
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn with_clock(config: &TransitConfig, clock: Arc<dyn Clock>) -> Result<Self, TransitError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(Self::default_headers(config)?)
            .build()
            .map_err(|e| TransitError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.parsed_base_url()?,
            timeout_secs: config.timeout_secs,
            clock,
        })
    }

    fn default_headers(config: &TransitConfig) -> Result<HeaderMap, TransitError> {
        let mut key = HeaderValue::from_str(config.api_key_str()).map_err(|e| {
            TransitError::ConfigurationError(format!("api_key is not a valid header value: {e}"))
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(HeaderName::from_static(SUBSCRIPTION_KEY_HEADER), key);
        Ok(headers)
    }

    /// Issue a GET and return the raw body of a successful response
    async fn fetch(&self, endpoint: &Endpoint<'_>) -> Result<String, TransitError> {
        let url = endpoint.url(&self.base_url);
        debug!(%url, "Requesting upstream");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                TransitError::Timeout {
                    timeout_secs: self.timeout_secs,
                }
            } else {
                TransitError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransitError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| TransitError::ConnectionFailed(e.to_string()))
    }
}

#[async_trait]
impl TransitClient for AucklandTransportClient {
    #[instrument(skip(self))]
    async fn search_stop(&self, name: &str) -> Result<StopResponse, TransitError> {
        if name.is_empty() {
            return Ok(StopResponse::empty());
        }

        let endpoint = Endpoint::Stops {
            at: self.clock.now(),
        };
        let stops = StopResponse::from_json_str(&self.fetch(&endpoint).await?)?;
        let total = stops.len();

        // A whitespace-only name trims to "" and keeps every stop
        let found = stops.matching_name(name.trim());
        debug!(total, matched = found.len(), "Stops filtered by name");
        Ok(found)
    }

    #[instrument(skip(self))]
    async fn get_stop_trips_by_stop_id(
        &self,
        stop_id: &str,
    ) -> Result<StopTripResponse, TransitError> {
        if stop_id.is_empty() {
            return Ok(StopTripResponse::empty());
        }
        let stop_id = stop_id.trim();
        if stop_id.is_empty() {
            // Would address `/stops//stoptrips`
            debug!("Whitespace-only stop id, skipping request");
            return Ok(StopTripResponse::empty());
        }

        let endpoint = Endpoint::StopTrips {
            stop_id,
            at: self.clock.now(),
        };
        let trips = StopTripResponse::from_json_str(&self.fetch(&endpoint).await?)?;

        debug!(count = trips.len(), "Stop trips found");
        Ok(trips)
    }
}
