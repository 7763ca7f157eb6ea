//! Transit service configuration

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::error::TransitError;

/// Environment variable prefix, e.g. `AT_BASE_URL`
pub const ENV_PREFIX: &str = "AT";

/// Configuration for the Auckland Transport GTFS API
#[derive(Clone, Deserialize)]
pub struct TransitConfig {
    /// Base URL for the API, e.g. `https://api.at.govt.nz/gtfs/v3`
    pub base_url: String,

    /// Subscription key sent as `Ocp-Apim-Subscription-Key`
    pub api_key: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// IANA timezone used to pick "today" and "this hour" (host local time if unset)
    #[serde(default)]
    pub timezone: Option<String>,
}

const fn default_timeout_secs() -> u64 {
    10
}

impl fmt::Debug for TransitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("timezone", &self.timezone)
            .finish()
    }
}

impl TransitConfig {
    /// Create a configuration with default timeout and local time
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: SecretString::from(api_key.into()),
            timeout_secs: default_timeout_secs(),
            timezone: None,
        }
    }

    /// Load configuration from `AT_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or the values are invalid.
    pub fn from_env() -> Result<Self, TransitError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(environment: config::Environment) -> Result<Self, TransitError> {
        let config: Self = config::Config::builder()
            .add_source(environment)
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| TransitError::ConfigurationError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// The API key as a string reference (for request headers)
    #[must_use]
    pub fn api_key_str(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Parsed base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL.
    pub fn parsed_base_url(&self) -> Result<Url, TransitError> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            TransitError::ConfigurationError(format!("base_url {:?}: {e}", self.base_url))
        })?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(TransitError::ConfigurationError(format!(
                "base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }
        Ok(url)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), TransitError> {
        if self.base_url.is_empty() {
            return Err(TransitError::ConfigurationError(
                "base_url must not be empty".to_string(),
            ));
        }

        self.parsed_base_url()?;

        if self.api_key_str().trim().is_empty() {
            return Err(TransitError::ConfigurationError(
                "api_key must not be empty".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(TransitError::ConfigurationError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
