//! Auckland Transport integration
//!
//! Provides stop search and stop-trip lookup via the
//! [Auckland Transport GTFS API](https://dev-portal.at.govt.nz), which serves
//! GTFS records wrapped in `{type, id, attributes}` envelopes.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern. [`TransitClient`] defines the two
//! lookups and is implemented by [`AucklandTransportClient`]. Upstream payloads
//! are validated by deserializing into the [`StopResponse`] and
//! [`StopTripResponse`] models. "Today" and "this hour" come from an injectable
//! [`Clock`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_transit::{AucklandTransportClient, TransitClient, TransitConfig};
//!
//! let config = TransitConfig::from_env()?;
//! let client = AucklandTransportClient::new(&config)?;
//!
//! let stops = client.search_stop("britomart").await?;
//! let trips = client
//!     .get_stop_trips_by_stop_id(&stops.data[0].attributes.stop_id)
//!     .await?;
//! ```

mod client;
mod clock;
mod config;
mod endpoint;
mod error;
mod models;

pub use client::{AucklandTransportClient, TransitClient};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::TransitConfig;
pub use error::TransitError;
pub use models::{
    Stop, StopAttributes, StopResponse, StopTrip, StopTripAttributes, StopTripResponse,
};
