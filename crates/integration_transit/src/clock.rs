//! Wall-clock access
//!
//! The upstream API scopes stop trips to "today" and "this hour", so the client
//! reads the time on every call through [`Clock`]. Tests substitute a
//! [`FixedClock`].

use std::fmt;

use chrono::{Local, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::TransitError;

/// Source of the current local date and time
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current wall-clock time
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock, either in the host's local zone or a fixed IANA zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Option<Tz>,
}

impl SystemClock {
    /// Clock in the host's local timezone
    #[must_use]
    pub const fn local() -> Self {
        Self { timezone: None }
    }

    /// Clock in the given IANA timezone (e.g. `Pacific/Auckland`)
    ///
    /// # Errors
    ///
    /// Returns an error if the timezone name is unknown.
    pub fn in_timezone(name: &str) -> Result<Self, TransitError> {
        let tz: Tz = name
            .parse()
            .map_err(|e| TransitError::ConfigurationError(format!("timezone {name:?}: {e}")))?;
        Ok(Self { timezone: Some(tz) })
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self.timezone {
            Some(tz) => Utc::now().with_timezone(&tz).naive_local(),
            None => Local::now().naive_local(),
        }
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
