//! Parcel domain model.
//!
//! # Responsibility
//! - Define the single persisted record of the tracker.
//! - Own the status vocabulary persisted in `parcel.status`.
//!
//! # Invariants
//! - `number` is `None` until the store assigns one, and is not echoed by
//!   single-parcel lookups.
//! - `created_at` is an RFC3339 timestamp and never changes after creation.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned parcel key.
pub type ParcelNumber = i64;

/// Identifier of the client owning a parcel.
pub type ClientId = i64;

/// Delivery lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelStatus {
    /// Accepted but not yet handed to a carrier. The only mutable state.
    Registered,
    /// In transit.
    Sent,
    /// Handed over to the recipient.
    Delivered,
}

impl ParcelStatus {
    /// Storage and wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
        }
    }
}

impl Display for ParcelStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status string is outside the known vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParcelStatusParseError(pub String);

impl Display for ParcelStatusParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown parcel status `{}`; expected registered|sent|delivered",
            self.0
        )
    }
}

impl Error for ParcelStatusParseError {}

impl FromStr for ParcelStatus {
    type Err = ParcelStatusParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "registered" => Ok(Self::Registered),
            "sent" => Ok(Self::Sent),
            "delivered" => Ok(Self::Delivered),
            other => Err(ParcelStatusParseError(other.to_string())),
        }
    }
}

/// Validation failures for parcel write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParcelValidationError {
    InvalidCreatedAt(String),
}

impl Display for ParcelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCreatedAt(value) => {
                write!(f, "created_at `{value}` is not an RFC3339 timestamp")
            }
        }
    }
}

impl Error for ParcelValidationError {}

/// A tracked parcel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Filled by `get_by_client`; `None` for new parcels and `get` results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<ParcelNumber>,
    pub client: ClientId,
    pub status: ParcelStatus,
    pub address: String,
    /// RFC3339, e.g. `2026-10-14T09:30:00Z`.
    pub created_at: String,
}

impl Parcel {
    pub fn new(
        client: ClientId,
        status: ParcelStatus,
        address: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            number: None,
            client,
            status,
            address: address.into(),
            created_at: created_at.into(),
        }
    }

    /// Creates a `registered` parcel stamped with the current UTC time.
    pub fn register(client: ClientId, address: impl Into<String>) -> Self {
        Self::new(client, ParcelStatus::Registered, address, now_rfc3339())
    }

    /// Checks invariants that the schema does not enforce.
    pub fn validate(&self) -> Result<(), ParcelValidationError> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|_| ())
            .map_err(|_| ParcelValidationError::InvalidCreatedAt(self.created_at.clone()))
    }
}

/// Current UTC time at second precision with a `Z` suffix.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::{now_rfc3339, Parcel, ParcelStatus};

    #[test]
    fn status_roundtrips_through_str() {
        for status in [
            ParcelStatus::Registered,
            ParcelStatus::Sent,
            ParcelStatus::Delivered,
        ] {
            assert_eq!(status.as_str().parse::<ParcelStatus>(), Ok(status));
        }
        assert!("lost".parse::<ParcelStatus>().is_err());
    }

    #[test]
    fn now_is_second_precision_utc() {
        let now = now_rfc3339();
        assert!(now.ends_with('Z'), "unexpected timestamp: {now}");
        assert!(!now.contains('.'), "unexpected fraction: {now}");
    }

    #[test]
    fn register_produces_valid_registered_parcel() {
        let parcel = Parcel::register(1000, "test");
        assert_eq!(parcel.number, None);
        assert_eq!(parcel.status, ParcelStatus::Registered);
        parcel.validate().expect("fresh parcel should validate");
    }
}
