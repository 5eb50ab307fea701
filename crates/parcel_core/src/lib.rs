//! Persistence core for parcel tracking.
//!
//! A parcel belongs to a client, carries a status and a delivery address, and
//! is keyed by a number the store assigns. Address changes and deletion are
//! only honoured while a parcel is still `registered`.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{DbConfig, LogConfig, TrackerConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::parcel::{
    now_rfc3339, ClientId, Parcel, ParcelNumber, ParcelStatus, ParcelStatusParseError,
    ParcelValidationError,
};
pub use repo::parcel_repo::{ParcelRepository, RepoError, RepoResult, SqliteParcelRepository};
pub use service::parcel_service::ParcelService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
