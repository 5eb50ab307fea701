//! Domain model for tracked parcels.
//!
//! # Invariants
//! - A parcel number is assigned by the store, never by callers.
//! - Address changes and deletion are only allowed while `registered`.

pub mod parcel;
