//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the parcel data access contract.
//! - Isolate SQLite statement details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Parcel::validate()` before persistence.
//! - Status-gated mutations that match zero rows are successes, not errors.

pub mod parcel_repo;
