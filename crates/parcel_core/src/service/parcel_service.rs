//! Parcel use-case service.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::parcel::{ClientId, Parcel, ParcelNumber, ParcelStatus};
use crate::repo::parcel_repo::{ParcelRepository, RepoResult};
use log::info;

/// Use-case service wrapper for parcel tracking.
pub struct ParcelService<R: ParcelRepository> {
    repo: R,
}

impl<R: ParcelRepository> ParcelService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new parcel for `client`, stamped with the current time.
    ///
    /// # Contract
    /// - Status starts as `registered`.
    /// - Returns the store-assigned number.
    pub fn register_parcel(
        &self,
        client: ClientId,
        address: impl Into<String>,
    ) -> RepoResult<ParcelNumber> {
        let parcel = Parcel::register(client, address);
        let number = self.repo.add(&parcel)?;
        info!(
            "event=parcel_register module=service status=ok number={} client={}",
            number, client
        );
        Ok(number)
    }

    /// Persists a caller-built parcel.
    pub fn add_parcel(&self, parcel: &Parcel) -> RepoResult<ParcelNumber> {
        self.repo.add(parcel)
    }

    pub fn get_parcel(&self, number: ParcelNumber) -> RepoResult<Parcel> {
        self.repo.get(number)
    }

    pub fn client_parcels(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        self.repo.get_by_client(client)
    }

    /// Moves the parcel to `sent`. Once sent, address and deletion are locked.
    pub fn ship_parcel(&self, number: ParcelNumber) -> RepoResult<()> {
        self.repo.set_status(number, ParcelStatus::Sent)
    }

    pub fn deliver_parcel(&self, number: ParcelNumber) -> RepoResult<()> {
        self.repo.set_status(number, ParcelStatus::Delivered)
    }

    /// Changes the delivery address; a silent no-op unless `registered`.
    pub fn change_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        self.repo.set_address(number, address)
    }

    /// Removes the parcel; a silent no-op unless `registered`.
    pub fn cancel_parcel(&self, number: ParcelNumber) -> RepoResult<()> {
        self.repo.delete(number)
    }
}
