//! Parcel repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Translate parcel operations into single parameterized statements over
//!   the `parcel` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `number` is always assigned by SQLite.
//! - `set_address` and `delete` only touch rows whose status is `registered`;
//!   a guard miss affects zero rows and returns `Ok(())`.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::parcel::{
    ClientId, Parcel, ParcelNumber, ParcelStatus, ParcelValidationError,
};
use log::debug;
use rusqlite::{named_params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for parcel persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ParcelValidationError),
    Db(DbError),
    NotFound(ParcelNumber),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(number) => write!(f, "parcel not found: {number}"),
            Self::InvalidData(message) => write!(f, "invalid persisted parcel data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ParcelValidationError> for RepoError {
    fn from(value: ParcelValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for parcel operations.
pub trait ParcelRepository {
    /// Inserts a parcel and returns the store-assigned number.
    ///
    /// Any `number` already present on `parcel` is ignored.
    fn add(&self, parcel: &Parcel) -> RepoResult<ParcelNumber>;
    /// Loads one parcel. The result carries `number: None`.
    fn get(&self, number: ParcelNumber) -> RepoResult<Parcel>;
    /// Loads every parcel of `client` ordered by number, numbers populated.
    fn get_by_client(&self, client: ClientId) -> RepoResult<Vec<Parcel>>;
    /// Sets status regardless of the current one.
    fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> RepoResult<()>;
    /// Sets address only while the parcel is `registered`.
    fn set_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()>;
    /// Deletes the parcel only while it is `registered`.
    fn delete(&self, number: ParcelNumber) -> RepoResult<()>;
}

/// SQLite-backed parcel repository over a caller-owned connection.
pub struct SqliteParcelRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteParcelRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ParcelRepository for SqliteParcelRepository<'_> {
    fn add(&self, parcel: &Parcel) -> RepoResult<ParcelNumber> {
        parcel.validate()?;

        self.conn.execute(
            "INSERT INTO parcel (client, status, address, created_at)
             VALUES (:client, :status, :address, :created_at);",
            named_params! {
                ":client": parcel.client,
                ":status": parcel.status.as_str(),
                ":address": parcel.address.as_str(),
                ":created_at": parcel.created_at.as_str(),
            },
        )?;

        let number = self.conn.last_insert_rowid();
        debug!(
            "event=parcel_add module=repo status=ok number={} client={}",
            number, parcel.client
        );
        Ok(number)
    }

    fn get(&self, number: ParcelNumber) -> RepoResult<Parcel> {
        let mut stmt = self.conn.prepare(
            "SELECT client, status, address, created_at
             FROM parcel
             WHERE number = :number;",
        )?;

        let mut rows = stmt.query(named_params! { ":number": number })?;
        if let Some(row) = rows.next()? {
            return parse_parcel_row(row, None);
        }

        Err(RepoError::NotFound(number))
    }

    fn get_by_client(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        let mut stmt = self.conn.prepare(
            "SELECT number, client, status, address, created_at
             FROM parcel
             WHERE client = :client
             ORDER BY number ASC;",
        )?;

        let mut rows = stmt.query(named_params! { ":client": client })?;
        let mut parcels = Vec::new();
        while let Some(row) = rows.next()? {
            let number: ParcelNumber = row.get("number")?;
            parcels.push(parse_parcel_row(row, Some(number))?);
        }

        Ok(parcels)
    }

    fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE parcel SET status = :status WHERE number = :number;",
            named_params! {
                ":status": status.as_str(),
                ":number": number,
            },
        )?;

        debug!(
            "event=parcel_set_status module=repo status=ok number={} new_status={} changed={}",
            number, status, changed
        );
        Ok(())
    }

    fn set_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE parcel
             SET address = :address
             WHERE number = :number AND status = :registered;",
            named_params! {
                ":address": address,
                ":number": number,
                ":registered": ParcelStatus::Registered.as_str(),
            },
        )?;

        debug!(
            "event=parcel_set_address module=repo status=ok number={} changed={}",
            number, changed
        );
        Ok(())
    }

    fn delete(&self, number: ParcelNumber) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM parcel WHERE number = :number AND status = :registered;",
            named_params! {
                ":number": number,
                ":registered": ParcelStatus::Registered.as_str(),
            },
        )?;

        debug!(
            "event=parcel_delete module=repo status=ok number={} changed={}",
            number, changed
        );
        Ok(())
    }
}

fn parse_parcel_row(row: &Row<'_>, number: Option<ParcelNumber>) -> RepoResult<Parcel> {
    let status_text: String = row.get("status")?;
    let status = status_text
        .parse::<ParcelStatus>()
        .map_err(|err| RepoError::InvalidData(format!("{err} in parcel.status")))?;

    let parcel = Parcel {
        number,
        client: row.get("client")?,
        status,
        address: row.get("address")?,
        created_at: row.get("created_at")?,
    };
    parcel
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("{err} in parcel.created_at")))?;
    Ok(parcel)
}
