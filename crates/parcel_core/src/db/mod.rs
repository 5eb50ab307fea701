//! SQLite connection bootstrap.
//!
//! Callers that already own a connection with a `parcel` table can skip this
//! module and hand it straight to the repository.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{ensure_schema, open_db, open_db_in_memory, open_db_with_config};

pub type DbResult<T> = Result<T, DbError>;

/// Storage failure surfaced unchanged from SQLite.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
