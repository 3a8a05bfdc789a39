//! SQLite connection and schema provisioning.
//!
//! # Responsibility
//! - Open and configure SQLite connections for callers of the repository.
//! - Provision employee-shaped tables with `CREATE TABLE IF NOT EXISTS`.
//!
//! # Invariants
//! - Schema is never migrated; existing tables are used as found.
//! - Repository code only borrows connections produced here; it never opens
//!   or closes one itself.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod config;
mod open;
pub mod schema;

pub use config::{DbConfig, DbLocation};
pub use open::{open_db, open_db_in_memory, open_with_config};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    InvalidTableName(String),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::InvalidTableName(name) => write!(f, "invalid table name `{name}`"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::InvalidTableName(_) => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
