//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create / read / update / delete by primary key over the
//!   canonical `Employee_Details` table.
//! - Classify driver failures into `RepoError` kinds.
//!
//! # Invariants
//! - The repository borrows a caller-provisioned connection and holds no
//!   other state; it never caches rows.
//! - `read_by_id` yields either a fully populated `Employee` or an error,
//!   never a partial record.
//! - Update and delete succeed when zero rows match. Success means the
//!   statement ran without error, not that a row changed.

use crate::model::employee::{Employee, EmployeeId};
use log::{debug, warn};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

// Literal form of the table name so `concat!` can build the SQL below.
macro_rules! employee_table {
    () => {
        "Employee_Details"
    };
}

/// Table every repository statement targets.
pub const EMPLOYEE_TABLE: &str = employee_table!();

const INSERT_SQL: &str = concat!(
    "INSERT INTO ",
    employee_table!(),
    " (Name, Email, role) VALUES (?1, ?2, ?3);"
);
const SELECT_BY_ID_SQL: &str = concat!(
    "SELECT id, Name, Email, role FROM ",
    employee_table!(),
    " WHERE id = ?1;"
);
const UPDATE_BY_ID_SQL: &str = concat!(
    "UPDATE ",
    employee_table!(),
    " SET Name = ?1, Email = ?2, role = ?3 WHERE id = ?4;"
);
const DELETE_BY_ID_SQL: &str = concat!("DELETE FROM ", employee_table!(), " WHERE id = ?1;");

pub type RepoResult<T> = Result<T, RepoError>;

/// Coarse classification of a `RepoError`, for callers that only branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoErrorKind {
    Prepare,
    Execute,
    NotFound,
}

/// Error returned by employee repository operations.
#[derive(Debug)]
pub enum RepoError {
    /// SQL could not be compiled against the live schema, usually because the
    /// table or a column is missing or misnamed.
    Prepare(rusqlite::Error),
    /// The bound statement failed while running, or a row failed to decode.
    Execute(rusqlite::Error),
    /// A key lookup matched no row.
    NotFound(EmployeeId),
}

impl RepoError {
    pub fn kind(&self) -> RepoErrorKind {
        match self {
            Self::Prepare(_) => RepoErrorKind::Prepare,
            Self::Execute(_) => RepoErrorKind::Execute,
            Self::NotFound(_) => RepoErrorKind::NotFound,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prepare(err) => write!(f, "wrong table name: {err}"),
            Self::Execute(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Prepare(err) | Self::Execute(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

/// Key-based CRUD contract for employee records.
pub trait EmployeeRepository {
    /// Inserts one employee. The store assigns the id, which is not returned.
    ///
    /// `table_name` is accepted for callers that name their target, but the
    /// statement always runs against [`EMPLOYEE_TABLE`].
    fn create(&self, table_name: &str, name: &str, email: &str, role: &str) -> RepoResult<()>;
    fn read_by_id(&self, id: EmployeeId) -> RepoResult<Employee>;
    /// Replaces `name`, `email` and `role` of the row with `id`.
    fn update_by_id(&self, id: EmployeeId, name: &str, email: &str, role: &str)
        -> RepoResult<()>;
    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn create(&self, table_name: &str, name: &str, email: &str, role: &str) -> RepoResult<()> {
        if table_name != EMPLOYEE_TABLE {
            warn!(
                "event=employee_create module=repo status=table_override requested_table={table_name} table={EMPLOYEE_TABLE}"
            );
        }

        let mut stmt = self.conn.prepare(INSERT_SQL).map_err(RepoError::Prepare)?;
        stmt.execute(params![name, email, role])
            .map_err(RepoError::Execute)?;

        debug!(
            "event=employee_create module=repo status=ok id={}",
            self.conn.last_insert_rowid()
        );
        Ok(())
    }

    fn read_by_id(&self, id: EmployeeId) -> RepoResult<Employee> {
        let mut stmt = self
            .conn
            .prepare(SELECT_BY_ID_SQL)
            .map_err(RepoError::Prepare)?;

        stmt.query_row([id], parse_employee_row)
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => RepoError::NotFound(id),
                other => RepoError::Execute(other),
            })
    }

    fn update_by_id(
        &self,
        id: EmployeeId,
        name: &str,
        email: &str,
        role: &str,
    ) -> RepoResult<()> {
        let mut stmt = self
            .conn
            .prepare(UPDATE_BY_ID_SQL)
            .map_err(RepoError::Prepare)?;
        let changed = stmt
            .execute(params![name, email, role, id])
            .map_err(RepoError::Execute)?;

        debug!("event=employee_update module=repo status=ok id={id} rows_affected={changed}");
        Ok(())
    }

    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        let mut stmt = self
            .conn
            .prepare(DELETE_BY_ID_SQL)
            .map_err(RepoError::Prepare)?;
        let changed = stmt.execute([id]).map_err(RepoError::Execute)?;

        debug!("event=employee_delete module=repo status=ok id={id} rows_affected={changed}");
        Ok(())
    }
}

fn parse_employee_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        role: row.get(3)?,
    })
}
