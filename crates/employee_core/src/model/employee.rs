//! Employee domain model.
//!
//! # Responsibility
//! - Define the record shape stored in the employee table.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never changes afterwards.
//! - Field values are carried verbatim; this layer does not validate
//!   `name`, `email` or `role` contents.

use serde::{Deserialize, Serialize};

/// Primary key of an employee row.
///
/// Matches SQLite `INTEGER PRIMARY KEY`, which is a signed 64-bit rowid.
pub type EmployeeId = i64;

/// One employee row, freshly materialized from the store.
///
/// Callers own returned values exclusively; the repository keeps no copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    /// Stored as-is, format is not checked.
    pub email: String,
    pub role: String,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}
