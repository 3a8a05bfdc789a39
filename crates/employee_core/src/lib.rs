//! Typed data access for employee records stored in SQLite.
//!
//! Callers provision a connection through [`db`], then run key-based CRUD
//! through [`SqliteEmployeeRepository`] or the [`EmployeeService`] wrapper.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{DbConfig, DbError, DbLocation, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeId};
pub use repo::employee_repo::{
    EmployeeRepository, RepoError, RepoErrorKind, RepoResult, SqliteEmployeeRepository,
    EMPLOYEE_TABLE,
};
pub use service::employee_service::EmployeeService;

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
