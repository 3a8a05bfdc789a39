//! On-demand provisioning of employee-shaped tables.
//!
//! # Responsibility
//! - Create tables with the employee column layout under a caller-chosen name.
//!
//! # Invariants
//! - Table names are interpolated into DDL, so they must pass
//!   `is_valid_table_name` first. Identifiers cannot be bound as parameters.
//! - Provisioning is idempotent (`CREATE TABLE IF NOT EXISTS`).

use super::{DbError, DbResult};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::Connection;

static TABLE_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,63}$").expect("table name pattern is valid")
});

/// Returns whether `name` is safe to splice into DDL as a table identifier.
pub fn is_valid_table_name(name: &str) -> bool {
    TABLE_NAME_PATTERN.is_match(name)
}

/// Creates an employee-shaped table named `table_name` when it is missing.
///
/// # Errors
/// - `DbError::InvalidTableName` when the name is not a plain identifier.
/// - `DbError::Sqlite` when the DDL fails.
pub fn create_employee_table(conn: &Connection, table_name: &str) -> DbResult<()> {
    if !is_valid_table_name(table_name) {
        return Err(DbError::InvalidTableName(table_name.to_string()));
    }

    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {table_name} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            Name TEXT NOT NULL,
            Email TEXT NOT NULL,
            role TEXT NOT NULL
        );"
    ))?;

    info!("event=table_provision module=db status=ok table={table_name}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::is_valid_table_name;

    #[test]
    fn accepts_plain_identifiers() {
        assert!(is_valid_table_name("Employee_Details"));
        assert!(is_valid_table_name("_staff2"));
    }

    #[test]
    fn rejects_injection_and_odd_names() {
        assert!(!is_valid_table_name(""));
        assert!(!is_valid_table_name("2fast"));
        assert!(!is_valid_table_name("staff; DROP TABLE x"));
        assert!(!is_valid_table_name("staff-members"));
        assert!(!is_valid_table_name(&"a".repeat(65)));
    }
}
