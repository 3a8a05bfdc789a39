use employee_core::db::schema::create_employee_table;
use employee_core::db::{open_db, open_db_in_memory, open_with_config, DbConfig, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_provisions_employee_table() {
    let conn = open_db_in_memory().unwrap();

    assert_table_exists(&conn, "Employee_Details");
    assert_eq!(user_version(&conn), 0);
}

#[test]
fn opening_same_database_twice_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute(
            "INSERT INTO Employee_Details (Name, Email, role) VALUES ('sukant', 'sukant@zopsmart.com', 'sde');",
            [],
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(employee_count(&conn_second), 1);
}

#[test]
fn opening_existing_database_leaves_user_version_and_table_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("existing.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE Employee_Details (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            Name TEXT NOT NULL,
            Email TEXT NOT NULL,
            role TEXT NOT NULL
        );
        INSERT INTO Employee_Details (Name, Email, role) VALUES ('Jane', 'j@j.com', 'SDE-II');
        PRAGMA user_version = 5;",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();

    assert_eq!(user_version(&conn), 5);
    assert_eq!(employee_count(&conn), 1);
}

#[test]
fn open_with_config_uses_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("configured.db");
    let config = DbConfig {
        busy_timeout_ms: 250,
        ..DbConfig::file(&path)
    };

    let conn = open_with_config(&config).unwrap();

    assert_table_exists(&conn, "Employee_Details");
    assert!(path.exists());
}

#[test]
fn config_deserializes_from_serde_source() {
    let config: DbConfig =
        serde_json::from_str(r#"{"location":{"file":"/var/lib/employees.db"}}"#).unwrap();

    assert_eq!(config, DbConfig::file("/var/lib/employees.db"));
    let memory: DbConfig = serde_json::from_str(r#"{"location":"memory"}"#).unwrap();
    assert_eq!(memory, DbConfig::default());
}

#[test]
fn create_employee_table_provisions_named_table_idempotently() {
    let conn = Connection::open_in_memory().unwrap();

    create_employee_table(&conn, "Contractors").unwrap();
    create_employee_table(&conn, "Contractors").unwrap();

    assert_table_exists(&conn, "Contractors");
    conn.execute(
        "INSERT INTO Contractors (Name, Email, role) VALUES ('Jane', 'j@j.com', 'SDE-II');",
        [],
    )
    .unwrap();
}

#[test]
fn create_employee_table_rejects_unsafe_names() {
    let conn = Connection::open_in_memory().unwrap();

    let err = create_employee_table(&conn, "x; DROP TABLE y").unwrap_err();
    assert!(matches!(err, DbError::InvalidTableName(name) if name == "x; DROP TABLE y"));
}

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn employee_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM Employee_Details;", [], |row| {
        row.get(0)
    })
    .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
