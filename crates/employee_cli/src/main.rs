//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provision a database and run each employee operation once.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `employee_cli [DB_PATH]`. Without a path an in-memory database is
//! used. Set `EMPLOYEE_LOG_DIR` to an absolute path to enable file logging.

use employee_core::db::open_with_config;
use employee_core::{
    core_version, default_log_level, init_logging, DbConfig, EmployeeId, EmployeeRepository,
    RepoResult, SqliteEmployeeRepository, EMPLOYEE_TABLE,
};
use std::error::Error;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "EMPLOYEE_LOG_DIR";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("employee_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        init_logging(default_log_level(), &log_dir)?;
    }

    let config = match std::env::args().nth(1) {
        Some(path) => DbConfig::file(path),
        None => DbConfig::default(),
    };

    println!("employee_core version={}", core_version());
    let conn = open_with_config(&config)?;
    let repo = SqliteEmployeeRepository::new(&conn);

    repo.create(EMPLOYEE_TABLE, "sukant", "sukant@zopsmart.com", "sde")?;
    let id = conn.last_insert_rowid();
    print_read(&repo, id)?;

    repo.update_by_id(id, "sukant", "sukant@zopsmart.com", "sde-ii")?;
    print_read(&repo, id)?;

    repo.delete_by_id(id)?;
    match repo.read_by_id(id) {
        Err(err) if err.is_not_found() => println!("read id={id} -> {err}"),
        other => return Err(format!("expected not found after delete, got {other:?}").into()),
    }

    Ok(())
}

fn print_read(repo: &impl EmployeeRepository, id: EmployeeId) -> RepoResult<()> {
    let employee = repo.read_by_id(id)?;
    println!(
        "read id={} -> name={} email={} role={}",
        employee.id, employee.name, employee.email, employee.role
    );
    Ok(())
}
