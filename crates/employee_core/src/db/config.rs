//! Connection settings supplied by the caller.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DbLocation {
    #[default]
    Memory,
    File(PathBuf),
}

/// Explicit connection configuration.
///
/// SQLite needs no credentials; everything required to open a handle is
/// carried here rather than hardcoded in the open path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    pub location: DbLocation,
    /// How long a statement waits on a locked database before failing.
    pub busy_timeout_ms: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            location: DbLocation::Memory,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl DbConfig {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: DbLocation::File(path.into()),
            ..Self::default()
        }
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    pub(crate) fn mode(&self) -> &'static str {
        match self.location {
            DbLocation::Memory => "memory",
            DbLocation::File(_) => "file",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DbConfig, DbLocation};
    use std::path::PathBuf;

    #[test]
    fn default_is_in_memory_with_five_second_timeout() {
        let config = DbConfig::default();
        assert_eq!(config.location, DbLocation::Memory);
        assert_eq!(config.busy_timeout().as_millis(), 5_000);
        assert_eq!(config.mode(), "memory");
    }

    #[test]
    fn file_constructor_keeps_default_timeout() {
        let config = DbConfig::file("/tmp/employees.db");
        assert_eq!(
            config.location,
            DbLocation::File(PathBuf::from("/tmp/employees.db"))
        );
        assert_eq!(config.busy_timeout_ms, 5_000);
        assert_eq!(config.mode(), "file");
    }
}
