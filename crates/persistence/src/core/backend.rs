//! Backend abstraction for database drivers.
//!
//! The [`Backend`] trait covers the lifecycle concerns every driver shares:
//! identifying itself, preparing its schema, and answering health probes.

use async_trait::async_trait;

use crate::error::BackendError;

/// Identifies the type of database backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// SQLite database (file-based or in-memory).
    Sqlite,
    /// Custom or unknown backend.
    Custom(&'static str),
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Sqlite => write!(f, "sqlite"),
            BackendKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// Lifecycle operations implemented by every storage driver.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Returns the kind of backend.
    fn kind(&self) -> BackendKind;

    /// Returns a short, human-readable name for logs and health output.
    fn name(&self) -> &'static str;

    /// Verifies that the backend can serve queries.
    async fn health_check(&self) -> Result<(), BackendError>;

    /// Creates or migrates the schema. Must be idempotent.
    async fn initialize(&self) -> Result<(), BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_display() {
        assert_eq!(BackendKind::Sqlite.to_string(), "sqlite");
        assert_eq!(BackendKind::Custom("custom-db").to_string(), "custom-db");
    }
}
