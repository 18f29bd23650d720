//! Error types for the persistence layer.
//!
//! Errors are grouped by category: record state, validation of incoming
//! values, and failures inside the storage backend itself.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Record state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to record state.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested record was not found.
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: i64 },
}

impl ResourceError {
    /// Shorthand for a missing course.
    pub fn course_not_found(id: i64) -> Self {
        ResourceError::NotFound {
            resource: "course".to_string(),
            id,
        }
    }
}

/// Errors related to the values being written.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field was absent or blank.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: String },
}

impl ValidationError {
    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingRequiredField { field } => field,
        }
    }
}

/// Errors raised by the storage backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Connection pool exhausted.
    #[error("connection pool exhausted for {backend_name}")]
    PoolExhausted { backend_name: String },

    /// Schema migration error.
    #[error("schema migration failed: {message}")]
    MigrationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Backend(BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for StorageError {
    fn from(err: r2d2::Error) -> Self {
        tracing::warn!(error = %err, "Timed out waiting for a pooled connection");
        StorageError::Backend(BackendError::PoolExhausted {
            backend_name: "sqlite".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Resource(ResourceError::course_not_found(7));
        assert_eq!(err.to_string(), "course not found: 7");
    }

    #[test]
    fn test_validation_error_field() {
        let err = ValidationError::MissingRequiredField {
            field: "name".to_string(),
        };
        assert_eq!(err.field(), "name");
        assert_eq!(err.to_string(), "missing required field: name");
    }

    #[test]
    fn test_storage_error_from_validation() {
        let err: StorageError = ValidationError::MissingRequiredField {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(err, StorageError::Validation(_)));
    }

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::PoolExhausted {
            backend_name: "sqlite".to_string(),
        };
        assert_eq!(err.to_string(), "connection pool exhausted for sqlite");
    }
}
