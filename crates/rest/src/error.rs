//! Error types for the course API.
//!
//! This module defines all error types used throughout the REST API layer,
//! with automatic conversion to JSON error bodies.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer are automatically mapped to
//! appropriate HTTP status codes and bodies:
//!
//! | Error | HTTP Status | Body |
//! |-------|-------------|------|
//! | NotFound | 404 | `{"detail": "Not found."}` |
//! | Validation | 400 | `{"<field>": ["<message>"]}` |
//! | BadRequest | 400 | `{"detail": "<message>"}` |
//! | UnsupportedMediaType | 415 | `{"detail": "<message>"}` |
//! | InternalError | 500 | `{"detail": "<message>"}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_persistence::error::{BackendError, ResourceError, StorageError, ValidationError};
use std::fmt;

/// Message used for a required field that is absent from the body.
pub const FIELD_REQUIRED: &str = "This field is required.";

/// Message used for a required field that is present but blank.
pub const FIELD_BLANK: &str = "This field may not be blank.";

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Record not found (HTTP 404).
    NotFound {
        /// The record kind (e.g., "course").
        resource: String,
        /// The requested identifier, as it appeared in the URL.
        id: String,
    },

    /// A single field failed validation (HTTP 400).
    Validation {
        /// The offending field.
        field: String,
        /// Error message.
        message: String,
    },

    /// Bad request - malformed body (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Unsupported media type (HTTP 415).
    UnsupportedMediaType {
        /// The unsupported content type.
        content_type: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Shorthand for a missing course.
    pub fn course_not_found(id: impl ToString) -> Self {
        RestError::NotFound {
            resource: "course".to_string(),
            id: id.to_string(),
        }
    }

    /// Shorthand for an absent required field.
    pub fn field_required(field: &str) -> Self {
        RestError::Validation {
            field: field.to_string(),
            message: FIELD_REQUIRED.to_string(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::Validation { .. } | RestError::BadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { resource, id } => {
                write!(f, "Not found: {} {}", resource, id)
            }
            RestError::Validation { field, message } => {
                write!(f, "Invalid field '{}': {}", field, message)
            }
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::UnsupportedMediaType { content_type } => {
                write!(f, "Unsupported media type: {}", content_type)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            RestError::NotFound { .. } => error_detail("Not found."),
            RestError::Validation { field, message } => field_errors(&field, vec![message]),
            RestError::BadRequest { message } => error_detail(&message),
            RestError::UnsupportedMediaType { content_type } => error_detail(&format!(
                "Unsupported media type \"{}\" in request.",
                content_type
            )),
            RestError::InternalError { message } => {
                tracing::error!(error = %message, "Request failed");
                error_detail(&message)
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Creates an error body with a single `detail` message.
pub fn error_detail(detail: &str) -> serde_json::Value {
    serde_json::json!({ "detail": detail })
}

/// Creates an error body listing the messages for one field.
pub fn field_errors(field: &str, messages: Vec<String>) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    body.insert(field.to_string(), serde_json::json!(messages));
    serde_json::Value::Object(body)
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { resource, id } => RestError::NotFound {
                resource,
                id: id.to_string(),
            },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingRequiredField { field } => RestError::Validation {
                field,
                message: FIELD_BLANK.to_string(),
            },
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RestError::course_not_found(123);
        assert_eq!(err.to_string(), "Not found: course 123");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_display() {
        let err = RestError::field_required("name");
        assert!(err.to_string().contains("name"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_detail() {
        let body = error_detail("Not found.");
        assert_eq!(body, serde_json::json!({"detail": "Not found."}));
    }

    #[test]
    fn test_field_errors() {
        let body = field_errors("name", vec![FIELD_REQUIRED.to_string()]);
        assert_eq!(body["name"][0], "This field is required.");
    }

    #[test]
    fn test_from_storage_not_found() {
        let err: RestError = StorageError::Resource(ResourceError::course_not_found(9)).into();
        match err {
            RestError::NotFound { resource, id } => {
                assert_eq!(resource, "course");
                assert_eq!(id, "9");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_from_storage_validation() {
        let err: RestError = StorageError::Validation(ValidationError::MissingRequiredField {
            field: "name".to_string(),
        })
        .into();
        assert!(matches!(
            err,
            RestError::Validation { ref field, ref message }
                if field == "name" && message == FIELD_BLANK
        ));
    }

    #[test]
    fn test_from_backend_error() {
        let err: RestError = StorageError::Backend(BackendError::PoolExhausted {
            backend_name: "sqlite".to_string(),
        })
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
