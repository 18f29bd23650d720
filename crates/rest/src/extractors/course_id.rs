//! Course id extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::RestError;

/// Axum extractor for the `{id}` path segment of a course URL.
///
/// A segment that is not an integer cannot name a stored course, so it is
/// rejected as not found rather than as a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseId(pub i64);

impl CourseId {
    /// Parses a raw path segment.
    pub fn parse(segment: &str) -> Result<Self, RestError> {
        segment
            .parse::<i64>()
            .map(CourseId)
            .map_err(|_| RestError::course_not_found(segment))
    }

    /// Returns the numeric id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl<S> FromRequestParts<S> for CourseId
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::InternalError {
                message: format!("Missing course id: {}", e),
            })?;

        CourseId::parse(&segment)
    }
}
