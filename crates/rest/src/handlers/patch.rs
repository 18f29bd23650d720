//! Partial update handler.
//!
//! `PATCH /api/v1/courses/{id}/`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use campus_persistence::core::CourseStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{CourseBody, CourseId};
use crate::state::AppState;

/// Handler for partially updating a course.
///
/// Only the fields present in the body change. A body without `name`
/// returns the course as stored.
///
/// # Response
///
/// - `200 OK` - The updated course
/// - `400 Bad Request` - `name` is blank
/// - `404 Not Found` - No course has this id
///
/// # Example
///
/// ```http
/// PATCH /api/v1/courses/7/ HTTP/1.1
/// Host: campus.example.com
/// Content-Type: application/x-www-form-urlencoded
///
/// name=Calculus+II
/// ```
pub async fn patch_handler<S>(
    State(state): State<AppState<S>>,
    CourseId(id): CourseId,
    CourseBody(fields): CourseBody,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!(id, name = ?fields.name, "Processing patch request");

    let course = state
        .storage()
        .update_course(id, fields.into_changes())
        .await?;

    debug!(id, "Course patched");

    Ok(Json(course).into_response())
}
