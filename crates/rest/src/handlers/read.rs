//! Retrieve handler.
//!
//! `GET /api/v1/courses/{id}/`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use campus_persistence::core::CourseStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::CourseId;
use crate::state::AppState;

/// Handler for retrieving a single course.
///
/// # Response
///
/// - `200 OK` - The course
/// - `404 Not Found` - No course has this id, or the id is not an integer
///
/// # Example
///
/// ```http
/// GET /api/v1/courses/7/ HTTP/1.1
/// Host: campus.example.com
/// ```
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    CourseId(id): CourseId,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!(id, "Processing read request");

    let course = state
        .storage()
        .read_course(id)
        .await?
        .ok_or_else(|| RestError::course_not_found(id))?;

    Ok(Json(course).into_response())
}
