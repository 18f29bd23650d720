//! Delete handler.
//!
//! `DELETE /api/v1/courses/{id}/`

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_persistence::core::CourseStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::CourseId;
use crate::state::AppState;

/// Handler for deleting a course.
///
/// The row is removed permanently and its id is never handed out again.
///
/// # Response
///
/// - `204 No Content` - Course deleted
/// - `404 Not Found` - No course has this id
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    CourseId(id): CourseId,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!(id, "Processing delete request");

    state.storage().delete_course(id).await?;

    debug!(id, "Course deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
