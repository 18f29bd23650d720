//! Full update handler.
//!
//! `PUT /api/v1/courses/{id}/`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use campus_persistence::core::CourseStorage;
use campus_persistence::types::CourseChanges;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::{CourseBody, CourseId};
use crate::state::AppState;

/// Handler for replacing a course.
///
/// Unlike [`patch_handler`](super::patch_handler), every writable field is
/// required.
///
/// # Response
///
/// - `200 OK` - The updated course
/// - `400 Bad Request` - `name` is missing or blank
/// - `404 Not Found` - No course has this id
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    CourseId(id): CourseId,
    CourseBody(fields): CourseBody,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!(id, name = ?fields.name, "Processing update request");

    // Existence first, so an unknown id is reported ahead of a bad body.
    if !state.storage().course_exists(id).await? {
        return Err(RestError::course_not_found(id));
    }

    let changes = CourseChanges::name(fields.require_name()?);
    let course = state.storage().update_course(id, changes).await?;

    debug!(id, "Course updated");

    Ok(Json(course).into_response())
}
