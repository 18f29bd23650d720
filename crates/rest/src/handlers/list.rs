//! List handler.
//!
//! `GET /api/v1/courses/`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use campus_persistence::core::CourseStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for listing courses.
///
/// Returns every stored course in insertion order. There is no pagination.
///
/// # Response
///
/// - `200 OK` - JSON array of `{"id", "name"}` objects
pub async fn list_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!("Processing list request");

    let courses = state.storage().list_courses().await?;

    debug!(count = courses.len(), "Courses listed");

    Ok(Json(courses).into_response())
}
