//! Create handler.
//!
//! `POST /api/v1/courses/`

use axum::{
    Json,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use campus_persistence::core::CourseStorage;
use tracing::{debug, warn};

use crate::error::RestResult;
use crate::extractors::CourseBody;
use crate::state::AppState;

/// Handler for creating a course.
///
/// The server assigns the id; an `id` in the body is ignored.
///
/// # Headers
///
/// - `Content-Type` - `application/json`, `application/x-www-form-urlencoded`
///   or `multipart/form-data`
///
/// # Response
///
/// - `201 Created` - The stored course, with a `Location` header
/// - `400 Bad Request` - `name` is missing or blank
/// - `415 Unsupported Media Type` - Any other body format
///
/// # Example
///
/// ```http
/// POST /api/v1/courses/ HTTP/1.1
/// Host: campus.example.com
/// Content-Type: application/json
///
/// {"name": "Linear Algebra"}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    CourseBody(fields): CourseBody,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!(name = ?fields.name, "Processing create request");

    let new_course = fields.into_new_course()?;
    let course = state.storage().create_course(new_course).await?;

    debug!(id = course.id, "Course created");

    let mut response = (StatusCode::CREATED, Json(&course)).into_response();
    let location = state.course_url(course.id);
    match HeaderValue::from_str(&location) {
        Ok(value) => {
            response.headers_mut().insert(header::LOCATION, value);
        }
        Err(e) => warn!(%location, error = %e, "Course URL is not a valid Location header"),
    }

    Ok(response)
}
