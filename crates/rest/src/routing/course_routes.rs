//! Course route configuration.
//!
//! Defines all routes for the course API.

use axum::{Router, routing::get};
use campus_persistence::core::{Backend, CourseStorage};

use crate::handlers;
use crate::state::AppState;

/// Collection path of the course endpoint.
pub const COURSES_PATH: &str = "/api/v1/courses/";

/// Item path of the course endpoint.
pub const COURSE_PATH: &str = "/api/v1/courses/{id}/";

/// Creates all course API routes.
///
/// # Routes
///
/// ## Operational
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
///
/// ## Collection
/// - `GET /api/v1/courses/` - List
/// - `POST /api/v1/courses/` - Create
///
/// ## Item
/// - `GET /api/v1/courses/{id}/` - Retrieve
/// - `PUT /api/v1/courses/{id}/` - Replace
/// - `PATCH /api/v1/courses/{id}/` - Partial update
/// - `DELETE /api/v1/courses/{id}/` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: CourseStorage + Backend + Send + Sync + 'static,
{
    Router::new()
        // Operational routes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        // Collection routes
        .route(
            COURSES_PATH,
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        // Item routes
        .route(
            COURSE_PATH,
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .patch(handlers::patch_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        // State
        .with_state(state)
}
