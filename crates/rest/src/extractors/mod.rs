//! Axum extractors for course requests.
//!
//! - [`CourseId`] - Parse the `{id}` path segment
//! - [`CourseBody`] - Read course fields from a JSON or form-encoded body

mod course_body;
mod course_id;

pub use course_body::{CourseBody, CourseBodyRejection, CourseFields};
pub use course_id::CourseId;
