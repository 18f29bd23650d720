//! Record types stored by the persistence layer.
//!
//! - [`Course`] - a course offered by the campus, exposed over HTTP
//! - [`Student`] - a student record, used as seed data

mod course;
mod student;

pub use course::{Course, CourseChanges, NewCourse};
pub use student::{NewStudent, Student};

use crate::error::ValidationError;

/// Trims a text field and rejects it when nothing is left.
pub fn required_text(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingRequiredField {
            field: field.to_string(),
        });
    }
    Ok(trimmed.to_string())
}
