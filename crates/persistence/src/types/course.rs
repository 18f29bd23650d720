//! Course record types.

use serde::{Deserialize, Serialize};

/// A persisted course.
///
/// The `id` is assigned by the backend on insert and never changes or gets
/// reused afterwards.
///
/// # Examples
///
/// ```
/// use campus_persistence::types::Course;
///
/// let course = Course::new(1, "Algorithms");
/// assert_eq!(
///     serde_json::to_value(&course).unwrap(),
///     serde_json::json!({"id": 1, "name": "Algorithms"})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Server-assigned identifier.
    pub id: i64,

    /// Display name.
    pub name: String,
}

impl Course {
    /// Creates a course value with the given id and name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Values for a course that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    /// Display name. Required, surrounding whitespace is dropped.
    pub name: String,
}

impl NewCourse {
    /// Creates a new course payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A set of field changes applied to an existing course.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseChanges {
    /// Replacement name.
    #[serde(default)]
    pub name: Option<String>,
}

impl CourseChanges {
    /// Changes that only replace the name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    /// Applies the changes to a course in place.
    pub fn apply_to(&self, course: &mut Course) {
        if let Some(name) = &self.name {
            course.name = name.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_apply() {
        let mut course = Course::new(3, "Old");
        CourseChanges::name("New").apply_to(&mut course);
        assert_eq!(course, Course::new(3, "New"));
    }

    #[test]
    fn test_empty_changes_keep_course() {
        let mut course = Course::new(3, "Old");
        let changes = CourseChanges::default();
        assert!(changes.is_empty());
        changes.apply_to(&mut course);
        assert_eq!(course.name, "Old");
    }

    #[test]
    fn test_changes_deserialize_without_name() {
        let changes: CourseChanges = serde_json::from_str("{}").unwrap();
        assert!(changes.is_empty());
    }
}
