//! Core record storage traits.
//!
//! [`CourseStorage`] provides the CRUD operations behind the course
//! endpoint. [`StudentStorage`] persists student records, which are only
//! written as seed data.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Course, CourseChanges, NewCourse, NewStudent, Student};

/// Storage for course records.
///
/// # Ordering
///
/// [`list_courses`](CourseStorage::list_courses) returns records in
/// insertion order, which is also ascending id order because ids come from a
/// monotonic sequence.
///
/// # Example
///
/// ```ignore
/// use campus_persistence::core::CourseStorage;
/// use campus_persistence::types::{CourseChanges, NewCourse};
///
/// async fn example<S: CourseStorage>(storage: &S) -> StorageResult<()> {
///     let course = storage.create_course(NewCourse::new("Databases")).await?;
///
///     let updated = storage
///         .update_course(course.id, CourseChanges::name("Databases II"))
///         .await?;
///     assert_eq!(updated.id, course.id);
///
///     storage.delete_course(course.id).await?;
///     assert!(storage.read_course(course.id).await?.is_none());
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait CourseStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns every stored course in insertion order.
    async fn list_courses(&self) -> StorageResult<Vec<Course>>;

    /// Reads a course by id, or `None` when it does not exist.
    async fn read_course(&self, id: i64) -> StorageResult<Option<Course>>;

    /// Stores a new course and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation` - If the name is blank
    async fn create_course(&self, course: NewCourse) -> StorageResult<Course>;

    /// Applies `changes` to an existing course and returns the result.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If the course doesn't exist
    /// * `StorageError::Validation` - If a replacement name is blank
    async fn update_course(&self, id: i64, changes: CourseChanges) -> StorageResult<Course>;

    /// Permanently removes a course.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If the course doesn't exist
    async fn delete_course(&self, id: i64) -> StorageResult<()>;

    /// Counts the stored courses.
    async fn count_courses(&self) -> StorageResult<u64>;

    /// Checks whether a course exists.
    async fn course_exists(&self, id: i64) -> StorageResult<bool> {
        Ok(self.read_course(id).await?.is_some())
    }
}

/// Storage for student records.
#[async_trait]
pub trait StudentStorage: Send + Sync {
    /// Stores a new student and returns it with its assigned id.
    async fn create_student(&self, student: NewStudent) -> StorageResult<Student>;

    /// Reads a student by id.
    async fn read_student(&self, id: i64) -> StorageResult<Option<Student>>;

    /// Returns every stored student in insertion order.
    async fn list_students(&self) -> StorageResult<Vec<Student>>;

    /// Counts the stored students.
    async fn count_students(&self) -> StorageResult<u64>;
}
