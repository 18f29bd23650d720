//! Record factories for REST API testing.
//!
//! Factories write straight to storage, bypassing the HTTP layer, and fill
//! every field the caller does not set with random data.

use campus_persistence::core::{CourseStorage, StudentStorage};
use campus_persistence::types::{Course, NewCourse, NewStudent, Student};
use chrono::NaiveDate;
use uuid::Uuid;

/// Returns a random name with the given prefix.
pub fn random_name(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Returns a random birth date between 1990 and 2009.
pub fn random_birth_date() -> NaiveDate {
    let bytes = *Uuid::new_v4().as_bytes();
    NaiveDate::from_ymd_opt(
        1990 + i32::from(bytes[0] % 20),
        1 + u32::from(bytes[1] % 12),
        1 + u32::from(bytes[2] % 28),
    )
    .expect("generated date is always valid")
}

/// Factory for course records.
///
/// # Example
///
/// ```rust,ignore
/// let courses = CourseFactory::new(&*backend).make_many(10).await;
/// assert_eq!(courses.len(), 10);
/// ```
pub struct CourseFactory<'a, S> {
    storage: &'a S,
    name: Option<String>,
}

impl<'a, S> CourseFactory<'a, S>
where
    S: CourseStorage,
{
    /// Creates a factory writing to `storage`.
    pub fn new(storage: &'a S) -> Self {
        Self {
            storage,
            name: None,
        }
    }

    /// Uses a fixed name instead of a random one.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Stores one course.
    pub async fn make(&self) -> Course {
        let name = self.name.clone().unwrap_or_else(|| random_name("course"));
        self.storage
            .create_course(NewCourse::new(name))
            .await
            .expect("Failed to seed course")
    }

    /// Stores `quantity` courses and returns them in creation order.
    pub async fn make_many(&self, quantity: usize) -> Vec<Course> {
        let mut courses = Vec::with_capacity(quantity);
        for _ in 0..quantity {
            courses.push(self.make().await);
        }
        courses
    }
}

/// Factory for student records.
pub struct StudentFactory<'a, S> {
    storage: &'a S,
    name: Option<String>,
    birth_date: Option<Option<NaiveDate>>,
}

impl<'a, S> StudentFactory<'a, S>
where
    S: StudentStorage,
{
    /// Creates a factory writing to `storage`.
    pub fn new(storage: &'a S) -> Self {
        Self {
            storage,
            name: None,
            birth_date: None,
        }
    }

    /// Uses a fixed name instead of a random one.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Uses a fixed birth date; `None` stores the student without one.
    pub fn with_birth_date(mut self, birth_date: Option<NaiveDate>) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Stores one student.
    pub async fn make(&self) -> Student {
        let mut student =
            NewStudent::new(self.name.clone().unwrap_or_else(|| random_name("student")));
        if let Some(birth_date) = self.birth_date.unwrap_or_else(|| Some(random_birth_date())) {
            student = student.with_birth_date(birth_date);
        }

        self.storage
            .create_student(student)
            .await
            .expect("Failed to seed student")
    }

    /// Stores `quantity` students and returns them in creation order.
    pub async fn make_many(&self, quantity: usize) -> Vec<Student> {
        let mut students = Vec::with_capacity(quantity);
        for _ in 0..quantity {
            students.push(self.make().await);
        }
        students
    }
}
