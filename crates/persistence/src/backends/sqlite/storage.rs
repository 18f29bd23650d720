//! CourseStorage and StudentStorage implementations for SQLite.

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};

use crate::core::{CourseStorage, StudentStorage};
use crate::error::{BackendError, ResourceError, StorageError, StorageResult};
use crate::types::{Course, CourseChanges, NewCourse, NewStudent, Student, required_text};

use super::SqliteBackend;

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message,
        source: None,
    })
}

fn fetch_course(conn: &Connection, id: i64) -> StorageResult<Option<Course>> {
    conn.query_row(
        "SELECT id, name FROM courses WHERE id = ?1",
        params![id],
        |row| Ok(Course::new(row.get(0)?, row.get::<_, String>(1)?)),
    )
    .optional()
    .map_err(|e| internal_error(format!("Failed to read course: {}", e)))
}

fn fetch_student(conn: &Connection, id: i64) -> StorageResult<Option<Student>> {
    conn.query_row(
        "SELECT id, name, birth_date FROM students WHERE id = ?1",
        params![id],
        |row| {
            Ok(Student {
                id: row.get(0)?,
                name: row.get(1)?,
                birth_date: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(|e| internal_error(format!("Failed to read student: {}", e)))
}

#[async_trait]
impl CourseStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn list_courses(&self) -> StorageResult<Vec<Course>> {
        let conn = self.get_connection()?;

        let mut stmt = conn
            .prepare("SELECT id, name FROM courses ORDER BY id ASC")
            .map_err(|e| internal_error(format!("Failed to prepare query: {}", e)))?;

        let courses = stmt
            .query_map([], |row| Ok(Course::new(row.get(0)?, row.get::<_, String>(1)?)))
            .map_err(|e| internal_error(format!("Failed to list courses: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| internal_error(format!("Failed to read course row: {}", e)))?;

        Ok(courses)
    }

    async fn read_course(&self, id: i64) -> StorageResult<Option<Course>> {
        let conn = self.get_connection()?;
        fetch_course(&conn, id)
    }

    async fn create_course(&self, course: NewCourse) -> StorageResult<Course> {
        let name = required_text("name", &course.name)?;
        let conn = self.get_connection()?;

        conn.execute("INSERT INTO courses (name) VALUES (?1)", params![name])
            .map_err(|e| internal_error(format!("Failed to insert course: {}", e)))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(id, "Course inserted");

        Ok(Course::new(id, name))
    }

    async fn update_course(&self, id: i64, changes: CourseChanges) -> StorageResult<Course> {
        let changes = CourseChanges {
            name: changes
                .name
                .map(|name| required_text("name", &name))
                .transpose()?,
        };

        let conn = self.get_connection()?;

        let mut course =
            fetch_course(&conn, id)?.ok_or_else(|| ResourceError::course_not_found(id))?;

        if changes.is_empty() {
            return Ok(course);
        }

        changes.apply_to(&mut course);

        let affected = conn
            .execute(
                "UPDATE courses SET name = ?1 WHERE id = ?2",
                params![course.name, id],
            )
            .map_err(|e| internal_error(format!("Failed to update course: {}", e)))?;

        // The row can be deleted through another pooled connection after the read.
        if affected == 0 {
            return Err(ResourceError::course_not_found(id).into());
        }

        Ok(course)
    }

    async fn delete_course(&self, id: i64) -> StorageResult<()> {
        let conn = self.get_connection()?;

        let affected = conn
            .execute("DELETE FROM courses WHERE id = ?1", params![id])
            .map_err(|e| internal_error(format!("Failed to delete course: {}", e)))?;

        if affected == 0 {
            return Err(ResourceError::course_not_found(id).into());
        }

        tracing::debug!(id, "Course deleted");
        Ok(())
    }

    async fn count_courses(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM courses", [], |row| row.get(0))
            .map_err(|e| internal_error(format!("Failed to count courses: {}", e)))?;

        Ok(count as u64)
    }
}

#[async_trait]
impl StudentStorage for SqliteBackend {
    async fn create_student(&self, student: NewStudent) -> StorageResult<Student> {
        let name = required_text("name", &student.name)?;
        let conn = self.get_connection()?;

        conn.execute(
            "INSERT INTO students (name, birth_date) VALUES (?1, ?2)",
            params![name, student.birth_date],
        )
        .map_err(|e| internal_error(format!("Failed to insert student: {}", e)))?;

        Ok(Student {
            id: conn.last_insert_rowid(),
            name,
            birth_date: student.birth_date,
        })
    }

    async fn read_student(&self, id: i64) -> StorageResult<Option<Student>> {
        let conn = self.get_connection()?;
        fetch_student(&conn, id)
    }

    async fn list_students(&self) -> StorageResult<Vec<Student>> {
        let conn = self.get_connection()?;

        let mut stmt = conn
            .prepare("SELECT id, name, birth_date FROM students ORDER BY id ASC")
            .map_err(|e| internal_error(format!("Failed to prepare query: {}", e)))?;

        let students = stmt
            .query_map([], |row| {
                Ok(Student {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    birth_date: row.get(2)?,
                })
            })
            .map_err(|e| internal_error(format!("Failed to list students: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| internal_error(format!("Failed to read student row: {}", e)))?;

        Ok(students)
    }

    async fn count_students(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))
            .map_err(|e| internal_error(format!("Failed to count students: {}", e)))?;

        Ok(count as u64)
    }
}
