//! SQLite backend integration tests.
//!
//! These tests drive the backend through its public traits only.

use campus_persistence::backends::sqlite::{SqliteBackend, SqliteBackendConfig};
use campus_persistence::core::{Backend, CourseStorage, StudentStorage};
use campus_persistence::error::{ResourceError, StorageError};
use campus_persistence::types::{CourseChanges, NewCourse, NewStudent};

fn create_backend() -> SqliteBackend {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to initialize schema");
    backend
}

// ============================================================================
// Course lifecycle
// ============================================================================

#[tokio::test]
async fn test_course_lifecycle() {
    let backend = create_backend();

    let created = backend
        .create_course(NewCourse::new("Distributed Systems"))
        .await
        .unwrap();
    assert!(created.id > 0);

    let updated = backend
        .update_course(created.id, CourseChanges::name("Distributed Systems II"))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);

    let listed = backend.list_courses().await.unwrap();
    assert_eq!(listed, vec![updated.clone()]);

    backend.delete_course(created.id).await.unwrap();
    assert!(backend.read_course(created.id).await.unwrap().is_none());
    assert_eq!(backend.count_courses().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_unknown_course() {
    let backend = create_backend();

    let result = backend.delete_course(12345).await;
    match result {
        Err(StorageError::Resource(ResourceError::NotFound { resource, id })) => {
            assert_eq!(resource, "course");
            assert_eq!(id, 12345);
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_many_courses() {
    let backend = create_backend();

    let mut created = Vec::new();
    for i in 0..25 {
        created.push(
            backend
                .create_course(NewCourse::new(format!("Course {}", i)))
                .await
                .unwrap(),
        );
    }

    assert_eq!(backend.list_courses().await.unwrap(), created);
}

// ============================================================================
// File-backed databases
// ============================================================================

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("campus.db");

    let course_id = {
        let backend = SqliteBackend::open(&path).unwrap();
        backend.initialize().await.unwrap();
        backend
            .create_student(NewStudent::new("Grace"))
            .await
            .unwrap();
        backend
            .create_course(NewCourse::new("Persistence"))
            .await
            .unwrap()
            .id
    };

    let reopened = SqliteBackend::with_config(
        &path,
        SqliteBackendConfig {
            max_connections: 2,
            ..Default::default()
        },
    )
    .unwrap();
    reopened.init_schema().unwrap();

    let course = reopened.read_course(course_id).await.unwrap().unwrap();
    assert_eq!(course.name, "Persistence");
    assert_eq!(reopened.count_students().await.unwrap(), 1);
    assert!(reopened.health_check().await.is_ok());
}
