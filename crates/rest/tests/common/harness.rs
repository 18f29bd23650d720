//! REST API test harness.
//!
//! Provides a test server over an in-memory SQLite backend, with direct
//! access to the backend for seeding fixtures.

use std::sync::Arc;

use axum_test::multipart::MultipartForm;
use axum_test::{TestResponse, TestServer};
use campus_persistence::backends::sqlite::SqliteBackend;
use campus_rest::{AppState, ServerConfig, routing};
use serde_json::Value;

use super::fixtures::{CourseFactory, StudentFactory};

/// Test harness for REST API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_read() {
///     let harness = RestTestHarness::new();
///
///     // Seed test data
///     let course = harness.courses().make().await;
///
///     // Make request
///     let response = harness.get(&harness.course_path(course.id)).await;
///
///     // Assert
///     response.assert_status_ok();
/// }
/// ```
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend shared with the server.
    pub backend: Arc<SqliteBackend>,

    /// Server configuration.
    pub config: ServerConfig,
}

impl RestTestHarness {
    /// Creates a harness with the testing configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::for_testing())
    }

    /// Creates a harness with a custom configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
        backend.init_schema().expect("Failed to init schema");
        let backend = Arc::new(backend);

        let state = AppState::new(Arc::clone(&backend), config.clone());
        let app = routing::create_routes(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            backend,
            config,
        }
    }

    /// Returns a course factory bound to the harness backend.
    pub fn courses(&self) -> CourseFactory<'_, SqliteBackend> {
        CourseFactory::new(&*self.backend)
    }

    /// Returns a student factory bound to the harness backend.
    pub fn students(&self) -> StudentFactory<'_, SqliteBackend> {
        StudentFactory::new(&*self.backend)
    }

    /// Returns the path of a single course.
    pub fn course_path(&self, id: impl std::fmt::Display) -> String {
        format!("/api/v1/courses/{}/", id)
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(path).await
    }

    /// Makes a POST request with a JSON body.
    pub async fn post_json(&self, path: &str, body: &Value) -> TestResponse {
        self.server.post(path).json(body).await
    }

    /// Makes a POST request with a form-encoded body.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.server.post(path).form(&fields).await
    }

    /// Makes a POST request with a `multipart/form-data` body.
    pub async fn post_multipart(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.server.post(path).multipart(multipart_form(fields)).await
    }

    /// Makes a PUT request with a JSON body.
    pub async fn put_json(&self, path: &str, body: &Value) -> TestResponse {
        self.server.put(path).json(body).await
    }

    /// Makes a PATCH request with a JSON body.
    pub async fn patch_json(&self, path: &str, body: &Value) -> TestResponse {
        self.server.patch(path).json(body).await
    }

    /// Makes a PATCH request with a form-encoded body.
    pub async fn patch_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.server.patch(path).form(&fields).await
    }

    /// Makes a PATCH request with a `multipart/form-data` body.
    pub async fn patch_multipart(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.server.patch(path).multipart(multipart_form(fields)).await
    }

    /// Makes a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.server.delete(path).await
    }
}

fn multipart_form(fields: &[(&str, &str)]) -> MultipartForm {
    fields
        .iter()
        .fold(MultipartForm::new(), |form, (name, value)| {
            form.add_text(name.to_string(), value.to_string())
        })
}

impl Default for RestTestHarness {
    fn default() -> Self {
        Self::new()
    }
}
