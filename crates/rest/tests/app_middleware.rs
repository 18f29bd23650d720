//! Tests for the fully layered application returned by `create_app_with_config`.

mod common;

use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum_test::TestServer;
use campus_persistence::backends::sqlite::SqliteBackend;
use campus_rest::{ServerConfig, create_app_with_config};
use serde_json::{Value, json};

use common::fixtures::CourseFactory;

const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");
const ORIGIN: HeaderName = HeaderName::from_static("origin");
const ACCESS_CONTROL_REQUEST_METHOD: HeaderName =
    HeaderName::from_static("access-control-request-method");

/// Opens a file-backed database so fixtures and the server share rows.
fn open_backend(dir: &tempfile::TempDir) -> SqliteBackend {
    let backend =
        SqliteBackend::open(dir.path().join("campus.db")).expect("Failed to open database");
    backend.init_schema().expect("Failed to init schema");
    backend
}

fn create_test_server(dir: &tempfile::TempDir, config: ServerConfig) -> TestServer {
    let app = create_app_with_config(open_backend(dir), config);
    TestServer::new(app).expect("Failed to create test server")
}

#[tokio::test]
async fn test_rows_seeded_out_of_band_are_listed() {
    let dir = tempfile::tempdir().unwrap();
    let server = create_test_server(&dir, ServerConfig::for_testing());

    let seeder = open_backend(&dir);
    let courses = CourseFactory::new(&seeder).make_many(4).await;

    let response = server.get("/api/v1/courses/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), courses.len());
    assert_eq!(body[3]["name"], courses[3].name.as_str());
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        enable_request_id: true,
        ..ServerConfig::for_testing()
    };
    let server = create_test_server(&dir, config);

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert!(response.headers().get(X_REQUEST_ID).is_some());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        enable_request_id: true,
        ..ServerConfig::for_testing()
    };
    let server = create_test_server(&dir, config);

    let response = server
        .get("/api/v1/courses/")
        .add_header(X_REQUEST_ID, HeaderValue::from_static("req-123"))
        .await;

    let request_id = response.headers().get(X_REQUEST_ID).unwrap();
    assert_eq!(request_id.to_str().unwrap(), "req-123");
}

#[tokio::test]
async fn test_request_id_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let server = create_test_server(&dir, ServerConfig::for_testing());

    let response = server.get("/health").await;

    assert!(response.headers().get(X_REQUEST_ID).is_none());
}

#[tokio::test]
async fn test_body_limit() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        max_body_size: 64,
        ..ServerConfig::for_testing()
    };
    let server = create_test_server(&dir, config);

    let response = server
        .post("/api/v1/courses/")
        .json(&json!({"name": "x".repeat(256)}))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_cors_preflight() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        enable_cors: true,
        ..ServerConfig::default()
    };
    let server = create_test_server(&dir, config);

    let response = server
        .method(Method::OPTIONS, "/api/v1/courses/")
        .add_header(ORIGIN, HeaderValue::from_static("https://app.example.com"))
        .add_header(ACCESS_CONTROL_REQUEST_METHOD, HeaderValue::from_static("POST"))
        .await;

    response.assert_status_ok();
    let allow_origin = response.headers().get("access-control-allow-origin").unwrap();
    assert_eq!(allow_origin.to_str().unwrap(), "*");
}
