//! Server configuration for the course API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CAMPUS_SERVER_PORT` | 8080 | Server port |
//! | `CAMPUS_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `CAMPUS_LOG_LEVEL` | info | Log level |
//! | `CAMPUS_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `CAMPUS_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `CAMPUS_ENABLE_CORS` | true | Enable CORS |
//! | `CAMPUS_CORS_ORIGINS` | * | Allowed origins |
//! | `CAMPUS_CORS_METHODS` | GET,POST,PUT,PATCH,DELETE,OPTIONS | Allowed methods |
//! | `CAMPUS_CORS_HEADERS` | Content-Type,Authorization,Accept,X-Request-ID | Allowed headers |
//! | `CAMPUS_BASE_URL` | http://localhost:8080 | Server base URL |
//! | `CAMPUS_DATABASE_URL` | campus.db | SQLite database path, or `:memory:` |
//! | `CAMPUS_ENABLE_REQUEST_ID` | true | Set and propagate `x-request-id` |
//!
//! # Example
//!
//! ```rust
//! use campus_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use clap::Parser;

const DEFAULT_CORS_METHODS: &str = "GET,POST,PUT,PATCH,DELETE,OPTIONS";
const DEFAULT_CORS_HEADERS: &str = "Content-Type,Authorization,Accept,X-Request-ID";

/// Server configuration for the course API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "campus")]
#[command(about = "Campus course REST API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "CAMPUS_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "CAMPUS_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "CAMPUS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "CAMPUS_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "CAMPUS_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "CAMPUS_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "CAMPUS_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "CAMPUS_CORS_METHODS", default_value = DEFAULT_CORS_METHODS)]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "CAMPUS_CORS_HEADERS", default_value = DEFAULT_CORS_HEADERS)]
    pub cors_headers: String,

    /// Base URL for the server (used in Location headers).
    #[arg(long, env = "CAMPUS_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// SQLite database path. Defaults to `campus.db`; `:memory:` keeps
    /// everything in memory.
    #[arg(long, env = "CAMPUS_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Enable request ID tracking.
    #[arg(long, env = "CAMPUS_ENABLE_REQUEST_ID", default_value = "true")]
    pub enable_request_id: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: DEFAULT_CORS_METHODS.to_string(),
            cors_headers: DEFAULT_CORS_HEADERS.to_string(),
            base_url: "http://localhost:8080".to_string(),
            database_url: None,
            enable_request_id: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse_from(["campus"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the database path, falling back to `campus.db`.
    pub fn database_path(&self) -> &str {
        self.database_url.as_deref().unwrap_or("campus.db")
    }

    /// Returns the absolute URL of a single course.
    pub fn course_url(&self, id: i64) -> String {
        format!(
            "{}/api/v1/courses/{}/",
            self.base_url.trim_end_matches('/'),
            id
        )
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if let Err(e) = url::Url::parse(&self.base_url) {
            errors.push(format!("Invalid base URL '{}': {}", self.base_url, e));
        }

        if self.database_url.as_deref().is_some_and(|d| d.trim().is_empty()) {
            errors.push("Database URL cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0, an in-memory database and disables
    /// features that might interfere with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            max_body_size: 64 * 1024,
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            base_url: "http://testserver".to_string(),
            database_url: Some(":memory:".to_string()),
            enable_request_id: false,
        }
    }
}
