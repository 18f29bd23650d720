//! SQLite backend implementation.
//!
//! Supports in-memory databases (used by the test suites) and file-based
//! databases (for development and small deployments).
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE courses (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     name TEXT NOT NULL
//! );
//!
//! CREATE TABLE students (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     name TEXT NOT NULL,
//!     birth_date TEXT
//! );
//! ```
//!
//! `AUTOINCREMENT` keeps ids from being reused after a row is deleted.

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
