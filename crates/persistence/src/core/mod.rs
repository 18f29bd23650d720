//! Core storage traits and abstractions.
//!
//! - [`Backend`] - Database driver lifecycle (schema, health)
//! - [`CourseStorage`] - CRUD operations for courses
//! - [`StudentStorage`] - Student record persistence
//!
//! A complete backend implements all three; the REST layer only requires
//! [`CourseStorage`] plus [`Backend`] for its readiness probe.

pub mod backend;
pub mod storage;

pub use backend::{Backend, BackendKind};
pub use storage::{CourseStorage, StudentStorage};
