//! Campus Persistence Layer
//!
//! This crate stores the records behind the Campus course service: courses,
//! which are exposed over HTTP, and students, which are only written as seed
//! data. Backends are selected with feature flags.
//!
//! # Backend Features
//!
//! - `sqlite` (default) - SQLite with in-memory and file modes
//!
//! # Architecture
//!
//! - [`types`] - Record types ([`Course`](types::Course), [`Student`](types::Student))
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage traits and abstractions
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! # async fn example() -> Result<(), campus_persistence::StorageError> {
//! use campus_persistence::backends::sqlite::SqliteBackend;
//! use campus_persistence::core::CourseStorage;
//! use campus_persistence::types::NewCourse;
//!
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let course = backend.create_course(NewCourse::new("Operating Systems")).await?;
//! assert_eq!(backend.list_courses().await?, vec![course]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{Course, CourseChanges, NewCourse, NewStudent, Student};

// Re-export core traits
pub use core::{Backend, BackendKind, CourseStorage, StudentStorage};
