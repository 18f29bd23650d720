//! Common test utilities for REST API testing.
//!
//! - [`harness`] - REST API test harness
//! - [`fixtures`] - Record factories for seeding test data

// Not every test binary uses every helper.
#![allow(dead_code)]

pub mod fixtures;
pub mod harness;
