//! Dental Clinic Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the clinic
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for inserting patients, dentists and appointments.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Database-backed builders for clinic rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_patient_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_clinic_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let patient = factory::create_patient(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
