//! Database store layer for the clinic resources.
//!
//! Stores run the SQL for one table each through SeaORM and convert entity models into
//! domain models. They borrow any `ConnectionTrait`, so the same store works against the
//! connection pool and inside a repository's transaction. Stores report "missing" as
//! `Option` and leave business rules to the repository layer.

pub mod appointment;
pub mod dentist;
pub mod patient;
