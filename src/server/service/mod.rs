//! Service layer exposed to the HTTP handlers.
//!
//! Each resource has a `Send + Sync` service trait so handlers depend on the trait object
//! stored in `AppState` rather than on a concrete implementation. The `*ServiceImpl`
//! types delegate to the repositories and convert domain models into DTOs; they add no
//! rules of their own and pass repository errors through unchanged.

pub mod appointment;
pub mod dentist;
pub mod patient;
