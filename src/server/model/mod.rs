//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the store boundary and transformed
//! to DTOs at the controller boundary. Parameter types carry the input of create and
//! update operations; update parameters hold every field as `Option` so only the fields a
//! client supplied are merged onto the stored row.

pub mod appointment;
pub mod dentist;
pub mod patient;
pub mod resource;
