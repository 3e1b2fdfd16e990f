//! Wire-level data transfer objects.
//!
//! DTOs mirror the JSON bodies accepted and returned by the HTTP API. Request bodies
//! carry every field as `Option` so a PATCH can tell an absent field from an explicit
//! zero or empty value; response bodies are always complete.

pub mod api;
pub mod appointment;
pub mod dentist;
pub mod patient;
