//! SeaORM entity models for the clinic schema.

pub mod prelude;

pub mod appointment;
pub mod dentist;
pub mod patient;
