//! Request guards applied by the handlers.

pub mod auth;
