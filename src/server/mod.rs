//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the clinic API: HTTP handlers, business
//! rules, data access and infrastructure. The backend uses Axum as the web framework and
//! SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, validation and envelopes
//! - **Service Layer** (`service/`) - Service traits used by the handlers, domain to DTO conversion
//! - **Repository Layer** (`repository/`) - Uniqueness, reference and delete rules inside transactions
//! - **Data Layer** (`data/`) - Stores running SeaORM queries and entity to domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Token guard for mutating routes
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state holding the services
//! - **Startup** (`startup`) - Database bootstrap, migrations and tracing
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a handler
//! 2. **Controller** checks the token, parses parameters and validates the body
//! 3. **Service** forwards params to the repository
//! 4. **Repository** applies business rules and composes store calls in a transaction
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Service** converts the domain model to a DTO
//! 7. **Controller** wraps the DTO in the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod repository;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
