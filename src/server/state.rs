//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through Axum's
//! state extraction. Services are held as trait objects so tests can swap in stubs
//! without a database.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::Config,
    controller::validate::RangeCheck,
    service::{
        appointment::{AppointmentService, AppointmentServiceImpl},
        dentist::{DentistService, DentistServiceImpl},
        patient::{PatientService, PatientServiceImpl},
    },
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: services sit behind `Arc` and the token is a
/// reference-counted string.
#[derive(Clone)]
pub struct AppState {
    /// Expected value of the `token` header on mutating routes.
    pub token: Arc<str>,

    /// Range check applied to submitted dates and hours.
    pub range_check: RangeCheck,

    pub patients: Arc<dyn PatientService>,
    pub dentists: Arc<dyn DentistService>,
    pub appointments: Arc<dyn AppointmentService>,
}

impl AppState {
    /// Creates the application state backed by the database services.
    ///
    /// # Arguments
    /// - `db` - Database connection pool; each service keeps its own clone
    /// - `config` - Application configuration supplying the token and range check
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            token: Arc::from(config.token.as_str()),
            range_check: RangeCheck::from_strict(config.strict_date_validation),
            patients: Arc::new(PatientServiceImpl::new(db.clone())),
            dentists: Arc::new(DentistServiceImpl::new(db.clone())),
            appointments: Arc::new(AppointmentServiceImpl::new(db)),
        }
    }
}
