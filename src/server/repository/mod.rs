//! Repository layer enforcing the clinic's business rules.
//!
//! Repositories own a handle to the connection pool and compose stores to implement
//! natural-key uniqueness, reference existence and delete integrity. Every operation that
//! needs more than one round trip runs inside a single `DatabaseTransaction`, which rolls
//! back when dropped on an error path.
//!
//! Errors leave this layer as `AppError` with client-facing messages. Storage failures are
//! logged here and reduced to `"error <action> <resource>"`.

pub mod appointment;
pub mod dentist;
pub mod patient;

#[cfg(test)]
mod test;

use sea_orm::DbErr;

use crate::server::{error::AppError, model::resource::Resource};

/// Write operation a storage failure happened in.
#[derive(Debug, Clone, Copy)]
pub enum Action {
    Create,
    Update,
    Delete,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Self::Create => "creating",
            Self::Update => "updating",
            Self::Delete => "deleting",
        }
    }
}

/// Maps storage errors of a write operation to a client-safe `BadRequest`.
pub trait StorageContext<T> {
    /// Logs the database error and replaces it with `"error <action> <resource>"`.
    fn context<R: Resource>(self, action: Action) -> Result<T, AppError>;
}

impl<T> StorageContext<T> for Result<T, DbErr> {
    fn context<R: Resource>(self, action: Action) -> Result<T, AppError> {
        self.map_err(|e| {
            if is_input_error(&e) {
                tracing::warn!(error = ?e, "rejected input {} {}", action.verb(), R::NAME);
            } else {
                tracing::error!(error = ?e, "error {} {}", action.verb(), R::NAME);
            }
            AppError::BadRequest(format!("error {} {}", action.verb(), R::NAME))
        })
    }
}

/// Whether a store error came from unparseable client input rather than the database.
///
/// Date and hour parse failures are the only `DbErr::Custom` the stores produce.
fn is_input_error(err: &DbErr) -> bool {
    matches!(err, DbErr::Custom(_))
}

/// `"<resource> <id> not found"`
pub fn not_found<R: Resource>(id: i32) -> AppError {
    AppError::NotFound(format!("{} {} not found", R::NAME, id))
}
