//! HTTP request handlers.
//!
//! Handlers parse path and query parameters, decode and validate request bodies, call
//! the services held in `AppState` and wrap results in the `{"data": ...}` envelope.
//! Mutating handlers check the API token first.

pub mod appointment;
pub mod dentist;
pub mod patient;
pub mod validate;


use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{model::api::DataDto, server::error::AppError};

/// Unwraps a JSON body, reporting any decoding failure as `"invalid json"`.
fn decode<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection);
            Err(AppError::BadRequest("invalid json".to_string()))
        }
    }
}

/// Wraps a payload in the success envelope with the given status.
fn respond<T: serde::Serialize>(status: StatusCode, data: T) -> Response {
    (status, Json(DataDto::new(data))).into_response()
}

/// `204 No Content` carrying `"<resource> <id> deleted"`.
fn deleted(resource: &str, id: i32) -> Response {
    respond(
        StatusCode::NO_CONTENT,
        format!("{} {} deleted", resource, id),
    )
}
