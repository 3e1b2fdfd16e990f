use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The `token` header is absent from a mutating request.
    #[error("token not found")]
    MissingToken,

    /// The `token` header does not match the configured token.
    #[error("invalid token")]
    InvalidToken,
}

/// Converts authentication errors into 401 Unauthorized responses.
///
/// Rejections are logged at debug level; the message in the body names which of the
/// two checks failed.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        error_response(StatusCode::UNAUTHORIZED, self.to_string())
    }
}
