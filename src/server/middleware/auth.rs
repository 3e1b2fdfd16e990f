use axum::http::HeaderMap;

use crate::server::error::{auth::AuthError, AppError};

/// Request header carrying the shared API token.
pub const TOKEN_HEADER: &str = "token";

/// Guards mutating routes behind the configured API token.
///
/// Read-only routes are public; every POST, PUT, PATCH and DELETE handler calls
/// `require()` before touching the request body.
pub struct AuthGuard<'a> {
    token: &'a str,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(token: &'a str, headers: &'a HeaderMap) -> Self {
        Self { token, headers }
    }

    /// Checks the `token` header against the configured token.
    ///
    /// # Returns
    /// - `Ok(())` - The header matches
    /// - `Err(AuthError::MissingToken)` - The header is absent or empty
    /// - `Err(AuthError::InvalidToken)` - The header does not match
    pub fn require(&self) -> Result<(), AppError> {
        let provided = match self.headers.get(TOKEN_HEADER) {
            Some(value) if !value.is_empty() => value,
            _ => return Err(AuthError::MissingToken.into()),
        };

        if provided.as_bytes() != self.token.as_bytes() {
            return Err(AuthError::InvalidToken.into());
        }

        Ok(())
    }
}
