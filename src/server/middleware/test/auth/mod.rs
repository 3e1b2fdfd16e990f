use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, TOKEN_HEADER},
};
use axum::http::{HeaderMap, HeaderValue};

mod require;

fn headers_with_token(token: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(TOKEN_HEADER, HeaderValue::from_static(token));
    headers
}
