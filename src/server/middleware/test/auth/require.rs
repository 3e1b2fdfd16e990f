use super::*;

/// Tests a request carrying the configured token.
///
/// Expected: Ok(())
#[test]
fn accepts_matching_token() {
    let headers = headers_with_token("secret");

    let result = AuthGuard::new("secret", &headers).require();

    assert!(result.is_ok());
}

/// Tests a request without the token header.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_token() {
    let headers = HeaderMap::new();

    let result = AuthGuard::new("secret", &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests a request with an empty token header.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn treats_empty_token_as_missing() {
    let headers = headers_with_token("");

    let result = AuthGuard::new("secret", &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests a request with a different token.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_mismatched_token() {
    let headers = headers_with_token("guess");

    let result = AuthGuard::new("secret", &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}
