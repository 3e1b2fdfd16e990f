use crate::server::error::AppError;
use test_utils::{builder::TestBuilder, context::TestContext, error::TestError};

mod dentist;

async fn clinic() -> Result<TestContext, TestError> {
    TestBuilder::new().with_clinic_tables().build().await
}

fn bad_request(err: &AppError) -> Option<&str> {
    match err {
        AppError::BadRequest(msg) => Some(msg),
        _ => None,
    }
}

fn not_found(err: &AppError) -> Option<&str> {
    match err {
        AppError::NotFound(msg) => Some(msg),
        _ => None,
    }
}
