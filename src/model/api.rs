use serde::{Deserialize, Serialize};

/// Success envelope wrapping every successful response payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataDto<T> {
    pub data: T,
}

impl<T> DataDto<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Failure envelope carrying the HTTP status code alongside the message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDto {
    pub status: u16,
    pub error: String,
}
