use chrono::{NaiveDate, NaiveTime};
use sea_orm::DbErr;

use crate::server::error::AppError;

/// Date layout used on the wire and in the database.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Day-first layout accepted as input.
pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";
/// Hour layout used on the wire and in the database.
pub const HOUR_FORMAT: &str = "%H:%M:%S";

/// Parses an i32 path or query parameter.
///
/// # Arguments
/// - `value` - The raw parameter
/// - `message` - Client-facing message used when parsing fails (e.g. `"invalid id"`)
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed value
/// - `Err(AppError::BadRequest)` - The value is not an integer
pub fn parse_i32_param(value: &str, message: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(message.to_string()))
}

/// Parses a date for persistence.
///
/// Accepts `yyyy-mm-dd` first and falls back to `dd-mm-yyyy`.
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed calendar date
/// - `Err(DbErr::Custom)` - Neither layout matched or the date does not exist
pub fn parse_date(value: &str) -> Result<NaiveDate, DbErr> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(value, DISPLAY_DATE_FORMAT))
        .map_err(|e| DbErr::Custom(format!("Failed to parse date '{}': {}", value, e)))
}

/// Parses an hour for persistence, normalizing it to `hh:mm:ss`.
///
/// # Returns
/// - `Ok(NaiveTime)` - Parsed time of day without fractional seconds
/// - `Err(DbErr::Custom)` - The value is not a valid `hh:mm:ss` time
pub fn parse_hour(value: &str) -> Result<NaiveTime, DbErr> {
    NaiveTime::parse_from_str(value, HOUR_FORMAT)
        .map_err(|e| DbErr::Custom(format!("Failed to parse hour '{}': {}", value, e)))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_hour(hour: NaiveTime) -> String {
    hour.format(HOUR_FORMAT).to_string()
}
