use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::appointment::{AppointmentRequestDto, DniLicenseQuery},
    server::{
        controller::{
            decode, deleted, respond,
            validate::{validate_date, validate_hour, RangeCheck, RequiredFields},
        },
        error::AppError,
        middleware::auth::AuthGuard,
        model::appointment::{CreateAppointmentParams, UpdateAppointmentParams},
        state::AppState,
        util::parse::parse_i32_param,
    },
};

/// Validates the date and hour of a create or full update body.
fn validate_schedule(dto: &AppointmentRequestDto, check: RangeCheck) -> Result<(), AppError> {
    validate_date("date", dto.date.as_deref().unwrap_or_default(), check)?;
    validate_hour(dto.hour.as_deref().unwrap_or_default(), check)
}

/// Get an appointment by ID with its patient and dentist.
///
/// # Returns
/// - `200 OK` - The appointment
/// - `400 Bad Request` - `"invalid id"`
/// - `404 Not Found` - `"appointment <id> not found"`
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_i32_param(&id, "invalid id")?;

    let appointment = state.appointments.get_by_id(id).await?;

    Ok(respond(StatusCode::OK, appointment))
}

/// List the appointments of the patient with the given DNI.
///
/// # Returns
/// - `200 OK` - Appointments ordered by id, empty when the DNI has none
/// - `400 Bad Request` - `"invalid dni"`
/// - `404 Not Found` - `"appointments with patient.dni: <dni> not found"` when the
///   lookup fails
pub async fn get_appointments_by_dni(
    State(state): State<AppState>,
    Path(dni): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let dni = parse_i32_param(&dni, "invalid dni")?;

    let appointments = state.appointments.get_by_dni(dni).await?;

    Ok(respond(StatusCode::OK, appointments))
}

/// Create an appointment for the patient and dentist referenced by id.
///
/// # Returns
/// - `201 Created` - The appointment with nested patient and dentist
/// - `400 Bad Request` - Invalid body, missing field, bad date or hour, unknown
///   patient or dentist, or storage failure
/// - `401 Unauthorized` - Missing or invalid token
pub async fn create_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AppointmentRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token, &headers).require()?;

    let dto = decode(payload)?;
    dto.require_all()?;
    validate_schedule(&dto, state.range_check)?;

    let appointment = state
        .appointments
        .create(CreateAppointmentParams::from_dto(dto))
        .await
        .map_err(AppError::into_bad_request)?;

    Ok(respond(StatusCode::CREATED, appointment))
}

/// Create an appointment for the patient owning `?dni=` with the dentist holding
/// `?license=`.
///
/// Only the date and hour of the body are validated; nested patient and dentist are
/// ignored.
pub async fn create_appointment_by_dni_and_license(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DniLicenseQuery>,
    payload: Result<Json<AppointmentRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token, &headers).require()?;

    let dto = decode(payload)?;
    let dni = parse_i32_param(query.dni.as_deref().unwrap_or_default(), "invalid dni")?;
    let license = query.license.unwrap_or_default();
    validate_schedule(&dto, state.range_check)?;

    let appointment = state
        .appointments
        .create_by_dni_and_license(dni, license, CreateAppointmentParams::from_dto(dto))
        .await
        .map_err(AppError::into_bad_request)?;

    Ok(respond(StatusCode::CREATED, appointment))
}

/// Replace an appointment.
///
/// Validates like create; the nested ids relink the appointment.
///
/// # Returns
/// - `200 OK` - The updated appointment with nested patient and dentist
/// - `400 Bad Request` - Invalid body, missing field, bad date or hour, unknown
///   appointment, patient or dentist, or storage failure
/// - `401 Unauthorized` - Missing or invalid token
pub async fn update_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<AppointmentRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token, &headers).require()?;

    let id = parse_i32_param(&id, "invalid id")?;
    let dto = decode(payload)?;
    dto.require_all()?;
    validate_schedule(&dto, state.range_check)?;

    let appointment = state
        .appointments
        .update(id, UpdateAppointmentParams::from(dto))
        .await
        .map_err(AppError::into_bad_request)?;

    Ok(respond(StatusCode::OK, appointment))
}

/// Partially update an appointment.
///
/// A non-empty date or hour is validated, an empty one is left unchanged. A present
/// nested id relinks the appointment.
pub async fn patch_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<AppointmentRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token, &headers).require()?;

    let id = parse_i32_param(&id, "invalid id")?;
    let mut dto = decode(payload)?;
    dto.date = dto.date.filter(|d| !d.is_empty());
    dto.hour = dto.hour.filter(|h| !h.is_empty());
    if let Some(date) = dto.date.as_deref() {
        validate_date("date", date, state.range_check)?;
    }
    if let Some(hour) = dto.hour.as_deref() {
        validate_hour(hour, state.range_check)?;
    }

    let appointment = state
        .appointments
        .update(id, UpdateAppointmentParams::from(dto))
        .await
        .map_err(AppError::into_bad_request)?;

    Ok(respond(StatusCode::OK, appointment))
}

/// Delete an appointment.
///
/// # Returns
/// - `204 No Content` - `"appointment <id> deleted"`
/// - `400 Bad Request` - `"invalid id"`
/// - `404 Not Found` - `"appointment <id> not found"`
pub async fn delete_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token, &headers).require()?;

    let id = parse_i32_param(&id, "invalid id")?;
    state.appointments.delete(id).await?;

    Ok(deleted("appointment", id))
}
