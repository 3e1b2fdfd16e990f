use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::patient::PatientRequestDto,
    server::{
        controller::{
            decode, deleted, respond,
            validate::{validate_date, RequiredFields},
        },
        error::AppError,
        middleware::auth::AuthGuard,
        model::patient::{CreatePatientParams, UpdatePatientParams},
        state::AppState,
        util::parse::parse_i32_param,
    },
};

/// Get a patient by ID.
///
/// # Returns
/// - `200 OK` - The patient
/// - `400 Bad Request` - `"invalid id"`
/// - `404 Not Found` - `"patient <id> not found"`
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_i32_param(&id, "invalid id")?;

    let patient = state.patients.get_by_id(id).await?;

    Ok(respond(StatusCode::OK, patient))
}

/// Create a patient.
///
/// Requires name, last_name, dni, email and admission_date; the DNI must be unused.
///
/// # Returns
/// - `201 Created` - The created patient
/// - `400 Bad Request` - Invalid body, missing field, bad date, DNI conflict or storage failure
/// - `401 Unauthorized` - Missing or invalid token
pub async fn create_patient(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<PatientRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token, &headers).require()?;

    let dto = decode(payload)?;
    dto.require_all()?;
    validate_date(
        "admission_date",
        dto.admission_date.as_deref().unwrap_or_default(),
        state.range_check,
    )?;

    let patient = state
        .patients
        .create(CreatePatientParams::from_dto(dto))
        .await
        .map_err(AppError::into_bad_request)?;

    Ok(respond(StatusCode::CREATED, patient))
}

/// Replace a patient.
///
/// Validates like create; an omitted domicilio keeps the stored value.
pub async fn update_patient(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<PatientRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token, &headers).require()?;

    let id = parse_i32_param(&id, "invalid id")?;
    let dto = decode(payload)?;
    dto.require_all()?;
    validate_date(
        "admission_date",
        dto.admission_date.as_deref().unwrap_or_default(),
        state.range_check,
    )?;

    let patient = state
        .patients
        .update(id, UpdatePatientParams::from(dto))
        .await
        .map_err(AppError::into_bad_request)?;

    Ok(respond(StatusCode::OK, patient))
}

/// Partially update a patient.
///
/// Only fields present in the body are validated and applied; an empty
/// `admission_date` counts as absent.
pub async fn patch_patient(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<PatientRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token, &headers).require()?;

    let id = parse_i32_param(&id, "invalid id")?;
    let mut dto = decode(payload)?;
    dto.admission_date = dto.admission_date.filter(|d| !d.is_empty());
    if let Some(admission_date) = dto.admission_date.as_deref() {
        validate_date("admission_date", admission_date, state.range_check)?;
    }

    let patient = state
        .patients
        .update(id, UpdatePatientParams::from(dto))
        .await
        .map_err(AppError::into_bad_request)?;

    Ok(respond(StatusCode::OK, patient))
}

/// Delete a patient without appointments.
///
/// # Returns
/// - `204 No Content` - `"patient <id> deleted"`
/// - `400 Bad Request` - `"invalid id"` or the patient still has appointments
/// - `404 Not Found` - `"patient <id> not found"`
pub async fn delete_patient(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token, &headers).require()?;

    let id = parse_i32_param(&id, "invalid id")?;
    state.patients.delete(id).await?;

    Ok(deleted("patient", id))
}
