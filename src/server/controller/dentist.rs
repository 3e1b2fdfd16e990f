use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::dentist::DentistRequestDto,
    server::{
        controller::{decode, deleted, respond, validate::RequiredFields},
        error::AppError,
        middleware::auth::AuthGuard,
        model::dentist::{CreateDentistParams, UpdateDentistParams},
        state::AppState,
        util::parse::parse_i32_param,
    },
};

/// Get a dentist by ID.
///
/// # Returns
/// - `200 OK` - The dentist
/// - `400 Bad Request` - `"invalid id"`
/// - `404 Not Found` - `"dentist <id> not found"`
pub async fn get_dentist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_i32_param(&id, "invalid id")?;

    let dentist = state.dentists.get_by_id(id).await?;

    Ok(respond(StatusCode::OK, dentist))
}

/// Create a dentist.
///
/// Requires name, last_name and license; the license must be unused.
///
/// # Returns
/// - `201 Created` - The created dentist
/// - `400 Bad Request` - Invalid body, missing field, license conflict or storage failure
/// - `401 Unauthorized` - Missing or invalid token
pub async fn create_dentist(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<DentistRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token, &headers).require()?;

    let dto = decode(payload)?;
    dto.require_all()?;

    let dentist = state
        .dentists
        .create(CreateDentistParams::from_dto(dto))
        .await
        .map_err(AppError::into_bad_request)?;

    Ok(respond(StatusCode::CREATED, dentist))
}

/// Replace a dentist.
///
/// # Returns
/// - `200 OK` - The updated dentist
/// - `400 Bad Request` - Invalid body, missing field, unknown dentist, license conflict
///   or storage failure
/// - `401 Unauthorized` - Missing or invalid token
pub async fn update_dentist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<DentistRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token, &headers).require()?;

    let id = parse_i32_param(&id, "invalid id")?;
    let dto = decode(payload)?;
    dto.require_all()?;

    let dentist = state
        .dentists
        .update(id, UpdateDentistParams::from(dto))
        .await
        .map_err(AppError::into_bad_request)?;

    Ok(respond(StatusCode::OK, dentist))
}

/// Partially update a dentist. Only fields present in the body are applied.
pub async fn patch_dentist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<DentistRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token, &headers).require()?;

    let id = parse_i32_param(&id, "invalid id")?;
    let dto = decode(payload)?;

    let dentist = state
        .dentists
        .update(id, UpdateDentistParams::from(dto))
        .await
        .map_err(AppError::into_bad_request)?;

    Ok(respond(StatusCode::OK, dentist))
}

/// Delete a dentist without appointments.
///
/// # Returns
/// - `204 No Content` - `"dentist <id> deleted"`
/// - `400 Bad Request` - `"invalid id"` or the dentist still has appointments
/// - `404 Not Found` - `"dentist <id> not found"`
pub async fn delete_dentist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token, &headers).require()?;

    let id = parse_i32_param(&id, "invalid id")?;
    state.dentists.delete(id).await?;

    Ok(deleted("dentist", id))
}
