use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        accommodation::{AccommodationDto, AccommodationListDto, AccommodationResponseDto},
        api::ProblemDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        model::accommodation::AccommodationParams,
        service::accommodation::AccommodationService, state::AppState,
    },
};

/// Tag for grouping accommodation endpoints in OpenAPI documentation
pub static ACCOMMODATION_TAG: &str = "accommodation";

/// List the caller's accommodations.
///
/// Returns only accommodations owned by the authenticated user, oldest first.
///
/// # Returns
/// - `200 OK` - `{ data: [Accommodation] }`
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `500 Internal Server Error` - Database error or listing without location
#[utoipa::path(
    get,
    path = "/api/accommodations",
    tag = ACCOMMODATION_TAG,
    responses(
        (status = 200, description = "Accommodations owned by the caller", body = AccommodationListDto),
        (status = 401, description = "Missing or unknown bearer token", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
    security(("bearer" = []))
)]
pub async fn list_accommodations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = AccommodationService::new(&state.db);
    let accommodations = service.get_all_by_user(user.id).await?;

    Ok(Json(AccommodationListDto {
        data: accommodations.into_iter().map(|a| a.into_dto()).collect(),
    }))
}

/// Create an accommodation owned by the caller.
///
/// The body is validated as a whole; every violated field is reported in one response.
///
/// # Returns
/// - `201 Created` - `{ data: Accommodation }`
/// - `400 Bad Request` - Body is not JSON
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `422 Unprocessable Entity` - Validation failed
#[utoipa::path(
    post,
    path = "/api/accommodations",
    tag = ACCOMMODATION_TAG,
    request_body = AccommodationDto,
    responses(
        (status = 201, description = "Accommodation created", body = AccommodationResponseDto),
        (status = 400, description = "Body is not valid JSON", body = ProblemDto),
        (status = 401, description = "Missing or unknown bearer token", body = ProblemDto),
        (status = 422, description = "Validation failed", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_accommodation(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let payload = json_body(payload)?;
    let params = AccommodationParams::validate(&payload)?;

    let service = AccommodationService::new(&state.db);
    let accommodation = service.create(user.id, params).await?;

    Ok((
        StatusCode::CREATED,
        Json(AccommodationResponseDto {
            data: accommodation.into_dto(),
        }),
    ))
}

/// Get an accommodation by ID.
///
/// Any authenticated user may read any accommodation.
///
/// # Returns
/// - `200 OK` - `{ data: Accommodation }`
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `404 Not Found` - No accommodation with that ID
#[utoipa::path(
    get,
    path = "/api/accommodations/{id}",
    tag = ACCOMMODATION_TAG,
    params(
        ("id" = i32, Path, description = "Accommodation ID")
    ),
    responses(
        (status = 200, description = "Accommodation found", body = AccommodationResponseDto),
        (status = 401, description = "Missing or unknown bearer token", body = ProblemDto),
        (status = 404, description = "Accommodation not found", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_accommodation(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;
    let id = accommodation_id(id)?;

    let service = AccommodationService::new(&state.db);
    let accommodation = service.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

    Ok(Json(AccommodationResponseDto {
        data: accommodation.into_dto(),
    }))
}

/// Replace an accommodation and its location.
///
/// Existence is checked before the body, so an unknown ID is reported as 404 even when
/// the body is invalid.
///
/// # Returns
/// - `200 OK` - `{ data: Accommodation }`
/// - `400 Bad Request` - Body is not JSON
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `404 Not Found` - No accommodation with that ID
/// - `422 Unprocessable Entity` - Validation failed
#[utoipa::path(
    put,
    path = "/api/accommodations/{id}",
    tag = ACCOMMODATION_TAG,
    params(
        ("id" = i32, Path, description = "Accommodation ID")
    ),
    request_body = AccommodationDto,
    responses(
        (status = 200, description = "Accommodation updated", body = AccommodationResponseDto),
        (status = 400, description = "Body is not valid JSON", body = ProblemDto),
        (status = 401, description = "Missing or unknown bearer token", body = ProblemDto),
        (status = 404, description = "Accommodation not found", body = ProblemDto),
        (status = 422, description = "Validation failed", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_accommodation(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;
    let id = accommodation_id(id)?;

    let service = AccommodationService::new(&state.db);

    if !service.exists(id).await? {
        return Err(not_found(id));
    }

    let payload = json_body(payload)?;
    let params = AccommodationParams::validate(&payload)?;

    // Deleted between the existence check and the write
    let accommodation = service
        .update(id, params)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(AccommodationResponseDto {
        data: accommodation.into_dto(),
    }))
}

/// Delete an accommodation and its location.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `404 Not Found` - No accommodation with that ID
#[utoipa::path(
    delete,
    path = "/api/accommodations/{id}",
    tag = ACCOMMODATION_TAG,
    params(
        ("id" = i32, Path, description = "Accommodation ID")
    ),
    responses(
        (status = 204, description = "Accommodation deleted"),
        (status = 401, description = "Missing or unknown bearer token", body = ProblemDto),
        (status = 404, description = "Accommodation not found", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_accommodation(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;
    let id = accommodation_id(id)?;

    let service = AccommodationService::new(&state.db);

    if !service.delete(id).await? {
        return Err(not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Book one unit of an accommodation.
///
/// Decrements availability by one without a lower bound.
///
/// # Returns
/// - `204 No Content` - Availability decremented
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `404 Not Found` - No accommodation with that ID
#[utoipa::path(
    post,
    path = "/api/accommodations/{id}/book",
    tag = ACCOMMODATION_TAG,
    params(
        ("id" = i32, Path, description = "Accommodation ID")
    ),
    responses(
        (status = 204, description = "Accommodation booked"),
        (status = 401, description = "Missing or unknown bearer token", body = ProblemDto),
        (status = 404, description = "Accommodation not found", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
    security(("bearer" = []))
)]
pub async fn book_accommodation(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;
    let id = accommodation_id(id)?;

    let service = AccommodationService::new(&state.db);

    if !service.book(id).await? {
        return Err(not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// A path segment that is not an integer cannot name an accommodation.
fn accommodation_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    id.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound("Accommodation not found.".to_string()))
}

fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Accommodation {} not found.", id))
}
