use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{api::ProblemDto, user::UserDto},
    server::{error::AppError, middleware::auth::AuthGuard, state::AppState},
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the authenticated user.
///
/// # Returns
/// - `200 OK` - Profile of the token owner
/// - `401 Unauthorized` - Missing or unknown bearer token
#[utoipa::path(
    get,
    path = "/api/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Authenticated user", body = UserDto),
        (status = 401, description = "Missing or unknown bearer token", body = ProblemDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    Ok(Json(user.into_dto()))
}
