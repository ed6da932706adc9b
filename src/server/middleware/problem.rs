use axum::{
    extract::State,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        HeaderValue,
    },
    response::{IntoResponse, Response},
    Json,
};

use crate::server::{error::Problem, state::AppState};

/// Media type of problem-detail bodies.
pub const PROBLEM_JSON: &str = "application/problem+json";

/// Renders the [`Problem`] attached to a response into its JSON body.
///
/// Responses without a problem pass through untouched. Status and other headers of the
/// original response are kept.
pub async fn render_problem(State(state): State<AppState>, mut response: Response) -> Response {
    let Some(problem) = response.extensions_mut().remove::<Problem>() else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    let body = Json(problem.into_dto(&state.app_url))
        .into_response()
        .into_body();

    parts.headers.remove(CONTENT_LENGTH);
    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));

    Response::from_parts(parts, body)
}
