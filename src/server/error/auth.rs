use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::Problem;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Request has no bearer token")]
    MissingToken,

    /// Bearer token does not belong to any user.
    #[error("Bearer token does not match any user")]
    UnknownToken,
}

/// Converts authentication errors into 401 responses.
///
/// Both variants return the same client-facing message so callers cannot tell a
/// missing token from a wrong one; the distinction is only logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        Problem::new(StatusCode::UNAUTHORIZED, "Unauthenticated", "Unauthenticated.")
            .into_response()
    }
}
