//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the conversion of errors
//! into problem-detail responses. `AppError` is the top-level error type; it wraps the
//! domain-specific errors and implements `IntoResponse` so handlers can return it directly.
//!
//! Responses built here carry a [`Problem`] in their extensions and an empty body. The
//! `render_problem` middleware turns that into the JSON envelope, since only it knows the
//! application's base URL.

pub mod auth;
pub mod config;
pub mod internal;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::{
    model::api::ProblemDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError,
        validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Domain-specific errors like
/// `AuthError` and `ValidationError` produce their own responses, while the remaining
/// variants map to standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Missing or unknown bearer token. Results in 401 Unauthorized.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Request payload failed validation. Results in 422 Unprocessable Entity.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Inconsistent persisted state or arithmetic failure. Results in 500.
    #[error(transparent)]
    Internal(#[from] InternalError),

    /// Socket bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found. Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Request could not be read (e.g. body is not JSON). Results in 400 Bad Request.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 401 Unauthorized - For `AuthErr`
/// - 404 Not Found - For `NotFound`
/// - 422 Unprocessable Entity - For `ValidationErr`
/// - 500 Internal Server Error - For everything else, with a generic body
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                Problem::new(StatusCode::NOT_FOUND, "NotFound", msg).into_response()
            }
            Self::BadRequest(msg) => {
                Problem::new(StatusCode::BAD_REQUEST, "BadRequest", msg).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Problem detail describing a failed request.
///
/// Attached to the response extensions by `into_response` and rendered into a
/// [`ProblemDto`] body by the `render_problem` middleware.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub status: StatusCode,
    /// Short error name, also the last segment of the problem `type` URI.
    pub title: &'static str,
    pub detail: String,
    pub invalid_params: Option<BTreeMap<String, Vec<String>>>,
}

impl Problem {
    pub fn new(status: StatusCode, title: &'static str, detail: impl Into<String>) -> Self {
        Self {
            status,
            title,
            detail: detail.into(),
            invalid_params: None,
        }
    }

    pub fn with_invalid_params(mut self, invalid_params: BTreeMap<String, Vec<String>>) -> Self {
        self.invalid_params = Some(invalid_params);
        self
    }

    /// Converts the problem into its wire form.
    ///
    /// # Arguments
    /// - `base_url` - Application base URL used to build the `type` URI
    pub fn into_dto(self, base_url: &str) -> ProblemDto {
        ProblemDto {
            problem_type: format!("{}/problems/{}", base_url.trim_end_matches('/'), self.title),
            title: self.title.to_string(),
            detail: self.detail,
            status: self.status.as_u16(),
            invalid_params: self.invalid_params,
        }
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let mut response = self.status.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic problem to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "InternalServerError",
            "Server Error",
        )
        .into_response()
    }
}
