use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::server::error::Problem;

/// Aggregate of every field violation found in a request payload.
///
/// Keys are internal field names, with dot notation for nested location fields
/// (e.g. `location.zip_code`). Each key maps to a non-empty list of messages in the
/// order the rules were evaluated.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("The given data was invalid.")]
pub struct ValidationError {
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self { errors }
    }

    /// Returns the messages recorded for `field`, if any.
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let detail = self.to_string();

        Problem::new(StatusCode::UNPROCESSABLE_ENTITY, "ValidationError", detail)
            .with_invalid_params(self.errors)
            .into_response()
    }
}
