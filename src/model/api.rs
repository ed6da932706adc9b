use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Problem-detail body returned for every non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProblemDto {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub detail: String,
    pub status: u16,
    /// Field path to violation messages, present only for validation failures.
    #[serde(
        rename = "invalid-params",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub invalid_params: Option<BTreeMap<String, Vec<String>>>,
}
