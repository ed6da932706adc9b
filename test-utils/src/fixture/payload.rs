//! Request payload fixtures for the accommodation endpoints.
//!
//! Payloads use the external field names accepted by the API (`image`,
//! `reputationBadge`) and match the defaults of the accommodation and location
//! entity fixtures.

use serde_json::{json, Value};

use crate::fixture::{accommodation, location};

/// Returns a payload that passes validation.
pub fn valid() -> Value {
    json!({
        "name": accommodation::DEFAULT_NAME,
        "rating": accommodation::DEFAULT_RATING,
        "category": accommodation::DEFAULT_CATEGORY,
        "image": accommodation::DEFAULT_IMAGE_URL,
        "reputation": accommodation::DEFAULT_REPUTATION,
        "reputationBadge": accommodation::DEFAULT_REPUTATION_BADGE,
        "price": accommodation::DEFAULT_PRICE,
        "availability": accommodation::DEFAULT_AVAILABILITY,
        "location": {
            "city": location::DEFAULT_CITY,
            "state": location::DEFAULT_STATE,
            "country": location::DEFAULT_COUNTRY,
            "zip_code": 62448,
            "address": location::DEFAULT_ADDRESS,
        }
    })
}

/// Returns the valid payload with one top-level field replaced.
///
/// # Example
///
/// ```rust,ignore
/// let body = fixture::payload::valid_with("reputationBadge", "red".into());
/// ```
pub fn valid_with(field: &str, value: Value) -> Value {
    let mut payload = valid();
    payload[field] = value;
    payload
}

/// Returns the valid payload with one location field replaced.
pub fn valid_with_location(field: &str, value: Value) -> Value {
    let mut payload = valid();
    payload["location"][field] = value;
    payload
}

/// Returns the valid payload with one top-level field removed.
pub fn valid_without(field: &str) -> Value {
    let mut payload = valid();
    if let Some(object) = payload.as_object_mut() {
        object.remove(field);
    }
    payload
}
