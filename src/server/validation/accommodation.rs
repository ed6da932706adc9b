//! Field rules for accommodation create and update payloads.
//!
//! The payload uses external names (`image`, `reputationBadge`); violations are reported
//! under internal names (`image_url`, `reputation_badge`) with dot notation for location
//! fields. Update is a full replace, so both operations share the same rules.

use serde_json::Value;

use crate::{
    model::accommodation::{Category, ReputationBadge},
    server::{
        error::validation::ValidationError,
        model::accommodation::{AccommodationParams, LocationParams},
        validation::{rules, Validator},
    },
};

/// Validates an accommodation payload.
///
/// Every field is checked even after earlier failures, so the error lists all violations.
///
/// # Returns
/// - `Ok(AccommodationParams)` - Normalized fields with internal names
/// - `Err(ValidationError)` - Field path to messages for every violated field
pub fn validate(payload: &Value) -> Result<AccommodationParams, ValidationError> {
    let mut v = Validator::new(payload);

    let name = name(&mut v);
    let rating = bounded_integer(&mut v, "rating", 0, 5);
    let category = category(&mut v);
    let image_url = image_url(&mut v);
    let reputation = v.integer("reputation", "reputation");
    let reputation_badge = reputation_badge(&mut v, reputation);
    let reputation = reputation
        .filter(|&r| v.between("reputation", r, 0, 1000))
        .and_then(|r| i32::try_from(r).ok());
    let price = v.integer("price", "price");
    let availability = v.integer("availability", "availability");

    let city = v.string("location.city", "location.city");
    let state = v.string("location.state", "location.state");
    let country = v.string("location.country", "location.country");
    let zip_code = zip_code(&mut v);
    let address = v.string("location.address", "location.address");

    let params = (|| {
        Some(AccommodationParams {
            name: name?,
            rating: rating?,
            category: category?,
            image_url: image_url?,
            reputation: reputation?,
            reputation_badge: reputation_badge?,
            price: price?,
            availability: availability?,
            location: LocationParams {
                city: city?,
                state: state?,
                country: country?,
                zip_code: zip_code?,
                address: address?,
            },
        })
    })();

    v.finish(params)
}

fn name(v: &mut Validator) -> Option<String> {
    let name = v.string("name", "name")?;
    let mut valid = true;

    if name.chars().count() < rules::NAME_MIN_LENGTH {
        v.fail(
            "name",
            format!(
                "The name must be at least {} characters.",
                rules::NAME_MIN_LENGTH
            ),
        );
        valid = false;
    }
    if rules::contains_blocklisted_word(&name) {
        v.fail("name", "The name format is invalid.");
        valid = false;
    }

    valid.then_some(name)
}

fn bounded_integer(v: &mut Validator, key: &str, min: i64, max: i64) -> Option<i32> {
    let value = v.integer(key, key)?;

    if !v.between(key, value, min, max) {
        return None;
    }

    i32::try_from(value).ok()
}

fn category(v: &mut Validator) -> Option<Category> {
    let raw = v.string("category", "category")?;

    match raw.parse::<Category>() {
        Ok(category) => Some(category),
        Err(_) => {
            v.fail("category", "The selected category is invalid.");
            None
        }
    }
}

fn image_url(v: &mut Validator) -> Option<String> {
    let url = v.string("image_url", "image")?;

    if rules::is_absolute_url(&url) {
        Some(url)
    } else {
        v.fail("image_url", "The image url format is invalid.");
        None
    }
}

/// The badge must name a band and equal the band of `reputation`.
///
/// Consistency is only checked when `reputation` is an integer; a missing or non-integer
/// reputation is already reported under its own key.
fn reputation_badge(v: &mut Validator, reputation: Option<i64>) -> Option<ReputationBadge> {
    let key = "reputation_badge";
    let raw = v.string(key, "reputationBadge")?;

    let badge = raw.parse::<ReputationBadge>().ok();
    if badge.is_none() {
        v.fail(key, "The selected reputation badge is invalid.");
    }

    if let Some(reputation) = reputation {
        if raw != ReputationBadge::for_reputation(reputation).as_str() {
            v.fail(key, "reputation_badge is invalid.");
            return None;
        }
    }

    badge
}

fn zip_code(v: &mut Validator) -> Option<String> {
    let key = "location.zip_code";
    let value = v.required(key, key)?;

    let is_integer = rules::coerce_integer(value).is_some();
    if !is_integer {
        v.fail(key, "The location.zip code must be an integer.");
    }

    let digits = rules::zip_code_text(value)
        .filter(|text| rules::has_exact_digits(text, rules::ZIP_CODE_DIGITS));
    if digits.is_none() {
        v.fail(
            key,
            format!(
                "The location.zip code must be {} digits.",
                rules::ZIP_CODE_DIGITS
            ),
        );
    }

    digits.filter(|_| is_integer)
}
