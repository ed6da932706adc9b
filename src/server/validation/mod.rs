//! Request payload validation.
//!
//! Validation is decoupled from the web framework: it reads a raw `serde_json::Value` and
//! either produces a normalized, typed parameter struct or a [`ValidationError`] listing
//! every violated field. Rules never short-circuit across fields, so a single response
//! reports all problems at once.
//!
//! - [`Validator`] accumulates violations and extracts typed values
//! - [`rules`] holds the individual predicates and coercions
//! - [`accommodation`] applies the accommodation field rules

pub mod accommodation;
pub mod rules;

use serde_json::Value;
use std::collections::BTreeMap;

use crate::server::error::validation::ValidationError;

/// Collects field violations while typed values are pulled from a payload.
///
/// Every extraction method takes two names: `key`, the internal field name violations are
/// reported under, and `path`, the dot-separated location of the value in the payload.
/// They differ for renamed fields such as `image` → `image_url`.
pub struct Validator<'a> {
    payload: &'a Value,
    errors: BTreeMap<String, Vec<String>>,
}

impl<'a> Validator<'a> {
    pub fn new(payload: &'a Value) -> Self {
        Self {
            payload,
            errors: BTreeMap::new(),
        }
    }

    /// Records a violation for `key`.
    pub fn fail(&mut self, key: &str, message: impl Into<String>) {
        self.errors
            .entry(key.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns the value at `path` if it is present, otherwise records a required violation.
    ///
    /// Null, blank strings, and empty arrays or objects count as absent.
    pub fn required(&mut self, key: &str, path: &str) -> Option<&'a Value> {
        let value = rules::lookup(self.payload, path).filter(|value| rules::is_present(value));

        if value.is_none() {
            self.fail(key, format!("The {} field is required.", rules::display_name(key)));
        }

        value
    }

    /// Extracts a required string, trimmed.
    pub fn string(&mut self, key: &str, path: &str) -> Option<String> {
        match self.required(key, path)? {
            Value::String(s) => Some(s.trim().to_string()),
            _ => {
                self.fail(key, format!("The {} must be a string.", rules::display_name(key)));
                None
            }
        }
    }

    /// Extracts a required integer, coercing integral floats and numeric strings.
    pub fn integer(&mut self, key: &str, path: &str) -> Option<i64> {
        let value = self.required(key, path)?;

        let integer = rules::coerce_integer(value);
        if integer.is_none() {
            self.fail(key, format!("The {} must be an integer.", rules::display_name(key)));
        }

        integer
    }

    /// Checks `min <= value <= max`, recording one message per violated bound.
    pub fn between(&mut self, key: &str, value: i64, min: i64, max: i64) -> bool {
        let name = rules::display_name(key);

        if value < min {
            self.fail(key, format!("The {} must be at least {}.", name, min));
            return false;
        }
        if value > max {
            self.fail(key, format!("The {} may not be greater than {}.", name, max));
            return false;
        }

        true
    }

    /// Finishes validation.
    ///
    /// # Arguments
    /// - `value` - The assembled result, `None` when any field failed extraction
    ///
    /// # Returns
    /// - `Ok(T)` - No violations were recorded
    /// - `Err(ValidationError)` - At least one violation was recorded
    pub fn finish<T>(self, value: Option<T>) -> Result<T, ValidationError> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(ValidationError::new(self.errors)),
        }
    }
}
