//! Individual validation predicates and coercions.

use serde_json::Value;

/// Marketing words an accommodation name may not contain, matched case-insensitively.
pub const NAME_BLOCKLIST: [&str; 4] = ["free", "offer", "book", "website"];

/// Minimum number of characters in an accommodation name.
pub const NAME_MIN_LENGTH: usize = 10;

/// Number of decimal digits in a zip code.
pub const ZIP_CODE_DIGITS: usize = 5;

/// Resolves a dot-separated path inside nested JSON objects.
pub fn lookup<'a>(payload: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(payload, |value, segment| value.as_object()?.get(segment))
}

/// Whether a value satisfies a `required` rule.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// Human readable field name used in messages, e.g. `location.zip_code` → `location.zip code`.
pub fn display_name(key: &str) -> String {
    key.replace('_', " ")
}

/// Interprets a JSON value as a 64-bit integer.
///
/// Accepts JSON integers, floats without a fractional part, and strings holding an
/// optionally signed decimal integer. Everything else is rejected.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Whether `name` contains any blocklisted word anywhere, ignoring case.
pub fn contains_blocklisted_word(name: &str) -> bool {
    let lowered = name.to_lowercase();
    NAME_BLOCKLIST.iter().any(|word| lowered.contains(word))
}

/// Whether `value` is an absolute URL with a host, such as `https://example.com/a.png`.
pub fn is_absolute_url(value: &str) -> bool {
    url::Url::parse(value)
        .map(|url| url.has_host())
        .unwrap_or(false)
}

/// Textual digits of a zip code value as submitted.
///
/// Numbers are rendered in decimal, so negative values fail the digit check. Strings are
/// only trimmed, which keeps leading zeros.
pub fn zip_code_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i.to_string()),
            None => coerce_integer(value).map(|i| i.to_string()),
        },
        Value::String(s) => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Whether `value` consists of exactly `digits` ASCII decimal digits.
pub fn has_exact_digits(value: &str, digits: usize) -> bool {
    value.len() == digits && value.bytes().all(|b| b.is_ascii_digit())
}
