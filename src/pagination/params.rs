//! Integer parameter validation
//!
//! Page and let values arrive as loosely typed request input. They are
//! accepted only when they are strict integer literals; everything else is
//! replaced by the documented default.

use serde_json::Value;
use tracing::debug;

/// Parse a strict integer literal
///
/// Surrounding whitespace and a single leading sign are allowed. Leading
/// zeros, decimal points, exponents and out-of-range values are rejected.
pub fn filter_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }

    trimmed.parse::<i64>().ok()
}

/// Extract an integer from a JSON value
///
/// Integral numbers (including floats without a fractional part) and strict
/// integer strings are accepted. `true` counts as 1.
pub fn int_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }
        Value::String(s) => filter_int(s),
        Value::Bool(true) => Some(1),
        _ => None,
    }
}

/// Check whether a value counts as "not supplied"
///
/// Null, `false`, zero, `""`, `"0"` and empty collections fall through to
/// the resolver.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Pick the supplied value when it is truthy, otherwise ask the resolver
fn supplied_or_resolved(supplied: Option<&Value>, resolve: impl FnOnce() -> u64) -> Value {
    match supplied {
        Some(value) if !is_falsy(value) => value.clone(),
        _ => Value::from(resolve()),
    }
}

/// Normalize the current page: an integer >= 1, otherwise 1
pub(crate) fn normalize_page(
    page_name: &str,
    supplied: Option<&Value>,
    resolve: impl FnOnce() -> u64,
) -> u64 {
    let candidate = supplied_or_resolved(supplied, resolve);
    match int_value(&candidate) {
        Some(page) if page >= 1 => page as u64,
        _ => {
            debug!(param = page_name, raw = %candidate, "Invalid page value, using 1");
            1
        }
    }
}

/// Normalize the current let: an integer >= 0, otherwise 0
pub(crate) fn normalize_let(
    let_name: &str,
    supplied: Option<&Value>,
    resolve: impl FnOnce() -> u64,
) -> u64 {
    let candidate = supplied_or_resolved(supplied, resolve);
    match int_value(&candidate) {
        Some(current_let) if current_let >= 0 => current_let as u64,
        _ => {
            debug!(param = let_name, raw = %candidate, "Invalid let value, using 0");
            0
        }
    }
}
