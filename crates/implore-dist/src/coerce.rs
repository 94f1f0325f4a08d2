//! Numeric coercion for loosely typed input
//!
//! Calculator front ends hand over form fields as JSON values or raw
//! strings. These helpers apply the conventional dynamic-language
//! number conversion (`null` is 0, an empty string is 0, `"0x1f"` is 31)
//! and fail with [`DistError::InvalidInput`] wherever that conversion
//! would produce not-a-number.

use serde_json::Value;

use crate::error::{DistError, DistResult};

/// Coerce an arbitrary JSON value to a number
///
/// - `null` → 0, booleans → 0 or 1, numbers → themselves
/// - strings → [`to_number_str`]
/// - `[]` → 0, single-element arrays → their element's string form
/// - everything else fails
pub fn to_number(v: &Value) -> DistResult<f64> {
    match v {
        Value::Null => Ok(0.0),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64().ok_or_else(|| invalid(v)),
        Value::String(s) => to_number_str(s),
        Value::Array(items) => array_to_number(items).ok_or_else(|| invalid(v)),
        Value::Object(_) => Err(invalid(v)),
    }
}

/// Coerce a string to a number
///
/// Surrounding whitespace is ignored and an empty string is 0. Accepts
/// decimal literals (`"1.5"`, `".5"`, `"-2e3"`), `Infinity` with an
/// optional sign, and unsigned `0x`/`0o`/`0b` integers.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn to_number_str(s: &str) -> DistResult<f64> {
    parse_numeric(s.trim()).ok_or_else(|| {
        tracing::debug!(input = s, "rejected non-numeric input");
        DistError::InvalidInput(format!("cannot convert {:?} to a number", s))
    })
}

fn invalid(v: &Value) -> DistError {
    tracing::debug!(input = %v, "rejected non-numeric input");
    DistError::InvalidInput(format!("cannot convert {} to a number", v))
}

/// Arrays convert through their comma-joined string form, so only
/// empty and single-element arrays can be numeric.
fn array_to_number(items: &[Value]) -> Option<f64> {
    match items {
        [] => Some(0.0),
        [only] => match only {
            // null joins as the empty string
            Value::Null => Some(0.0),
            // "true" / "false" are not numeric strings
            Value::Bool(_) => None,
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_numeric(s.trim()),
            Value::Array(inner) => array_to_number(inner),
            Value::Object(_) => None,
        },
        _ => None,
    }
}

fn parse_numeric(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = parse_radix_literal(s) {
        return value;
    }

    // f64::from_str also takes "inf" and "NaN"; restrict to plain decimal literals first
    let well_formed = s.bytes().any(|c| c.is_ascii_digit())
        && s
            .bytes()
            .all(|c| c.is_ascii_digit() || matches!(c, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !well_formed {
        return None;
    }
    s.parse::<f64>().ok()
}

/// `Some(result)` when `s` carries a radix prefix, `None` otherwise
fn parse_radix_literal(s: &str) -> Option<Option<f64>> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(None);
    }
    let mut acc = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return Some(None),
        }
    }
    Some(Some(acc))
}
