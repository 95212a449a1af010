//! Numeric-safe JSON codec.
//!
//! Outgoing bodies are plain JSON. Incoming bodies are parsed with the exact
//! text of every number token retained (serde_json `arbitrary_precision`), then
//! walked once: literals beyond the IEEE-754 safe range, and fractions an
//! `f64` cannot reproduce digit for digit, become strings holding their
//! original text. Every other number is rebuilt as an ordinary
//! `i64`/`u64`/`f64` value. Object key order and array order are kept
//! (`preserve_order`).

use serde::Serialize;
use serde_json::{Number, Value};
use thiserror::Error;

use crate::error::ClientError;

/// 2^53, the largest magnitude an `f64` holds for every integer below it.
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_992;

/// Decimal digits in [`MAX_SAFE_INTEGER`].
const MAX_SAFE_DIGITS: usize = 16;

/// The response body is not valid JSON. `raw` is the body, untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed response: {reason}")]
pub struct MalformedResponse {
    pub raw: String,
    pub reason: String,
}

/// Serialize an outgoing request body.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, ClientError> {
    serde_json::to_string(value).map_err(|e| ClientError::Serialize(e.to_string()))
}

/// Decode a response body, keeping oversized integers as exact strings.
pub fn decode(raw: &str) -> Result<Value, MalformedResponse> {
    let parsed: Value = serde_json::from_str(raw)
        .map_err(|e| MalformedResponse { raw: raw.to_string(), reason: e.to_string() })?;
    Ok(normalize(parsed))
}

/// Like [`decode`], but an undecodable body degrades to `Value::String(raw)`.
pub fn decode_or_raw(raw: &str) -> Value {
    match decode(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Returning raw response body: {}", e);
            Value::String(e.raw)
        }
    }
}

fn normalize(value: Value) -> Value {
    match value {
        Value::Number(n) => normalize_number(n),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        Value::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, normalize(v))).collect()),
        other => other,
    }
}

fn normalize_number(n: Number) -> Value {
    let literal = n.to_string();

    if is_integer_literal(&literal) {
        if exceeds_safe_range(&literal) {
            return Value::String(literal);
        }
        if let Some(i) = n.as_i64() {
            return Value::Number(i.into());
        }
        if let Some(u) = n.as_u64() {
            return Value::Number(u.into());
        }
        return Value::Number(n);
    }

    // Fractions and exponents stay numeric only when the f64 is in the safe
    // range and spells the same significant digits as the literal.
    match n.as_f64().filter(|f| f.is_finite()) {
        Some(float) if float.abs() <= MAX_SAFE_INTEGER as f64 && reproduces(&literal, float) => {
            Number::from_f64(float).map_or(Value::String(literal), Value::Number)
        }
        _ => Value::String(literal),
    }
}

/// Whether `float`'s shortest representation carries the literal's digits.
fn reproduces(literal: &str, float: f64) -> bool {
    let shortest = format!("{:e}", float);
    matches!(
        (significand(literal), significand(&shortest)),
        (Some(a), Some(b)) if a == b
    )
}

/// Sign, significant digits and decimal exponent of a JSON number literal,
/// with leading and trailing zeros stripped. Zero is `(false, "", 0)`.
fn significand(literal: &str) -> Option<(bool, String, i64)> {
    let (negative, unsigned) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal),
    };
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], unsigned[at + 1..].parse::<i64>().ok()?),
        None => (unsigned, 0),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let joined = format!("{}{}", whole, fraction);
    let trimmed = joined.trim_start_matches('0');
    let digits = trimmed.trim_end_matches('0');
    if digits.is_empty() {
        return Some((false, String::new(), 0));
    }
    let trailing = (trimmed.len() - digits.len()) as i64;
    Some((negative, digits.to_string(), exponent - fraction.len() as i64 + trailing))
}

fn is_integer_literal(literal: &str) -> bool {
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn exceeds_safe_range(literal: &str) -> bool {
    let digits = literal.strip_prefix('-').unwrap_or(literal).trim_start_matches('0');
    match digits.len() {
        len if len > MAX_SAFE_DIGITS => true,
        MAX_SAFE_DIGITS => digits.parse::<u64>().map_or(true, |v| v > MAX_SAFE_INTEGER),
        _ => false,
    }
}
