//! Visitor-count payload handling.
//!
//! The endpoint answers with a JSON object carrying `viewercount`. Whatever the
//! server sends is shown verbatim, so the value is kept as display text rather
//! than forced into an integer.

use std::fmt;

use serde_json::{Number, Value};
use thiserror::Error;

use crate::constants::VIEWER_COUNT_FIELD;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("Field `viewercount` holds an unsupported {0}")]
    Unsupported(&'static str),
}

/// Count as it should appear on the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewerCount(String);

impl ViewerCount {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the display text of `viewercount` from a response body.
///
/// A missing or `null` field yields empty text.
///
/// # Errors
///
/// Returns an error when the body is not JSON, not an object, or the field is
/// an array or object.
pub fn parse_viewer_count(body: &str) -> Result<ViewerCount, PayloadError> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Object(map) = value else {
        return Err(PayloadError::NotAnObject(kind_of(&value)));
    };
    let text = match map.get(VIEWER_COUNT_FIELD) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => format_number(n),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => return Err(PayloadError::Unsupported(kind_of(other))),
    };
    Ok(ViewerCount(text))
}

// Number-to-string as the browser does it: the value goes through `f64`, the
// shortest round-trip digits are kept, and exponent form applies outside
// 1e-7..1e21.
fn format_number(n: &Number) -> String {
    n.as_f64().map_or_else(|| n.to_string(), js_number_to_string)
}

fn js_number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value == 0.0 {
        return "0".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = i64::try_from(digits.len()).unwrap_or(i64::MAX);
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        let zeros = usize::try_from(n - k).unwrap_or(0);
        format!("{digits}{}", "0".repeat(zeros))
    } else if 0 < n && n <= 21 {
        let split = usize::try_from(n).unwrap_or(0);
        format!("{}.{}", &digits[..split], &digits[split..])
    } else if -6 < n && n <= 0 {
        let zeros = usize::try_from(-n).unwrap_or(0);
        format!("0.{}{digits}", "0".repeat(zeros))
    } else {
        let exp_sign = if n - 1 < 0 { "-" } else { "+" };
        let (lead, rest) = digits.split_at(1);
        let fraction = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        format!("{lead}{fraction}e{exp_sign}{}", (n - 1).abs())
    };
    format!("{sign}{body}")
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
