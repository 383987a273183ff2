//! Loosely typed inputs for the document mutators
//!
//! Dynamic callers (the wasm binding, JSON configuration) hand values over as
//! `serde_json::Value`, with `None` standing for an absent (`undefined`) value.
//! Diagnostics echo the offending value the way JavaScript's `String(value)`
//! renders it.

use serde_json::Value;

/// Render a loose value like JavaScript `String(value)`
pub fn stringify(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(value) => stringify_value(value),
    }
}

fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(x) if n.is_f64() => format_number(x),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // Array.prototype.join renders holes and nulls as empty strings
                Value::Null => String::new(),
                other => stringify_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Format a float the way JavaScript prints numbers
pub fn format_number(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x.is_infinite() {
        if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if x == 0.0 {
        "0".to_string()
    } else {
        x.to_string()
    }
}

/// Extract a finite number, rejecting every other shape
pub(crate) fn as_finite(value: &Value) -> Option<f64> {
    value.as_f64().filter(|x| x.is_finite())
}

/// `None` and `null` both mean "clear the field" for the lenient mutators
pub(crate) fn is_unset(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}
