//! JavaScript values as loosely typed `serde_json::Value`s
//!
//! `undefined` maps to `None` and `null` to `Value::Null`, so the document
//! mutators can tell them apart in their diagnostics.

use js_sys::Array;
use serde_json::{Map, Number, Value};
use touchstone_core::touchstone::value::format_number;
use wasm_bindgen::JsValue;

/// Convert a JavaScript value for the loose mutators
pub(crate) fn from_js(value: &JsValue) -> Option<Value> {
    if value.is_undefined() {
        None
    } else {
        Some(to_value(value))
    }
}

fn to_value(value: &JsValue) -> Value {
    if value.is_null() || value.is_undefined() {
        // `undefined` array items join as empty strings, same as null
        Value::Null
    } else if let Some(x) = value.as_f64() {
        number(x)
    } else if let Some(s) = value.as_string() {
        Value::String(s)
    } else if let Some(b) = value.as_bool() {
        Value::Bool(b)
    } else if Array::is_array(value) {
        Value::Array(Array::from(value).iter().map(|item| to_value(&item)).collect())
    } else {
        Value::Object(Map::new())
    }
}

/// JSON has no NaN or Infinity; keep their JavaScript spelling as a string so
/// diagnostics still echo them and no mutator accepts them
fn number(x: f64) -> Value {
    Number::from_f64(x)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(format_number(x)))
}
