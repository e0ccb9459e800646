//! Compact JSON serializer.
//!
//! Walks a [`Value`] tree recursively and renders canonical compact text:
//! `", "` between elements, `": "` after keys, no other whitespace, empty
//! containers as `{}` / `[]`. Object entries appear in the map's
//! lexicographic key order, so the output is deterministic for a given
//! value regardless of how it was built.

use std::collections::BTreeMap;

use crate::escape::escape_into;
use crate::value::Value;

/// Serialize a value to compact JSON text.
///
/// ```rust
/// use jsonette_core::{serialize, Value};
///
/// let mut doc = Value::default();
/// doc["pi"] = Value::from(3.14);
/// assert_eq!(serialize(&doc), r#"{"pi": 3.14}"#);
/// ```
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(*n, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => write_array(items, out),
        Value::Object(entries) => write_object(entries, out),
    }
}

fn write_object(entries: &BTreeMap<String, Value>, out: &mut String) {
    out.push('{');
    let mut first = true;
    for (key, value) in entries {
        if !first {
            out.push_str(", ");
        }
        first = false;
        // Keys get the same quoting and escaping as string values.
        write_string(key, out);
        out.push_str(": ");
        write_value(value, out);
    }
    out.push('}');
}

fn write_array(items: &[Value], out: &mut String) {
    out.push('[');
    let mut first = true;
    for item in items {
        if !first {
            out.push_str(", ");
        }
        first = false;
        write_value(item, out);
    }
    out.push(']');
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    escape_into(s, out);
    out.push('"');
}

/// Render a number with `f64`'s shortest-round-trip formatting: integral
/// doubles print without a trailing `.0`, so `996.0` renders as `996`.
/// JSON has no lexeme for NaN or infinity; non-finite numbers render as
/// `null`.
fn write_number(n: f64, out: &mut String) {
    if n.is_finite() {
        out.push_str(&n.to_string());
    } else {
        out.push_str("null");
    }
}
