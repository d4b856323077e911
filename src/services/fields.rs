//! Field rendering for arbitrary key/value payloads.

use serde_json::{Map, Value};

use crate::models::Field;

/// Renders one field per entry, in input order
pub fn render_fields(entries: &Map<String, Value>) -> Vec<Field> {
    entries
        .iter()
        .map(|(key, value)| Field::sized(Some(key.clone()), render_value(value)))
        .collect()
}

/// Composite values become inline-code JSON; scalars use their plain form
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => format!("`{}`", value),
        _ => plain_text(value),
    }
}

/// Plain string form of a value. Strings are not quoted; other scalars keep
/// their JSON spelling (`true`, `null`).
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
