//! Classification and summary formatting of JSON values.

#[cfg(test)]
#[path = "value_test.rs"]
mod value_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::{ELLIPSIS, MAX_DISPLAY_CHARS};

/// The JSON kind of a value, as shown on a field row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Whether values of this kind have children that expand into further nodes.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    /// Lowercase name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// Classify a JSON value.
#[must_use]
pub fn classify(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Boolean,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

/// Render a short summary of a value for display inside a field row.
///
/// Containers render as `Array[n]` / `Object[n]`. Strings longer than
/// [`MAX_DISPLAY_CHARS`] characters keep their first characters followed by
/// `...`; shorter strings are shown verbatim without quotes. Other scalars use
/// their JSON text.
#[must_use]
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("Array[{}]", items.len()),
        Value::Object(map) => format!("Object[{}]", map.len()),
        Value::String(s) => truncate(s),
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
    }
}

fn truncate(s: &str) -> String {
    match s.char_indices().nth(MAX_DISPLAY_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &s[..cut]),
        None => s.to_owned(),
    }
}
