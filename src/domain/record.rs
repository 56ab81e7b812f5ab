//! Record model and value coercion
//!
//! A record is one parsed JSON object. Field order is preserved end to end
//! (`serde_json` is built with `preserve_order`), so the redacted record
//! serializes with the same key order as the input. Numbers keep their source
//! digits (`arbitrary_precision`), so integers wider than 64 bits survive
//! unchanged.
//!
//! Every detector and masker sees field values through [`value_text`] and
//! [`is_present`], which fix a single text representation for each JSON type:
//!
//! | JSON value      | text                   | present             |
//! |-----------------|------------------------|---------------------|
//! | string          | the string             | non-empty           |
//! | number          | decimal representation | non-zero            |
//! | bool            | `true` / `false`       | `true` only         |
//! | null            | empty string           | never               |
//! | array / object  | compact JSON           | non-empty           |

use serde_json::{Map, Value};
use std::borrow::Cow;

/// Ordered field-name to value mapping parsed from one payload
pub type Record = Map<String, Value>;

/// Coerce a JSON value to the text that patterns are matched against
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(n.to_string()),
        // Serializing a Value to a String cannot fail.
        other => Cow::Owned(serde_json::to_string(other).unwrap_or_default()),
    }
}

/// Whether a value counts as a non-empty field
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
