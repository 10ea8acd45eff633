use serde_json::Value;
use std::collections::HashMap;

/// Read access to the caller-owned form-state container. The core never
/// owns or mutates the store; validators only read through this seam.
pub trait ValueSource {
    /// The value stored at a dotted instance path; `Value::Null` when unset.
    fn value(&self, path: &str) -> Value;
}

impl<F> ValueSource for F
where
    F: Fn(&str) -> Value,
{
    fn value(&self, path: &str) -> Value {
        self(path)
    }
}

/// Adapt a flat path→value map to a [`ValueSource`].
pub fn map_source(values: &HashMap<String, Value>) -> impl ValueSource + '_ {
    move |path: &str| values.get(path).cloned().unwrap_or(Value::Null)
}

/// Whether a value counts as unanswered: `null`, the empty string, or an
/// empty array.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
