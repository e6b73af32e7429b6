use serde_json::{Map, Value};

/// Inserts `value` under `key` only when it is present.
pub(crate) fn insert_opt<V>(map: &mut Map<String, Value>, key: &str, value: Option<V>)
where
    V: Into<Value>,
{
    if let Some(value) = value {
        map.insert(key.to_string(), value.into());
    }
}

/// Inserts `true` under `key` when the flag is set. HAL omits false flags.
pub(crate) fn insert_flag(map: &mut Map<String, Value>, key: &str, flag: bool) {
    if flag {
        map.insert(key.to_string(), Value::Bool(true));
    }
}

/// Human readable name of a JSON value's type, used in error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
