use core::fmt;

use ahash::AHashMap;
use serde_json::Value;

/// Key-value storage of a JSON object.
pub type Object = AHashMap<String, JsonValue>;

/// A decoded JSON value.
///
/// Numbers are always stored as `f64`, JSON makes no distinction between
/// integers and floats. With the `arbitrary-precision` feature, numbers beyond
/// the `f64` range become infinities of the same sign. Those have no JSON form and
/// are displayed as `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(Object),
}

/// The kind of a [`JsonValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Number,
    Bool,
    String,
    Array,
    Object,
    Null,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueType::Number => "number",
            ValueType::Bool => "boolean",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
            ValueType::Null => "null",
        })
    }
}

impl From<&Value> for ValueType {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }
}

impl JsonValue {
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            JsonValue::Null => ValueType::Null,
            JsonValue::Bool(_) => ValueType::Bool,
            JsonValue::Number(_) => ValueType::Number,
            JsonValue::String(_) => ValueType::String,
            JsonValue::Array(_) => ValueType::Array,
            JsonValue::Object(_) => ValueType::Object,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        if let JsonValue::Number(number) = self {
            Some(*number)
        } else {
            None
        }
    }

    /// Truncates towards zero, saturating at the `i64` bounds. `NaN` maps to `0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_f64().map(|number| number as i64)
    }

    /// Truncates towards zero, saturating at the `u64` bounds. Negative numbers map to `0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_u64(&self) -> Option<u64> {
        self.as_f64().map(|number| number as u64)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        if let JsonValue::Bool(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let JsonValue::String(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        if let JsonValue::Array(items) = self {
            Some(items)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        if let JsonValue::Object(object) = self {
            Some(object)
        } else {
            None
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(num) => JsonValue::Number(num.as_f64().unwrap_or_else(|| {
                // Only `arbitrary_precision` numbers outside of the `f64` range lack a float form
                if num.to_string().starts_with('-') {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            })),
            Value::String(s) => JsonValue::String(s),
            Value::Array(items) => JsonValue::Array(items.into_iter().map(JsonValue::from).collect()),
            Value::Object(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number),
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            JsonValue::Object(object) => Value::Object(
                object
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Value::from(self), f)
    }
}
