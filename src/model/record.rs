//! Row abstraction consumed by the data-table engine.
//!
//! The engine never inspects rows directly. It asks a row for the value stored
//! under a key and works with the resulting [`FieldValue`].

use serde_json::{Map, Value};
use std::fmt;

/// A single value read out of a row.
///
/// Mirrors the loosely-typed cell values found in JSON data: numbers compare
/// numerically, everything else compares through its textual form.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// Numeric value.
    Number(f64),
    /// String value.
    Text(String),
    /// Boolean value.
    Bool(bool),
    /// Absent or null value. Renders as the empty string.
    #[default]
    Missing,
}

impl FieldValue {
    /// Numeric payload, if this value is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Textual representation used for display and for string comparison.
    ///
    /// Integral numbers print without a fractional part (`2`, not `2.0`) and
    /// `Missing` becomes the empty string.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Number(n) if n.is_infinite() => {
                if n.is_sign_positive() {
                    "Infinity".to_string()
                } else {
                    "-Infinity".to_string()
                }
            }
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Missing => String::new(),
        }
    }

    /// Check if the value is absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl<V: Into<FieldValue>> From<Option<V>> for FieldValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Missing)
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Missing,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => n
                .as_f64()
                .map(FieldValue::Number)
                .unwrap_or_else(|| FieldValue::Text(n.to_string())),
            Value::String(s) => FieldValue::Text(s.clone()),
            // Nested structures have no natural ordering; compare by compact JSON.
            other @ (Value::Array(_) | Value::Object(_)) => FieldValue::Text(other.to_string()),
        }
    }
}

/// A row that exposes keyed fields to the data-table engine.
///
/// `Key` plays the role of a property name. Columns refer to rows only
/// through keys, so the same engine works for typed structs (with a field
/// enum as key) and for untyped JSON objects (with `String` keys).
pub trait Record {
    /// Key type naming a field of the row.
    type Key: Clone + PartialEq + fmt::Debug;

    /// Read the value stored under `key`. Unknown keys yield [`FieldValue::Missing`].
    fn field(&self, key: &Self::Key) -> FieldValue;
}

impl Record for Map<String, Value> {
    type Key = String;

    fn field(&self, key: &String) -> FieldValue {
        self.get(key).map(FieldValue::from).unwrap_or_default()
    }
}

impl Record for Value {
    type Key = String;

    fn field(&self, key: &String) -> FieldValue {
        match self {
            Value::Object(map) => map.field(key),
            _ => FieldValue::Missing,
        }
    }
}
