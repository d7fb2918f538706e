//! Primitive field values

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// An owned primitive field value
///
/// Deserialized untagged, so plain JSON scalars map directly:
/// `null`, `true`, `42`, `"text"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Explicit null
    Null,
    /// Boolean flag (e.g. `isVerified`)
    Flag(bool),
    /// Numeric value
    Number(Number),
    /// Text value
    Text(String),
}

impl FieldValue {
    /// Creates a text value
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    /// Creates a flag value
    pub fn flag(b: bool) -> Self {
        FieldValue::Flag(b)
    }

    /// Creates a numeric value from an integer
    pub fn int(n: i64) -> Self {
        FieldValue::Number(Number::from(n))
    }

    /// Borrows this value for comparison
    pub fn as_field_ref(&self) -> FieldRef<'_> {
        match self {
            FieldValue::Null => FieldRef::Missing,
            FieldValue::Flag(b) => FieldRef::Flag(*b),
            FieldValue::Number(n) => FieldRef::Number(n.as_f64().unwrap_or(0.0)),
            FieldValue::Text(s) => FieldRef::Text(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::int(n)
    }
}

/// A borrowed view of a field used by the query engine
///
/// `Missing` covers absent fields, nulls, and JSON shapes that are not
/// primitives. It compares and matches as the empty string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRef<'a> {
    Missing,
    Flag(bool),
    Number(f64),
    Text(&'a str),
}

impl<'a> FieldRef<'a> {
    /// Borrows a JSON value as a field
    pub fn from_json(value: &'a Value) -> Self {
        match value {
            Value::Bool(b) => FieldRef::Flag(*b),
            Value::Number(n) => FieldRef::Number(n.as_f64().unwrap_or(0.0)),
            Value::String(s) => FieldRef::Text(s),
            Value::Null | Value::Array(_) | Value::Object(_) => FieldRef::Missing,
        }
    }

    /// Textual form used for substring matching
    pub fn as_text(&self) -> Cow<'a, str> {
        match *self {
            FieldRef::Missing => Cow::Borrowed(""),
            FieldRef::Flag(b) => Cow::Owned(b.to_string()),
            FieldRef::Number(n) => Cow::Owned(n.to_string()),
            FieldRef::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl fmt::Display for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text())
    }
}
