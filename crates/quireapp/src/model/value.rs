//! Stored document values.
//!
//! Documents keep schema-defined data in an open map keyed by field name. The
//! map's values are a closed set of shapes so that formatting can match on
//! them exhaustively instead of guessing at runtime types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Runtime representation of a single stored value.
///
/// Serialized adjacently tagged, e.g. `{"kind": "text", "value": "hello"}`,
/// so the JSON backend round-trips numbers, timestamps and ids without
/// ambiguity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// Free text, and every date/time value as entered (`2022-04-14`, `12:08`)
    Text(String),

    Number(f64),

    /// An absolute instant (e.g. the synthetic `published` attribute)
    Timestamp(DateTime<Utc>),

    /// Reference to another record by id
    Reference(Uuid),

    /// Multiple selections of a multiselect field
    List(Vec<String>),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<Uuid> {
        match self {
            Value::Reference(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Timestamp(t)
    }
}

impl From<Uuid> for Value {
    fn from(id: Uuid) -> Self {
        Value::Reference(id)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}
