//! Value kinds and decoded values.
//!
//! Every column of the field table declares one [`ValueKind`]. Decoding a
//! non-empty column applies exactly one rule per kind:
//!
//! | Kind | Rule |
//! |------|------|
//! | `String` | passthrough |
//! | `Integer` | base-10 `i64` |
//! | `Boolean` | `1 t T TRUE true True` / `0 f F FALSE false False` |
//! | `Double` | base-10 finite `f64` (`NaN` and infinities rejected) |
//! | `Timestamp` | [`parse_timestamp`](crate::parse_timestamp) |
//! | `Contexts` | [`schema::shred_contexts`] |
//! | `Unstruct` | [`schema::shred_unstruct`] |
//!
//! Empty columns never reach these rules; the accessor layer filters or
//! reports them first.
use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::EventError;
use crate::timestamp::{format_timestamp, parse_timestamp};

/// A decoded event: output key to value, in lexical key order.
pub type EventMap = BTreeMap<String, DecodedValue>;

/// How a column's raw text is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    Integer,
    Boolean,
    Double,
    Timestamp,
    /// A contexts envelope; shreds into one list per derived key.
    Contexts,
    /// An unstruct event envelope; shreds into a single derived key.
    Unstruct,
}

impl ValueKind {
    /// Whether this column carries self-describing JSON.
    pub fn is_self_describing(self) -> bool {
        matches!(self, ValueKind::Contexts | ValueKind::Unstruct)
    }

    /// Decodes one non-empty column.
    ///
    /// # Errors
    ///
    /// [`EventError::InvalidValue`] for scalar text that does not parse, and
    /// [`EventError::Schema`] for malformed self-describing JSON.
    pub fn decode(self, field: &str, raw: &str) -> Result<DecodedValue, EventError> {
        match self {
            ValueKind::String => Ok(DecodedValue::String(raw.to_string())),
            ValueKind::Integer => raw
                .parse::<i64>()
                .map(DecodedValue::Integer)
                .map_err(|err| EventError::invalid_value(field, self, raw, err)),
            ValueKind::Boolean => parse_bool(raw)
                .map(DecodedValue::Boolean)
                .ok_or_else(|| EventError::invalid_value(field, self, raw, "not a boolean literal")),
            ValueKind::Double => {
                let parsed = raw
                    .parse::<f64>()
                    .map_err(|err| EventError::invalid_value(field, self, raw, err))?;
                if !parsed.is_finite() {
                    return Err(EventError::invalid_value(field, self, raw, "not a finite number"));
                }
                Ok(DecodedValue::Double(parsed))
            }
            ValueKind::Timestamp => parse_timestamp(raw)
                .map(DecodedValue::Timestamp)
                .map_err(|err| EventError::invalid_value(field, self, raw, err)),
            ValueKind::Contexts => {
                let group = schema::shred_contexts(raw)?
                    .into_iter()
                    .map(|(key, objects)| {
                        (key, Value::Array(objects.into_iter().map(Value::Object).collect()))
                    })
                    .collect();
                Ok(DecodedValue::Group(group))
            }
            ValueKind::Unstruct => {
                let group = schema::shred_unstruct(raw)?
                    .into_iter()
                    .map(|(key, object)| (key, Value::Object(object)))
                    .collect();
                Ok(DecodedValue::Group(group))
            }
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Boolean => "boolean",
            ValueKind::Double => "double",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Contexts => "contexts",
            ValueKind::Unstruct => "unstruct event",
        };
        f.write_str(name)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// The typed result of decoding a column.
///
/// Scalar kinds map one-to-one onto variants. A contexts or unstruct column
/// decodes to [`Group`](DecodedValue::Group): every derived key with its
/// payload, in first-seen order. When a group is merged into an [`EventMap`]
/// each of its entries becomes a top-level [`Json`](DecodedValue::Json) value.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    Double(f64),
    Timestamp(DateTime<Utc>),
    /// One shredded entry: an object for unstruct, an array of objects for
    /// contexts.
    Json(Value),
    /// A whole shredded column.
    Group(IndexMap<String, Value>),
}

impl DecodedValue {
    /// Adds this value to `out` under `field`, or, for a group, under each of
    /// its derived keys.
    ///
    /// Two contexts columns can shred to the same derived key; the later
    /// column's objects are appended to the list already in `out`.
    pub(crate) fn merge_into(self, field: &str, out: &mut EventMap) {
        match self {
            DecodedValue::Group(group) => {
                for (key, value) in group {
                    match (out.get_mut(&key), value) {
                        (
                            Some(DecodedValue::Json(Value::Array(existing))),
                            Value::Array(objects),
                        ) => existing.extend(objects),
                        (_, value) => {
                            out.insert(key, DecodedValue::Json(value));
                        }
                    }
                }
            }
            scalar => {
                out.insert(field.to_string(), scalar);
            }
        }
    }

    /// Converts into a plain JSON value, rendering timestamps as RFC 3339.
    pub fn into_json(self) -> Value {
        match self {
            DecodedValue::String(s) => Value::String(s),
            DecodedValue::Integer(i) => Value::from(i),
            DecodedValue::Boolean(b) => Value::Bool(b),
            DecodedValue::Double(d) => Value::from(d),
            DecodedValue::Timestamp(ts) => Value::String(format_timestamp(&ts)),
            DecodedValue::Json(value) => value,
            DecodedValue::Group(group) => Value::Object(group.into_iter().collect()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DecodedValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Serialize for DecodedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DecodedValue::String(s) => serializer.serialize_str(s),
            DecodedValue::Integer(i) => serializer.serialize_i64(*i),
            DecodedValue::Boolean(b) => serializer.serialize_bool(*b),
            DecodedValue::Double(d) => serializer.serialize_f64(*d),
            DecodedValue::Timestamp(ts) => serializer.serialize_str(&format_timestamp(ts)),
            DecodedValue::Json(value) => value.serialize(serializer),
            DecodedValue::Group(group) => group.serialize(serializer),
        }
    }
}

impl From<DecodedValue> for Value {
    fn from(value: DecodedValue) -> Self {
        value.into_json()
    }
}
