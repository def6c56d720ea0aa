//! Error types produced by the event crate.
//!
//! Every failure is typed and carries the input that caused it, so callers
//! can tell a truncated record from a bad timestamp from a broken context
//! without parsing messages.
//!
//! # Error Categories
//!
//! | Error | Raised by | Meaning |
//! |-------|-----------|---------|
//! | [`FieldCount`](EventError::FieldCount) | record decoder | Record does not split into the table's column count |
//! | [`UnknownField`](EventError::UnknownField) | accessors | Name is not in the field table |
//! | [`EmptyField`](EventError::EmptyField) | `get_value` | Requested column holds no value |
//! | [`InvalidValue`](EventError::InvalidValue) | value decoding | Scalar text does not parse as its kind |
//! | [`Schema`](EventError::Schema) | value decoding | Malformed schema URI or envelope JSON |
//! | [`NotFound`](EventError::NotFound) | path accessors | Path resolves to nothing |
//! | [`Serialize`](EventError::Serialize) | JSON accessors | Output could not be serialized |
//!
//! Bulk accessors skip empty columns; they never skip malformed ones.
use schema::SchemaError;
use thiserror::Error;

use crate::value::ValueKind;

/// Errors that can occur while decoding an enriched event.
///
/// # Examples
///
/// ```rust
/// use event::{EventError, ParsedEvent};
///
/// let err = ParsedEvent::parse("one\ttwo").unwrap_err();
/// assert_eq!(err, EventError::FieldCount { expected: 131, actual: 2 });
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EventError {
    /// The record split into the wrong number of columns.
    #[error("wrong number of fields: expected {expected}, found {actual}")]
    FieldCount {
        /// Column count of the field table.
        expected: usize,
        /// Columns actually present in the record.
        actual: usize,
    },

    /// The requested name is not a column of the field table.
    #[error("key {0} not a valid atomic field")]
    UnknownField(String),

    /// A strictly requested column holds an empty string.
    #[error("field {0} is empty")]
    EmptyField(String),

    /// A scalar column does not parse as its declared kind.
    #[error("error parsing field '{field}' value '{value}' as {kind}: {reason}")]
    InvalidValue {
        /// Output name of the column.
        field: String,
        /// Declared kind of the column.
        kind: ValueKind,
        /// Raw column text.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// A contexts or unstruct column is malformed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Path navigation found nothing.
    #[error("no value found at path {path}")]
    NotFound {
        /// The path that was requested, rendered for display.
        path: String,
    },

    /// Decoded output could not be serialized.
    #[error("error marshaling to JSON: {0}")]
    Serialize(String),
}

impl EventError {
    pub(crate) fn invalid_value(
        field: &str,
        kind: ValueKind,
        value: &str,
        reason: impl ToString,
    ) -> Self {
        EventError::InvalidValue {
            field: field.to_string(),
            kind,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
