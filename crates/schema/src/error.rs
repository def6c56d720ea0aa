//! Error types produced by the schema crate.
//!
//! Two things can go wrong while turning self-describing JSON into keyed
//! output: the schema URI does not have the `vendor/name/format/version`
//! shape, or the envelope around it is not the JSON we expect. Both are
//! value-carrying so callers can report exactly which input was rejected.
use thiserror::Error;

/// Errors that can occur while deriving keys or shredding envelopes.
///
/// # Examples
///
/// ```rust
/// use schema::{derive_key, SchemaError};
///
/// let err = derive_key("contexts", "not-a-schema").unwrap_err();
/// assert_eq!(
///     err,
///     SchemaError::InvalidSchemaUri { uri: "not-a-schema".into() }
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    /// The schema URI does not split into protocol, four path segments and a
    /// `model-revision` version tail.
    #[error("schema URI format error: {uri}")]
    InvalidSchemaUri {
        /// The offending schema URI, verbatim.
        uri: String,
    },

    /// The self-describing envelope could not be decoded.
    ///
    /// `context` names the envelope kind (`contexts` or `unstruct_event`),
    /// `message` carries the underlying JSON decoder message.
    #[error("error unmarshaling {context} JSON: {message}")]
    InvalidJson {
        /// Which envelope was being decoded.
        context: &'static str,
        /// Decoder message, including line and column.
        message: String,
    },
}

impl SchemaError {
    pub(crate) fn invalid_uri(uri: &str) -> Self {
        SchemaError::InvalidSchemaUri { uri: uri.to_string() }
    }

    pub(crate) fn invalid_json(context: &'static str, err: serde_json::Error) -> Self {
        SchemaError::InvalidJson {
            context,
            message: err.to_string(),
        }
    }
}
