//! Regex-anchored schema URI parsing.
//!
//! This is the full Iglu grammar: an `iglu:` protocol, restricted token
//! alphabets and a numeric `MODEL-REVISION-ADDITION` version. It is several
//! times slower than [`SchemaKey::parse`] and is kept as the reference the
//! fast parser is checked against: whenever both accept a URI they must
//! produce the same key.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SchemaError;
use crate::key::SchemaKey;

/// The Iglu schema URI grammar.
pub const SCHEMA_URI_REGEX: &str = r"^(iglu):([a-zA-Z0-9_.-]+)/([a-zA-Z0-9_-]+)/([a-zA-Z0-9_-]+)/([1-9][0-9]*)((?:-(?:0|[1-9][0-9]*)){2})$";

static SCHEMA_URI: Lazy<Regex> =
    Lazy::new(|| Regex::new(SCHEMA_URI_REGEX).expect("schema URI grammar compiles"));

/// Parses `uri` against the full Iglu grammar.
///
/// # Errors
///
/// [`SchemaError::InvalidSchemaUri`] when `uri` does not match
/// [`SCHEMA_URI_REGEX`].
pub fn parse_strict(uri: &str) -> Result<SchemaKey<'_>, SchemaError> {
    let caps = SCHEMA_URI
        .captures(uri)
        .ok_or_else(|| SchemaError::invalid_uri(uri))?;
    let group = |idx: usize| caps.get(idx).map_or("", |m| m.as_str());

    Ok(SchemaKey {
        protocol: group(1),
        vendor: group(2),
        name: group(3),
        format: group(4),
        model: group(5),
        // The grammar captures the leading `-` of the revision.
        revision: group(6).trim_start_matches('-'),
    })
}

/// Derives the column key for `schema_uri` under `prefix` using the strict
/// grammar.
pub fn derive_key_strict(prefix: &str, schema_uri: &str) -> Result<String, SchemaError> {
    parse_strict(schema_uri).map(|key| key.column_name(prefix))
}
