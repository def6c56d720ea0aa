//! Shredding of self-describing JSON envelopes.
//!
//! Two enriched-event columns carry self-describing JSON:
//!
//! ```text
//! contexts / derived_contexts
//!   {"schema": "...contexts...", "data": [ {"schema": S1, "data": {..}}, ... ]}
//!
//! unstruct_event
//!   {"schema": "...unstruct_event...", "data": {"schema": S, "data": {..}}}
//! ```
//!
//! Shredding replaces every inner schema URI with its derived column key and
//! groups payloads under it. Contexts sharing a key keep their source order
//! inside the group, and groups keep the order in which their key first
//! appeared. A malformed schema anywhere aborts the whole call.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::key::derive_key;

/// Column prefix used for `contexts` and `derived_contexts` entries.
pub const CONTEXTS_PREFIX: &str = "contexts";

/// Column prefix used for the custom event in `unstruct_event`.
pub const UNSTRUCT_PREFIX: &str = "unstruct_event";

/// A JSON object payload.
pub type JsonObject = Map<String, Value>;

/// Derived column key to payload(s), in first-seen key order.
pub type ShreddedGroup<T> = IndexMap<String, T>;

#[derive(Deserialize)]
struct SelfDescribing<'a, T> {
    #[serde(borrow)]
    schema: Cow<'a, str>,
    data: T,
}

#[derive(Deserialize)]
struct ContextsEnvelope<'a> {
    #[serde(borrow)]
    data: Vec<SelfDescribing<'a, JsonObject>>,
}

#[derive(Deserialize)]
struct UnstructEnvelope<'a> {
    #[serde(borrow)]
    data: SelfDescribing<'a, JsonObject>,
}

#[derive(Deserialize)]
struct UnstructDataOnly {
    data: DataOnly,
}

#[derive(Deserialize)]
struct DataOnly {
    data: Value,
}

/// Shreds a contexts envelope into one list of payloads per derived key.
///
/// An empty `data` array produces an empty group.
///
/// # Examples
///
/// ```rust
/// use schema::shred_contexts;
///
/// let raw = r#"{"schema":"iglu:com.snowplowanalytics.snowplow/contexts/jsonschema/1-0-1","data":[
///     {"schema":"iglu:com.acme/test_context/jsonschema/1-0-0","data":{"field1":1}},
///     {"schema":"iglu:com.acme/test_context/jsonschema/1-0-0","data":{"field1":2}}]}"#;
///
/// let group = shred_contexts(raw).unwrap();
/// assert_eq!(group.len(), 1);
/// assert_eq!(group["contexts_com_acme_test_context_1"].len(), 2);
/// ```
///
/// # Errors
///
/// [`SchemaError::InvalidJson`] when `raw` is not a contexts envelope and
/// [`SchemaError::InvalidSchemaUri`] when any entry's schema is malformed.
pub fn shred_contexts(raw: &str) -> Result<ShreddedGroup<Vec<JsonObject>>, SchemaError> {
    let envelope: ContextsEnvelope<'_> =
        serde_json::from_str(raw).map_err(|err| SchemaError::invalid_json(CONTEXTS_PREFIX, err))?;

    let mut grouped: ShreddedGroup<Vec<JsonObject>> = IndexMap::new();
    for entry in envelope.data {
        let key = derive_key(CONTEXTS_PREFIX, &entry.schema)?;
        grouped.entry(key).or_default().push(entry.data);
    }
    Ok(grouped)
}

/// Shreds an unstruct event envelope into its single derived key.
///
/// The key comes from the inner schema; the outer wrapper schema is ignored.
///
/// # Errors
///
/// [`SchemaError::InvalidJson`] when `raw` is not a doubly nested envelope and
/// [`SchemaError::InvalidSchemaUri`] when the inner schema is malformed.
pub fn shred_unstruct(raw: &str) -> Result<ShreddedGroup<JsonObject>, SchemaError> {
    let envelope: UnstructEnvelope<'_> =
        serde_json::from_str(raw).map_err(|err| SchemaError::invalid_json(UNSTRUCT_PREFIX, err))?;

    let event = envelope.data;
    let key = derive_key(UNSTRUCT_PREFIX, &event.schema)?;

    let mut grouped = IndexMap::with_capacity(1);
    grouped.insert(key, event.data);
    Ok(grouped)
}

/// Returns the custom event payload (`data.data`) of an unstruct envelope
/// without looking at any schema.
pub fn unstruct_data(raw: &str) -> Result<Value, SchemaError> {
    let envelope: UnstructDataOnly =
        serde_json::from_str(raw).map_err(|err| SchemaError::invalid_json(UNSTRUCT_PREFIX, err))?;
    Ok(envelope.data.data)
}
