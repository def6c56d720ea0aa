//! Schema URI parsing and column-key derivation.
//!
//! A self-describing schema URI looks like
//! `iglu:com.acme/link_click/jsonschema/1-0-2`. Every Snowplow loader turns it
//! into the same column name, for example
//! `unstruct_event_com_acme_link_click_1`, and we have to reproduce that
//! convention exactly:
//!
//! ```text
//! lower( prefix _ vendor(. -> _) _ snake(name) _ model )
//! ```
//!
//! Parsing here is split-based and zero-copy. It only checks the shape of the
//! URI (protocol separator, four path segments, a `-` in the version) and
//! trusts the tokens themselves. [`crate::strict`] holds the slower
//! regex-anchored grammar that accepts a subset of these inputs and always
//! agrees on the key.

use crate::error::SchemaError;

/// A schema URI split into its parts. Borrows from the URI it was parsed from.
///
/// # Examples
///
/// ```rust
/// use schema::SchemaKey;
///
/// let key = SchemaKey::parse("iglu:com.acme.data/some_event/jsonschema/15-34-1").unwrap();
/// assert_eq!(key.vendor, "com.acme.data");
/// assert_eq!(key.name, "some_event");
/// assert_eq!(key.model, "15");
/// assert_eq!(key.revision, "34-1");
/// assert_eq!(key.column_name("unstruct_event"), "unstruct_event_com_acme_data_some_event_15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaKey<'a> {
    /// Everything before the first `:`, normally `iglu`.
    pub protocol: &'a str,
    /// Reverse-domain vendor, e.g. `com.snowplowanalytics.snowplow`.
    pub vendor: &'a str,
    /// Schema name, possibly camel case.
    pub name: &'a str,
    /// Schema format, normally `jsonschema`.
    pub format: &'a str,
    /// Major version.
    pub model: &'a str,
    /// Whatever follows the first `-` of the version, e.g. `0-1`.
    pub revision: &'a str,
}

impl<'a> SchemaKey<'a> {
    /// Splits `uri` into its parts.
    ///
    /// # Errors
    ///
    /// [`SchemaError::InvalidSchemaUri`] when the URI has no `:` separator,
    /// does not have exactly four non-empty `/` segments after it, or its
    /// version segment has no non-empty `model-revision` halves.
    pub fn parse(uri: &'a str) -> Result<Self, SchemaError> {
        let (protocol, path) = uri
            .split_once(':')
            .filter(|(protocol, path)| !protocol.is_empty() && !path.is_empty())
            .ok_or_else(|| SchemaError::invalid_uri(uri))?;

        let mut segments = path.split('/');
        let (Some(vendor), Some(name), Some(format), Some(version), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(SchemaError::invalid_uri(uri));
        };
        if [vendor, name, format, version].iter().any(|s| s.is_empty()) {
            return Err(SchemaError::invalid_uri(uri));
        }

        let (model, revision) = version
            .split_once('-')
            .filter(|(model, revision)| !model.is_empty() && !revision.is_empty())
            .ok_or_else(|| SchemaError::invalid_uri(uri))?;

        Ok(Self {
            protocol,
            vendor,
            name,
            format,
            model,
            revision,
        })
    }

    /// Builds the output column name for this schema under `prefix`.
    ///
    /// Format and revision never take part in the key, so every minor
    /// revision of a schema lands in the same column.
    pub fn column_name(&self, prefix: &str) -> String {
        let mut key =
            String::with_capacity(prefix.len() + self.vendor.len() + self.name.len() * 2 + 8);
        key.push_str(prefix);
        key.push('_');
        for ch in self.vendor.chars() {
            key.push(if ch == '.' { '_' } else { ch });
        }
        key.push('_');
        key.push_str(&insert_underscores(self.name));
        key.push('_');
        key.push_str(self.model);
        key.to_lowercase()
    }
}

/// Derives the column key for `schema_uri` under `prefix`.
///
/// # Examples
///
/// ```rust
/// use schema::derive_key;
///
/// let key = derive_key("contexts", "iglu:org.w3/PerformanceTiming/jsonschema/1-0-0").unwrap();
/// assert_eq!(key, "contexts_org_w3_performance_timing_1");
/// ```
pub fn derive_key(prefix: &str, schema_uri: &str) -> Result<String, SchemaError> {
    SchemaKey::parse(schema_uri).map(|key| key.column_name(prefix))
}

/// Inserts `_` before every uppercase character that is neither the first
/// character nor already preceded by `_`. Case is left alone.
///
/// ```rust
/// use schema::insert_underscores;
///
/// assert_eq!(insert_underscores("PerformanceTiming"), "Performance_Timing");
/// assert_eq!(insert_underscores("this_StringIsAMixture"), "this_String_Is_A_Mixture");
/// ```
pub fn insert_underscores(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + name.len() / 2);
    let mut prev: Option<char> = None;
    for ch in name.chars() {
        if ch.is_uppercase() && prev.is_some_and(|p| p != '_') {
            out.push('_');
        }
        out.push(ch);
        prev = Some(ch);
    }
    out
}
