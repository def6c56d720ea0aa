//! Iglu schema layer for the Snowplow analytics SDK.
//!
//! Enriched events embed self-describing JSON in three columns. Each piece of
//! JSON names its own schema with an Iglu URI, and every Snowplow loader
//! turns that URI into a column name using the same rules. This crate owns
//! those rules.
//!
//! ## What we do
//!
//! - Parse schema URIs into vendor / name / format / model / revision
//! - Derive column keys (`contexts_org_w3_performance_timing_1`)
//! - Shred `contexts` and `unstruct_event` envelopes into keyed groups
//!
//! ## Pure function guarantee
//!
//! No I/O, no shared state. Same URI + same prefix = same key, on any
//! machine, forever.

mod error;
mod key;
mod shred;
pub mod strict;

pub use crate::error::SchemaError;
pub use crate::key::{derive_key, insert_underscores, SchemaKey};
pub use crate::shred::{
    shred_contexts, shred_unstruct, unstruct_data, JsonObject, ShreddedGroup, CONTEXTS_PREFIX,
    UNSTRUCT_PREFIX,
};
pub use crate::strict::{derive_key_strict, parse_strict};
