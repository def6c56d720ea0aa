//! Enriched Event Layer
//!
//! A Snowplow enriched event is one line of 131 tab-separated columns. This
//! crate splits that line, knows what type every column holds, and decodes
//! as much or as little of it as the caller asks for.
//!
//! ## What we do here
//!
//! - **Split records** - [`ParsedEvent::parse`] checks the column count and
//!   nothing else. Column text stays raw until someone asks for it.
//! - **Decode by kind** - Each column has a [`ValueKind`]; one `match` turns
//!   raw text into a [`DecodedValue`].
//! - **Shred custom data** - `contexts`, `derived_contexts` and
//!   `unstruct_event` expand into one key per schema, named by the
//!   [`schema`] crate.
//! - **Partial access** - [`EventView::get_value`], [`EventView::get_subset`]
//!   and the path accessors decode only the columns they touch.
//!
//! ## Example
//!
//! ```
//! use event::{DecodedValue, ParsedEvent, FIELD_COUNT};
//!
//! let mut columns = vec![""; FIELD_COUNT];
//! columns[0] = "angry-birds";
//! columns[7] = "41828";
//! let event = ParsedEvent::parse(&columns.join("\t")).unwrap();
//!
//! let view = event.view();
//! assert_eq!(view.get_value("txn_id").unwrap(), DecodedValue::Integer(41828));
//!
//! let map = view.to_map(false).unwrap();
//! assert_eq!(map.len(), 2);
//! ```

mod config;
mod error;
mod fields;
mod path;
mod record;
mod timestamp;
mod value;
mod view;

pub use crate::config::{ConfigError, DecodeConfig};
pub use crate::error::EventError;
pub use crate::fields::{
    FieldSpec, FieldTable, ENRICHED_EVENT_FIELDS, FIELD_COUNT, GEO_LATITUDE, GEO_LOCATION,
    GEO_LONGITUDE,
};
pub use crate::path::{navigate, render_path, PathSegment};
pub use crate::record::{decode_record, ParsedEvent, DEFAULT_DELIMITER};
pub use crate::timestamp::{format_timestamp, parse_timestamp, TimestampError, TIMESTAMP_LAYOUT};
pub use crate::value::{DecodedValue, EventMap, ValueKind};
pub use crate::view::EventView;
