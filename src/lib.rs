//! Workspace umbrella crate for the Snowplow analytics SDK.
//!
//! This crate stitches together the Iglu schema layer and the enriched event
//! decoder so callers can go from one raw TSV line to typed values with a
//! single call. Every call here splits the line with the default tab
//! delimiter, uses the shared enriched field table, logs its outcome, and
//! reports it to the installed [`DecodeMetrics`] recorder.
//!
//! ```
//! use snowplow_analytics::{get_value, DecodedValue, FIELD_COUNT};
//!
//! let mut columns = vec![""; FIELD_COUNT];
//! columns[1] = "web";
//! let line = columns.join("\t");
//!
//! assert_eq!(
//!     get_value(&line, "platform").unwrap(),
//!     DecodedValue::String("web".into())
//! );
//! ```

pub mod config;

pub use event::{
    ConfigError, DecodeConfig, DecodedValue, EventError, EventMap, EventView, FIELD_COUNT,
    FieldSpec, FieldTable, GEO_LOCATION, ParsedEvent, PathSegment, ValueKind, format_timestamp,
    parse_timestamp,
};
pub use schema::{
    CONTEXTS_PREFIX, SchemaError, SchemaKey, UNSTRUCT_PREFIX, derive_key, shred_contexts,
    shred_unstruct,
};

use serde_json::Value;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};
use tracing::{Span, debug, debug_span, warn};

/// Metrics observer for decode calls.
pub trait DecodeMetrics: Send + Sync {
    /// Called once per API call with its operation name (`"to_map"`,
    /// `"get_value"`, ...), wall time, and outcome.
    fn record_decode(&self, operation: &'static str, latency: Duration, result: Result<(), EventError>);
}

/// Install or clear the global decode metrics recorder.
pub fn set_decode_metrics(recorder: Option<Arc<dyn DecodeMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn DecodeMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn DecodeMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn DecodeMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn DecodeMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record(self, operation: &'static str, result: Result<(), EventError>) {
        self.recorder
            .record_decode(operation, self.start.elapsed(), result);
    }
}

/// Runs one decode call inside `span`, logs the outcome and reports it.
fn observe<T>(
    operation: &'static str,
    span: Span,
    decode: impl FnOnce() -> Result<T, EventError>,
) -> Result<T, EventError> {
    let _guard = span.enter();
    let start = Instant::now();
    let metrics = MetricsSpan::start();

    let result = decode();

    let elapsed_micros = start.elapsed().as_micros();
    match &result {
        Ok(_) => debug!(operation, elapsed_micros, "decode_success"),
        Err(err) => warn!(operation, error = %err, elapsed_micros, "decode_failure"),
    }
    if let Some(metrics) = metrics {
        metrics.record(operation, result.as_ref().map(|_| ()).map_err(Clone::clone));
    }
    result
}

/// Decodes every non-empty column of `line` into one map.
pub fn to_map(line: &str) -> Result<EventMap, EventError> {
    observe("to_map", debug_span!("analytics.to_map"), || {
        ParsedEvent::parse(line)?.view().to_map(false)
    })
}

/// Like [`to_map`], adding `geo_location` when both geo columns are set.
pub fn to_map_with_geo(line: &str) -> Result<EventMap, EventError> {
    observe("to_map_with_geo", debug_span!("analytics.to_map_with_geo"), || {
        ParsedEvent::parse(line)?.view().to_map(true)
    })
}

/// [`to_map`] serialized as a JSON object.
pub fn to_json(line: &str) -> Result<Vec<u8>, EventError> {
    observe("to_json", debug_span!("analytics.to_json"), || {
        ParsedEvent::parse(line)?.view().to_json(false)
    })
}

/// [`to_map_with_geo`] serialized as a JSON object.
pub fn to_json_with_geo(line: &str) -> Result<Vec<u8>, EventError> {
    observe("to_json_with_geo", debug_span!("analytics.to_json_with_geo"), || {
        ParsedEvent::parse(line)?.view().to_json(true)
    })
}

/// Serializes `line` as JSON using the delimiter and geo setting of
/// `config`.
pub fn to_json_with_config(line: &str, config: &DecodeConfig) -> Result<Vec<u8>, EventError> {
    observe("to_json_with_config", debug_span!("analytics.to_json_with_config"), || {
        let table = FieldTable::global();
        ParsedEvent::parse_with_config(line, config, table)?
            .view_with(table)
            .to_json(config.include_geo_location)
    })
}

/// Decodes the single column `field`. Empty columns are an error.
pub fn get_value(line: &str, field: &str) -> Result<DecodedValue, EventError> {
    observe("get_value", debug_span!("analytics.get_value", field), || {
        ParsedEvent::parse(line)?.view().get_value(field)
    })
}

/// Decodes the named columns, skipping empty ones.
pub fn get_subset_map(line: &str, fields: &[&str]) -> Result<EventMap, EventError> {
    observe("get_subset_map", debug_span!("analytics.get_subset_map"), || {
        ParsedEvent::parse(line)?.view().get_subset(fields)
    })
}

/// [`get_subset_map`] serialized as a JSON object.
pub fn get_subset_json(line: &str, fields: &[&str]) -> Result<Vec<u8>, EventError> {
    observe("get_subset_json", debug_span!("analytics.get_subset_json"), || {
        ParsedEvent::parse(line)?.view().get_subset_json(fields)
    })
}

/// Reads `path` inside the custom event of the unstruct column.
pub fn get_unstruct_event_value(line: &str, path: &[PathSegment]) -> Result<Value, EventError> {
    observe(
        "get_unstruct_event_value",
        debug_span!("analytics.get_unstruct_event_value"),
        || ParsedEvent::parse(line)?.view().get_unstruct_path(path),
    )
}

/// Collects `path` from every context keyed `context_name`.
pub fn get_context_value(
    line: &str,
    context_name: &str,
    path: &[PathSegment],
) -> Result<Vec<Value>, EventError> {
    observe(
        "get_context_value",
        debug_span!("analytics.get_context_value", context = context_name),
        || ParsedEvent::parse(line)?.view().get_context_path(context_name, path),
    )
}
