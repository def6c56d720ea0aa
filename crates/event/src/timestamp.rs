//! Timestamp columns.
//!
//! Enriched events store timestamps as `YYYY-MM-DD HH:MM:SS[.fff]` in UTC with
//! no offset. Some historical columns hold all-zero placeholders, so a value
//! that parses to the zero instant or to the Unix epoch is rejected instead of
//! being passed on as a real time.
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use thiserror::Error;

/// Layout of every timestamp column. The fractional part is optional.
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Why a timestamp column was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("does not match layout {TIMESTAMP_LAYOUT}: {0}")]
    Layout(String),
    #[error("resulted in zero-value timestamp")]
    ZeroValue,
}

/// Parses a timestamp column.
///
/// ```rust
/// use event::parse_timestamp;
///
/// let ts = parse_timestamp("2013-11-26 00:03:57.885").unwrap();
/// assert_eq!(ts.timestamp_millis(), 1_385_424_237_885);
/// assert!(parse_timestamp("1970-01-01 00:00:00").is_err());
/// ```
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let naive = NaiveDateTime::parse_from_str(raw, TIMESTAMP_LAYOUT)
        .map_err(|err| TimestampError::Layout(err.to_string()))?;
    if is_zero(&naive) {
        return Err(TimestampError::ZeroValue);
    }
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

/// Renders a timestamp the way decoded events serialize it: RFC 3339, UTC,
/// `Z` suffix.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn is_zero(naive: &NaiveDateTime) -> bool {
    let midnight = |year| NaiveDate::from_ymd_opt(year, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0));
    [midnight(1), midnight(1970)].contains(&Some(*naive))
}
