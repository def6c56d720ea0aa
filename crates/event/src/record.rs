//! Splitting raw records into columns.
//!
//! Decoding here is purely structural: the record is split on the delimiter
//! and the column count is checked against the field table. Column text is
//! not inspected until an accessor asks for it.
use crate::config::DecodeConfig;
use crate::error::EventError;
use crate::fields::{FieldTable, FIELD_COUNT};
use crate::view::EventView;

/// Column separator of enriched events.
pub const DEFAULT_DELIMITER: char = '\t';

/// The raw columns of one record, in table order.
///
/// ```rust
/// use event::{ParsedEvent, FIELD_COUNT};
///
/// let line = vec!["x"; FIELD_COUNT].join("\t");
/// let event = ParsedEvent::parse(&line).unwrap();
/// assert_eq!(event.get(0), Some("x"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvent {
    fields: Vec<String>,
}

impl ParsedEvent {
    /// Splits a tab-separated enriched event.
    pub fn parse(record: &str) -> Result<Self, EventError> {
        decode_record(record, DEFAULT_DELIMITER, FIELD_COUNT)
    }

    /// Splits `record` using the delimiter from `config` and the column count
    /// of `table`.
    pub fn parse_with_config(
        record: &str,
        config: &DecodeConfig,
        table: &FieldTable,
    ) -> Result<Self, EventError> {
        decode_record(record, config.delimiter, table.len())
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Raw text of column `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Accessors over the shared enriched table.
    pub fn view(&self) -> EventView<'_> {
        EventView::new(self, FieldTable::global())
    }

    /// Accessors over a custom table.
    pub fn view_with<'a>(&'a self, table: &'a FieldTable) -> EventView<'a> {
        EventView::new(self, table)
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

impl TryFrom<Vec<String>> for ParsedEvent {
    type Error = EventError;

    /// Wraps already-split columns; the count must match the enriched table.
    fn try_from(fields: Vec<String>) -> Result<Self, Self::Error> {
        if fields.len() != FIELD_COUNT {
            return Err(EventError::FieldCount {
                expected: FIELD_COUNT,
                actual: fields.len(),
            });
        }
        Ok(Self { fields })
    }
}

/// Splits `record` on `delimiter` with no escaping and checks that exactly
/// `expected` columns result.
///
/// # Errors
///
/// [`EventError::FieldCount`] when the split yields any other number of
/// columns.
pub fn decode_record(
    record: &str,
    delimiter: char,
    expected: usize,
) -> Result<ParsedEvent, EventError> {
    let fields: Vec<String> = record.split(delimiter).map(str::to_string).collect();
    if fields.len() != expected {
        return Err(EventError::FieldCount {
            expected,
            actual: fields.len(),
        });
    }
    Ok(ParsedEvent { fields })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_record(delimiter: char) -> String {
        vec![""; FIELD_COUNT].join(delimiter.to_string().as_str())
    }

    #[test]
    fn two_columns_is_a_field_count_error() {
        assert_eq!(
            ParsedEvent::parse("one\ttwo"),
            Err(EventError::FieldCount {
                expected: 131,
                actual: 2
            })
        );
    }

    #[test]
    fn empty_input_is_one_column() {
        assert_eq!(
            ParsedEvent::parse(""),
            Err(EventError::FieldCount {
                expected: 131,
                actual: 1
            })
        );
    }

    #[test]
    fn all_empty_columns_parse() {
        let event = ParsedEvent::parse(&blank_record('\t')).expect("131 columns");
        assert_eq!(event.len(), FIELD_COUNT);
        assert!(event.fields().iter().all(String::is_empty));
        assert_eq!(event.get(FIELD_COUNT), None);
    }

    #[test]
    fn one_extra_delimiter_is_rejected() {
        let line = format!("{}\t", blank_record('\t'));
        assert_eq!(
            ParsedEvent::parse(&line),
            Err(EventError::FieldCount {
                expected: 131,
                actual: 132
            })
        );
    }

    #[test]
    fn custom_delimiter_from_config() {
        let config = DecodeConfig {
            delimiter: '|',
            ..Default::default()
        };
        let table = FieldTable::enriched();
        let event = ParsedEvent::parse_with_config(&blank_record('|'), &config, &table)
            .expect("pipe separated");
        assert_eq!(event.len(), FIELD_COUNT);

        assert!(ParsedEvent::parse_with_config(&blank_record('\t'), &config, &table).is_err());
    }

    #[test]
    fn no_escaping_inside_columns() {
        let event = decode_record("a\\\tb", '\t', 2).expect("two columns");
        assert_eq!(event.fields(), ["a\\".to_string(), "b".to_string()]);
    }

    #[test]
    fn try_from_checks_count() {
        let short = vec![String::new(); 3];
        assert!(matches!(
            ParsedEvent::try_from(short),
            Err(EventError::FieldCount { actual: 3, .. })
        ));
        let full = vec![String::new(); FIELD_COUNT];
        assert_eq!(
            ParsedEvent::try_from(full).expect("full row").len(),
            FIELD_COUNT
        );
    }
}
