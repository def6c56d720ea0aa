mod common;

use common::{full_event_line, line_with};
use snowplow_analytics::{
    EventError, ParsedEvent, SchemaError, ValueKind, get_value, to_json, to_map, to_map_with_geo,
};

#[test]
fn wrong_column_count_is_reported() {
    assert_eq!(
        to_map("one\ttwo"),
        Err(EventError::FieldCount {
            expected: 131,
            actual: 2
        })
    );

    let truncated = full_event_line().rsplit_once('\t').unwrap().0.to_string();
    assert_eq!(
        ParsedEvent::parse(&truncated).unwrap_err(),
        EventError::FieldCount {
            expected: 131,
            actual: 130
        }
    );
}

#[test]
fn bad_scalars_abort_whole_event() {
    let cases = [
        ("txn_id", "notAnInt", ValueKind::Integer),
        ("br_features_pdf", "notABool", ValueKind::Boolean),
        ("geo_latitude", "notADouble", ValueKind::Double),
        ("geo_latitude", "NaN", ValueKind::Double),
        ("geo_longitude", "inf", ValueKind::Double),
        ("tr_total", "-infinity", ValueKind::Double),
        ("collector_tstamp", "this is not a tstamp", ValueKind::Timestamp),
        ("collector_tstamp", "0001-01-01 00:00:00", ValueKind::Timestamp),
    ];
    for (field, raw, expected_kind) in cases {
        let line = line_with(field, raw);
        match to_map(&line) {
            Err(EventError::InvalidValue {
                field: ref got_field,
                kind,
                ref value,
                ..
            }) => {
                assert_eq!(got_field, field);
                assert_eq!(kind, expected_kind);
                assert_eq!(value, raw);
            }
            other => panic!("{field}={raw}: expected InvalidValue, got {other:?}"),
        }
        assert!(to_json(&line).is_err(), "{field}={raw}");
    }
}

#[test]
fn malformed_contexts_json_is_a_schema_error() {
    let line = line_with("contexts", r#"{"schema":"iglu:x/y/jsonschema/1-0-0","data":["#);
    assert!(matches!(
        to_map(&line),
        Err(EventError::Schema(SchemaError::InvalidJson { .. }))
    ));
    assert!(matches!(
        get_value(&line, "contexts"),
        Err(EventError::Schema(SchemaError::InvalidJson { .. }))
    ));
}

#[test]
fn malformed_schema_uri_carries_the_uri() {
    let line = line_with(
        "unstruct_event",
        r#"{"data":{"data":{"key":"value"},"schema":"fail"},"schema":"iglu:com.snowplowanalytics.snowplow/unstruct_event/jsonschema/1-0-0"}"#,
    );
    assert_eq!(
        get_value(&line, "unstruct_event"),
        Err(EventError::Schema(SchemaError::InvalidSchemaUri {
            uri: "fail".into()
        }))
    );
}

#[test]
fn geo_inclusion_does_not_mask_errors() {
    let line = line_with("geo_longitude", "east");
    assert!(matches!(
        to_map_with_geo(&line),
        Err(EventError::InvalidValue { kind: ValueKind::Double, .. })
    ));
}

#[test]
fn errors_render_readable_messages() {
    let err = to_map("one\ttwo").unwrap_err();
    assert_eq!(err.to_string(), "wrong number of fields: expected 131, found 2");

    let err = get_value(&full_event_line(), "not_a_field").unwrap_err();
    assert_eq!(err.to_string(), "key not_a_field not a valid atomic field");
}
