use event::{DecodedValue, FieldTable, ParsedEvent, FIELD_COUNT};

const UNSTRUCT: &str = r#"{"schema":"iglu:com.snowplowanalytics.snowplow/unstruct_event/jsonschema/1-0-0","data":{"schema":"iglu:com.snowplowanalytics.snowplow/link_click/jsonschema/1-0-1","data":{"targetUrl":"http://www.example.com","elementId":"exampleLink"}}}"#;

fn demo_record() -> String {
    let table = FieldTable::global();
    let mut columns = vec![""; FIELD_COUNT];
    for (name, value) in [
        ("app_id", "angry-birds"),
        ("platform", "web"),
        ("collector_tstamp", "2013-11-26 00:03:57.885"),
        ("geo_latitude", "37.443604"),
        ("geo_longitude", "-122.4124"),
        ("unstruct_event", UNSTRUCT),
    ] {
        let Some(index) = table.index_of(name) else {
            panic!("{name} is not an enriched event column");
        };
        columns[index] = value;
    }
    columns.join("\t")
}

fn main() {
    let line = demo_record();
    let event = match ParsedEvent::parse(&line) {
        Ok(event) => event,
        Err(err) => {
            eprintln!("decode failed: {err}");
            return;
        }
    };
    let view = event.view();

    match view.to_json(true) {
        Ok(json) => println!("{}", String::from_utf8_lossy(&json)),
        Err(err) => eprintln!("to_json failed: {err}"),
    }

    match view.get_value("collector_tstamp") {
        Ok(DecodedValue::Timestamp(ts)) => println!("collected at {ts}"),
        Ok(other) => println!("unexpected value {other:?}"),
        Err(err) => eprintln!("get_value failed: {err}"),
    }

    match view.get_unstruct_path(&["targetUrl".into()]) {
        Ok(url) => println!("link target {url}"),
        Err(err) => eprintln!("get_unstruct_path failed: {err}"),
    }
}
