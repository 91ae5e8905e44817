//! Rendered output must be readable by real XML, YAML and CSV parsers

use jsonfmt::conversion::render_xml_with_root;
use jsonfmt::{render, TargetFormat};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::json;

#[test]
fn test_xml_reparses_cleanly() {
    let value = json!({
        "name": "Ada <3",
        "tags": ["a&b", "c"],
        "nested": {"ok": true, "gone": null},
        "matrix": [[1, 2], [3]]
    });
    let xml = render(&value, TargetFormat::Xml);

    let mut reader = Reader::from_str(&xml);
    let mut depth = 0usize;
    let mut elements = 0usize;
    let mut texts: Vec<String> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => {
                depth += 1;
                elements += 1;
            }
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Empty(_)) => elements += 1,
            Ok(Event::Text(text)) => {
                let decoded = text.unescape().expect("text should unescape");
                if !decoded.trim().is_empty() {
                    texts.push(decoded.trim().to_string());
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(error) => panic!("XML output failed to re-parse: {}", error),
        }
    }

    assert_eq!(depth, 0, "every start tag should be closed");
    assert!(elements >= 8);
    assert!(texts.contains(&"Ada <3".to_string()));
    assert!(texts.contains(&"a&b".to_string()));
}

#[test]
fn test_xml_reparses_with_custom_root() {
    let value = json!({"inner": [true, false]});
    let xml = render_xml_with_root(&value, "report");

    let mut reader = Reader::from_str(&xml);
    let mut first_element = None;
    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                first_element = Some(String::from_utf8_lossy(start.name().as_ref()).into_owned());
                break;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(error) => panic!("XML output failed to re-parse: {}", error),
        }
    }

    assert_eq!(first_element.as_deref(), Some("report"));
}

#[test]
fn test_yaml_reparses_with_order_and_types_intact() {
    let value = json!({
        "zebra": 1,
        "answer": "true",
        "list": [1, 2],
        "none": null,
        "empty": {}
    });
    let yaml = render(&value, TargetFormat::Yaml);

    let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    let mapping = parsed.as_mapping().unwrap();

    let keys: Vec<&str> = mapping.keys().map(|key| key.as_str().unwrap()).collect();
    assert_eq!(keys, ["zebra", "answer", "list", "none", "empty"]);

    // The quoted string "true" must come back as a string, not a boolean
    assert_eq!(parsed["answer"], serde_yaml::Value::from("true"));
    assert_eq!(parsed["zebra"], serde_yaml::Value::from(1));
    assert_eq!(parsed["list"][1], serde_yaml::Value::from(2));
    assert!(parsed["none"].is_null());
    assert!(parsed["empty"].as_mapping().unwrap().is_empty());
}

#[test]
fn test_yaml_nested_sequences_reparse() {
    let value = json!([[1, 2], [3]]);
    let yaml = render(&value, TargetFormat::Yaml);

    let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed[0][0], serde_yaml::Value::from(1));
    assert_eq!(parsed[0][1], serde_yaml::Value::from(2));
    assert_eq!(parsed[1][0], serde_yaml::Value::from(3));
}

#[test]
fn test_csv_reparses_with_quoted_fields_recovered() {
    let value = json!([
        {"id": 1, "note": "a,b"},
        {"id": 2, "note": "say \"hi\""},
        {"id": 3, "note": "line1\nline2"}
    ]);
    let text = render(&value, TargetFormat::Csv);

    let mut reader = csv::ReaderBuilder::new().from_reader(text.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers, csv::StringRecord::from(vec!["id", "note"]));

    let rows: Vec<csv::StringRecord> = reader.records().map(|row| row.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][1], "a,b");
    assert_eq!(&rows[1][1], "say \"hi\"");
    assert_eq!(&rows[2][1], "line1\nline2");
}

#[test]
fn test_csv_container_cells_hold_compact_json() {
    let value = json!([{"o": {"x": 1}, "l": [1, 2]}]);
    let text = render(&value, TargetFormat::Csv);

    let mut reader = csv::ReaderBuilder::new().from_reader(text.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(|row| row.unwrap()).collect();

    let object: serde_json::Value = serde_json::from_str(&rows[0][0]).unwrap();
    assert_eq!(object, json!({"x": 1}));
    let list: serde_json::Value = serde_json::from_str(&rows[0][1]).unwrap();
    assert_eq!(list, json!([1, 2]));
}
