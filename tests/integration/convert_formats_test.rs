//! End-to-end conversion coverage across the three output formats

use assert_matches::assert_matches;
use jsonfmt::conversion::ConversionOutput;
use jsonfmt::error::ConvertError;
use jsonfmt::{
    convert, convert_json, locate, ConversionConfig, ConversionEngine, Location, TargetFormat,
};
use pretty_assertions::assert_eq;

#[test]
fn test_xml_document_shape() {
    let source = r#"{"name": "Ada", "tags": ["x", "y"], "ok": true, "note": null}"#;
    let xml = convert(source, "xml").unwrap();

    assert_eq!(
        xml,
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<root>\n",
            "  <name>Ada</name>\n",
            "  <tags>\n",
            "    <item>x</item>\n",
            "    <item>y</item>\n",
            "  </tags>\n",
            "  <ok>true</ok>\n",
            "  <note/>\n",
            "</root>"
        )
    );
}

#[test]
fn test_yaml_document_shape() {
    let source = r#"{"a": [1, {"b": "x"}]}"#;
    let yaml = convert(source, "yaml").unwrap();

    assert_eq!(yaml, "a:\n  - 1\n  - b: \"x\"");
}

#[test]
fn test_yaml_strings_stay_strings() {
    let yaml = convert(r#"{"v": "true"}"#, "yaml").unwrap();
    assert_eq!(yaml, "v: \"true\"");
}

#[test]
fn test_csv_quoting_and_missing_fields() {
    let source = r#"[{"x": 1, "y": "a,b"}, {"x": 2}]"#;
    let csv = convert(source, "csv").unwrap();

    assert_eq!(csv, "x,y\n1,\"a,b\"\n2,\n");
}

#[test]
fn test_csv_wraps_single_objects() {
    let csv = convert(r#"{"a": 1, "b": "two"}"#, "csv").unwrap();
    assert_eq!(csv, "a,b\n1,two\n");
}

#[test]
fn test_format_names_are_case_insensitive() {
    assert_eq!(convert(r#"{"a": 1}"#, "YAML").unwrap(), "a: 1");
    assert!(convert(r#"{"a": 1}"#, "XML").unwrap().starts_with("<?xml"));
}

#[test]
fn test_unknown_format_is_rejected() {
    let result = convert(r#"{"a": 1}"#, "toml");
    assert_matches!(
        result,
        Err(ConvertError::UnsupportedFormat { format }) if format == "toml"
    );
}

#[test]
fn test_empty_input_wins_over_unknown_format() {
    assert_matches!(convert("   \n", "toml"), Err(ConvertError::EmptyInput));
}

#[test]
fn test_parse_failure_wins_over_unknown_format() {
    assert_matches!(convert("{oops", "toml"), Err(ConvertError::ParseFailure(_)));
}

#[test]
fn test_error_user_messages() {
    let empty = convert("", "xml").unwrap_err();
    assert_eq!(empty.user_message(), "Please enter some JSON to process");

    let unsupported = convert("{}", "txt").unwrap_err();
    assert_eq!(unsupported.user_message(), "Conversion to txt is not supported");

    let broken = convert("{\n  \"a\": }", "xml").unwrap_err();
    let message = broken.user_message();
    assert!(message.starts_with("Invalid JSON: "));
    assert!(message.contains("\nAt line 2, column "));
}

#[test]
fn test_locate_maps_position_to_line_and_column() {
    let location = locate("Unexpected token at position 10", "{\n  \"a\": }");
    assert_eq!(location, Location { line: 2, column: 8 });

    let fallback = locate("something went wrong", "{}");
    assert_eq!(fallback, Location { line: 1, column: 0 });
}

#[test]
fn test_numbers_are_canonical_in_every_format() {
    let source = r#"{"n": 120.0, "f": 25.5}"#;

    assert_eq!(convert(source, "yaml").unwrap(), "n: 120\nf: 25.5");
    assert_eq!(convert(source, "csv").unwrap(), "n,f\n120,25.5\n");
    let xml = convert(source, "xml").unwrap();
    assert!(xml.contains("<n>120</n>"));
    assert!(xml.contains("<f>25.5</f>"));
}

#[test]
fn test_key_order_is_preserved() {
    let source = r#"{"zebra": 1, "apple": 2, "mango": 3}"#;

    assert_eq!(convert(source, "yaml").unwrap(), "zebra: 1\napple: 2\nmango: 3");
    assert!(convert(source, "csv").unwrap().starts_with("zebra,apple,mango\n"));
}

#[test]
fn test_engine_applies_custom_xml_root() {
    let config = ConversionConfig::new(TargetFormat::Xml).with_xml_root("data");
    let engine = ConversionEngine::new(config);

    let output: ConversionOutput = engine.convert_str(r#"{"a": 1}"#).unwrap();
    assert_eq!(
        output.as_str(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<data>\n  <a>1</a>\n</data>"
    );
    assert_eq!(output.metadata.input_bytes, 8);
}

#[test]
fn test_convert_json_with_typed_format() {
    let yaml = convert_json(r#"{"a": 1}"#, TargetFormat::Yaml).unwrap();
    assert_eq!(yaml, "a: 1");
}

#[test]
fn test_xml_escapes_text_content() {
    let xml = convert(r#"{"m": "a < b & \"c\""}"#, "xml").unwrap();
    assert!(xml.contains("<m>a &lt; b &amp; &quot;c&quot;</m>"));
}
