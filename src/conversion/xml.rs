//! XML rendering

use serde_json::{Map, Value};

use crate::conversion::escape::escape_xml;
use crate::conversion::number::number_text;

/// Root element used when no name is configured
pub const DEFAULT_ROOT: &str = "root";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Render a JSON value as an XML document wrapped in `<root>`
pub fn render_xml(value: &Value) -> String {
    render_xml_with_root(value, DEFAULT_ROOT)
}

/// Render a JSON value as an XML document with a custom root element.
///
/// Object members become elements named after their key, two-space
/// indented per level. Null members are self-closing, array elements are
/// wrapped in `<item>` at every nesting level. Text nodes are escaped;
/// element names are emitted as-is. No trailing newline.
pub fn render_xml_with_root(value: &Value, root: &str) -> String {
    let mut out = String::new();
    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(&format!("<{}>\n", root));
    match value {
        Value::Object(map) => push_members(map, "  ", &mut out),
        Value::Array(items) => push_items(items, "  ", &mut out),
        // a bare scalar has no element name to hang off, so only the
        // wrapper is emitted
        _ => {}
    }
    out.push_str(&format!("</{}>", root));
    out
}

fn push_members(map: &Map<String, Value>, indent: &str, out: &mut String) {
    for (key, value) in map {
        match value {
            Value::Null => out.push_str(&format!("{}<{}/>\n", indent, key)),
            Value::Array(items) => {
                out.push_str(&format!("{}<{}>\n", indent, key));
                push_items(items, &format!("{}  ", indent), out);
                out.push_str(&format!("{}</{}>\n", indent, key));
            }
            Value::Object(inner) => {
                out.push_str(&format!("{}<{}>\n", indent, key));
                push_members(inner, &format!("{}  ", indent), out);
                out.push_str(&format!("{}</{}>\n", indent, key));
            }
            Value::String(s) => {
                out.push_str(&format!("{}<{}>{}</{}>\n", indent, key, escape_xml(s), key));
            }
            Value::Bool(b) => {
                out.push_str(&format!("{}<{}>{}</{}>\n", indent, key, b, key));
            }
            Value::Number(n) => {
                out.push_str(&format!("{}<{}>{}</{}>\n", indent, key, number_text(n), key));
            }
        }
    }
}

fn push_items(items: &[Value], indent: &str, out: &mut String) {
    for item in items {
        match item {
            Value::Object(inner) => {
                out.push_str(&format!("{}<item>\n", indent));
                push_members(inner, &format!("{}  ", indent), out);
                out.push_str(&format!("{}</item>\n", indent));
            }
            Value::Array(inner) => {
                out.push_str(&format!("{}<item>\n", indent));
                push_items(inner, &format!("{}  ", indent), out);
                out.push_str(&format!("{}</item>\n", indent));
            }
            Value::Null => out.push_str(&format!("{}<item>null</item>\n", indent)),
            Value::Bool(b) => out.push_str(&format!("{}<item>{}</item>\n", indent, b)),
            Value::Number(n) => {
                out.push_str(&format!("{}<item>{}</item>\n", indent, number_text(n)));
            }
            Value::String(s) => {
                out.push_str(&format!("{}<item>{}</item>\n", indent, escape_xml(s)));
            }
        }
    }
}
