//! HTML table view

use super::escape_html;
use crate::conversion::number::number_text;
use serde_json::{Map, Value};

/// Render a document as an HTML table.
///
/// Arrays of containers become one row per element with a column for every
/// member key seen anywhere in the array. Arrays of scalars become an
/// index/value listing, objects a key/value listing.
pub fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) => render_array(items),
        Value::Object(map) => render_object(map),
        // A scalar has no tabular shape; show it as a lone value.
        other => format!(
            "<table class=\"json-table\"><thead><tr><th>Value</th></tr></thead>\
             <tbody><tr><td>{}</td></tr></tbody></table>",
            cell_text(Some(other))
        ),
    }
}

fn render_array(items: &[Value]) -> String {
    if items.is_empty() {
        return "<div class=\"empty-array\">Empty Array []</div>".to_string();
    }

    if matches!(items[0], Value::Object(_) | Value::Array(_)) {
        return render_rows(items);
    }

    let mut html = String::from(
        "<table class=\"json-table\"><thead><tr><th>Index</th><th>Value</th></tr></thead><tbody>",
    );
    for (index, item) in items.iter().enumerate() {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            index,
            cell_text(Some(item))
        ));
    }
    html.push_str("</tbody></table>");
    html
}

/// One row per element, one column per member key in first-seen order.
fn render_rows(items: &[Value]) -> String {
    let mut headers: Vec<String> = Vec::new();
    for item in items {
        for key in member_keys(item) {
            if !headers.contains(&key) {
                headers.push(key);
            }
        }
    }

    let mut html = String::from("<table class=\"json-table\"><thead><tr>");
    for header in &headers {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr></thead><tbody>");

    for item in items {
        html.push_str("<tr>");
        for header in &headers {
            html.push_str(&format!("<td>{}</td>", cell_text(member(item, header))));
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html
}

fn render_object(map: &Map<String, Value>) -> String {
    let mut html = String::from(
        "<table class=\"json-table\"><thead><tr><th>Key</th><th>Value</th></tr></thead><tbody>",
    );
    for (key, value) in map {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(key),
            cell_text(Some(value))
        ));
    }
    html.push_str("</tbody></table>");
    html
}

/// Member keys of a row element. Arrays contribute index keys so that arrays
/// of arrays still line up in columns.
fn member_keys(item: &Value) -> Vec<String> {
    match item {
        Value::Object(map) => map.keys().cloned().collect(),
        Value::Array(items) => (0..items.len()).map(|index| index.to_string()).collect(),
        _ => Vec::new(),
    }
}

fn member<'a>(item: &'a Value, key: &str) -> Option<&'a Value> {
    match item {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    }
}

/// A single cell. Missing members and nulls share the null span.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "<span class=\"null-value\">null</span>".to_string(),
        Some(Value::Array(items)) => format!(
            "<span class=\"object-value\">Array [{} items]</span>",
            items.len()
        ),
        Some(Value::Object(map)) => format!(
            "<span class=\"object-value\">Object [{} items]</span>",
            map.len()
        ),
        Some(Value::String(text)) => escape_html(text),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number_text(number),
    }
}
