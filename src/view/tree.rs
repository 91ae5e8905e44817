//! Collapsible HTML tree view

use super::escape_html;
use crate::conversion::number::number_text;
use serde_json::Value;

/// Render a document as a collapsible HTML tree of `<details>` blocks.
pub fn render_tree(value: &Value) -> String {
    format!("<div class=\"json-tree\">{}</div>", node_html(value))
}

fn node_html(value: &Value) -> String {
    match value {
        Value::Null => "<span class=\"null-value\">null</span>".to_string(),
        Value::Array(items) => {
            if items.is_empty() {
                return "[]".to_string();
            }
            let mut html = format!(
                "<details open><summary>Array [{}]</summary><div class=\"tree-content\">",
                items.len()
            );
            for (index, item) in items.iter().enumerate() {
                html.push_str(&format!(
                    "<div class=\"tree-item\"><span class=\"tree-key\">{}:</span> {}</div>",
                    index,
                    node_html(item)
                ));
            }
            html.push_str("</div></details>");
            html
        }
        Value::Object(map) => {
            if map.is_empty() {
                return "{}".to_string();
            }
            let mut html = format!(
                "<details open><summary>Object {{{}}}</summary><div class=\"tree-content\">",
                map.len()
            );
            for (key, member) in map {
                html.push_str(&format!(
                    "<div class=\"tree-item\"><span class=\"tree-key\">{}:</span> {}</div>",
                    escape_html(key),
                    node_html(member)
                ));
            }
            html.push_str("</div></details>");
            html
        }
        Value::String(text) => format!(
            "<span class=\"string-value\">&quot;{}&quot;</span>",
            escape_html(text)
        ),
        Value::Number(number) => {
            format!("<span class=\"number-value\">{}</span>", number_text(number))
        }
        Value::Bool(flag) => format!("<span class=\"boolean-value\">{}</span>", flag),
    }
}
