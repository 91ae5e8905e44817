//! YAML rendering

use serde_json::{Map, Value};

use crate::conversion::number::number_text;

/// Render a JSON value as block-style YAML.
///
/// Strings are always double-quoted and only embedded `"` is escaped, so
/// string-typed values survive a round trip (`"true"` stays a string).
/// Empty collections render inline as `{}` / `[]`, nesting is two spaces
/// per level, and a container inside a sequence puts its first line right
/// after the dash. No trailing newline.
pub fn render_yaml(value: &Value) -> String {
    match value {
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Object(map) => mapping_block(map, 0),
        Value::Array(items) => sequence_block(items, 0),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => quote_string(s),
    }
}

fn mapping_block(map: &Map<String, Value>, level: usize) -> String {
    let pad = indent(level);
    let mut lines = Vec::with_capacity(map.len());
    for (key, value) in map {
        let key_text = yaml_key(key);
        let line = match value {
            Value::Object(inner) if inner.is_empty() => format!("{}{}: {{}}", pad, key_text),
            Value::Array(inner) if inner.is_empty() => format!("{}{}: []", pad, key_text),
            Value::Object(inner) => {
                format!("{}{}:\n{}", pad, key_text, mapping_block(inner, level + 1))
            }
            Value::Array(inner) => {
                format!("{}{}:\n{}", pad, key_text, sequence_block(inner, level + 1))
            }
            Value::Null => format!("{}{}: null", pad, key_text),
            Value::Bool(b) => format!("{}{}: {}", pad, key_text, b),
            Value::Number(n) => format!("{}{}: {}", pad, key_text, number_text(n)),
            Value::String(s) => format!("{}{}: {}", pad, key_text, quote_string(s)),
        };
        lines.push(line);
    }
    lines.join("\n")
}

fn sequence_block(items: &[Value], level: usize) -> String {
    let pad = indent(level);
    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        let line = match item {
            Value::Object(inner) if inner.is_empty() => format!("{}- {{}}", pad),
            Value::Array(inner) if inner.is_empty() => format!("{}- []", pad),
            Value::Object(inner) => {
                let block = mapping_block(inner, level + 1);
                format!("{}- {}", pad, behind_dash(&block, level + 1))
            }
            Value::Array(inner) => {
                let block = sequence_block(inner, level + 1);
                format!("{}- {}", pad, behind_dash(&block, level + 1))
            }
            Value::Null => format!("{}- null", pad),
            Value::Bool(b) => format!("{}- {}", pad, b),
            Value::Number(n) => format!("{}- {}", pad, number_text(n)),
            Value::String(s) => format!("{}- {}", pad, quote_string(s)),
        };
        lines.push(line);
    }
    lines.join("\n")
}

/// Strip the first line's indent so a nested block starts right after `- `.
/// Continuation lines keep their full indent, which lines them up under the
/// first one.
fn behind_dash(block: &str, level: usize) -> String {
    block
        .strip_prefix(indent(level).as_str())
        .unwrap_or(block)
        .to_string()
}

/// Keys print bare only when they look like identifiers
fn yaml_key(key: &str) -> String {
    if is_plain_key(key) {
        key.to_string()
    } else {
        quote_string(key)
    }
}

fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Double-quote a string, escaping only embedded quotes
fn quote_string(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\\\""))
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}
