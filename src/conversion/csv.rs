//! CSV rendering

use serde_json::Value;

use crate::conversion::escape::{csv_needs_quoting, quote_csv_field};
use crate::conversion::number::number_text;

/// Render a JSON value as CSV.
///
/// A non-array input is treated as a one-element array of itself; an empty
/// array renders as the empty string. The header row comes from the keys of
/// the first element in insertion order, so fields that only appear in
/// later elements are dropped. Every row, header included, ends with `\n`.
pub fn render_csv(value: &Value) -> String {
    let single;
    let rows: &[Value] = match value {
        Value::Array(items) => items.as_slice(),
        other => {
            single = std::slice::from_ref(other);
            single
        }
    };

    if rows.is_empty() {
        return String::new();
    }

    let headers: Vec<&str> = match &rows[0] {
        Value::Object(map) => map.keys().map(|k| k.as_str()).collect(),
        _ => Vec::new(),
    };

    let mut out = String::new();
    out.push_str(&headers.join(","));
    out.push('\n');

    for row in rows {
        let fields: Vec<String> = headers
            .iter()
            .map(|header| field_text(row.as_object().and_then(|map| map.get(*header))))
            .collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}

/// Text for one cell; `None` covers fields missing from a row
fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(container @ (Value::Object(_) | Value::Array(_))) => {
            let json = serde_json::to_string(container).unwrap_or_default();
            quote_csv_field(&json)
        }
        Some(Value::String(s)) => {
            if csv_needs_quoting(s) {
                quote_csv_field(s)
            } else {
                s.clone()
            }
        }
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_text(n),
    }
}
