//! Alternative presentations of a parsed JSON document

pub mod table;
pub mod tree;

use crate::formatter::{format_value, IndentStyle};
use serde_json::Value;

pub use table::render_table;
pub use tree::render_tree;

/// How a document should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Plain text. A top-level string prints raw, everything else pretty-prints
    Text,
    /// Pretty-printed JSON
    Code,
    /// HTML table
    Table,
    /// Collapsible HTML tree
    Tree,
}

impl ViewMode {
    pub const ALL: [ViewMode; 4] = [
        ViewMode::Text,
        ViewMode::Code,
        ViewMode::Table,
        ViewMode::Tree,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(ViewMode::Text),
            "code" => Some(ViewMode::Code),
            "table" => Some(ViewMode::Table),
            "tree" => Some(ViewMode::Tree),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Text => "text",
            ViewMode::Code => "code",
            ViewMode::Table => "table",
            ViewMode::Tree => "tree",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render a parsed document in the requested view
pub fn render_view(value: &Value, mode: ViewMode, style: IndentStyle) -> String {
    match mode {
        ViewMode::Text => match value {
            Value::String(text) => text.clone(),
            other => format_value(other, style),
        },
        ViewMode::Code => format_value(value, style),
        ViewMode::Table => table::render_table(value),
        ViewMode::Tree => tree::render_tree(value),
    }
}

/// Escape text for embedding in HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}
