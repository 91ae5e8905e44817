//! JSON pretty-printing and minification

use crate::error::ConvertResult;
use crate::parser::parse_str;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Indentation unit used when pretty-printing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    /// Indent with the given number of spaces (up to 8)
    Spaces(u8),
    /// Indent with a tab character
    Tab,
}

impl IndentStyle {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "tab" | "\t" => Ok(IndentStyle::Tab),
            other => match other.parse::<u8>() {
                Ok(width) if width <= 8 => Ok(IndentStyle::Spaces(width)),
                _ => Err(format!(
                    "Invalid indent '{}'. Use a number of spaces (0-8) or 'tab'",
                    other
                )),
            },
        }
    }

    /// The byte sequence one level of indentation adds
    pub fn unit(&self) -> &'static [u8] {
        const SPACES: &[u8] = b"        ";
        match self {
            IndentStyle::Spaces(width) => &SPACES[..*width as usize],
            IndentStyle::Tab => b"\t",
        }
    }
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(2)
    }
}

/// Parse a JSON string and re-emit it pretty-printed
pub fn format_str(source: &str, style: IndentStyle) -> ConvertResult<String> {
    let value = parse_str(source)?;
    Ok(format_value(&value, style))
}

/// Parse a JSON string and re-emit it on a single line
pub fn minify_str(source: &str) -> ConvertResult<String> {
    let value = parse_str(source)?;
    Ok(serde_json::to_string(&value).unwrap_or_default())
}

/// Pretty-print an already parsed value
pub fn format_value(value: &Value, style: IndentStyle) -> String {
    if style == IndentStyle::Spaces(0) {
        return serde_json::to_string(value).unwrap_or_default();
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(style.unit());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    if value.serialize(&mut serializer).is_err() {
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}
