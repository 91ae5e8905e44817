//! jsonfmt
//!
//! A Rust CLI tool for formatting, validating and converting JSON documents
//! to XML, YAML and CSV, with support for various input sources.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod view;

// Re-export commonly used types
pub use conversion::{
    convert, convert_with_config, render, ConversionConfig, ConversionEngine, ConversionOutput,
    ConversionStatistics, TargetFormat,
};
pub use error::{ConvertError, ConvertResult, Diagnostic};
pub use formatter::{format_str, minify_str, IndentStyle};
pub use parser::{locate, parse_str, validate_str, Location};
pub use view::{render_view, ViewMode};

/// Convert a JSON document with default configuration for the format
pub fn convert_json(source: &str, format: TargetFormat) -> ConvertResult<String> {
    let value = parse_str(source)?;
    Ok(render(&value, format))
}
