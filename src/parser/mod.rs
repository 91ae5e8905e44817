//! JSON parsing with position-aware diagnostics

pub mod directory;
pub mod filter;
pub mod location;
pub mod validation;

pub use location::{locate, offset_to_location, Location};
pub use validation::validate_str;

use crate::error::{ConvertError, ConvertResult};
use serde_json::Value;

/// Parse a JSON document.
///
/// Whitespace-only input is rejected before the parser runs, so callers can
/// tell "nothing was entered" apart from a syntax error. Parse failures keep
/// serde_json's own structured line/column (1-based) together with its
/// message.
pub fn parse_str(source: &str) -> ConvertResult<Value> {
    if source.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    serde_json::from_str(source)
        .map_err(|err| ConvertError::parse(err.to_string(), err.line(), err.column()))
}
