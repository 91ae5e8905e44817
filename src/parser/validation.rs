//! JSON syntax validation

use crate::error::ConvertResult;
use crate::parser::parse_str;

/// Check that `source` parses as JSON, discarding the value
pub fn validate_str(source: &str) -> ConvertResult<()> {
    parse_str(source).map(|_| ())
}
