//! Canonical number text shared by every output format

use serde_json::Number;

/// Render a JSON number the way dynamic languages print them: integers
/// exactly, whole floats without the decimal point, other floats minimal
/// with trailing zeros trimmed.
pub(crate) fn number_text(value: &Number) -> String {
    // Integers print exactly as parsed
    if value.is_i64() || value.is_u64() {
        return value.to_string();
    }

    match value.as_f64() {
        // Whole floats drop the fraction; the bound keeps the cast in i64 range
        Some(f) if f.fract() == 0.0 && f.abs() < 9e18 => format!("{}", f as i64),
        Some(f) => {
            let formatted = format!("{}", f);
            if formatted.contains('.') {
                let trimmed = formatted.trim_end_matches('0');
                if trimmed.ends_with('.') {
                    trimmed.trim_end_matches('.').to_string()
                } else {
                    trimmed.to_string()
                }
            } else {
                formatted
            }
        }
        None => value.to_string(),
    }
}
