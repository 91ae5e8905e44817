//! Best-effort mapping of parser error messages to line/column positions

/// A position inside a source document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// 1-based line number
    pub line: usize,
    /// 0-based column, counted in characters since the last newline
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Fallback position when a message carries no usable offset
    pub fn start() -> Self {
        Self { line: 1, column: 0 }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::start()
    }
}

/// Map a parser error message to the position it points at in `source`.
///
/// Messages in the `... at position N` style (JavaScript's `JSON.parse`,
/// among others) carry a flat offset instead of a line/column pair. The
/// first `position N` found, matched case-insensitively with at least one
/// whitespace character before the digits, is resolved against `source`;
/// messages without one map to the start of the document.
pub fn locate(message: &str, source: &str) -> Location {
    match extract_offset(message) {
        Some(offset) => offset_to_location(offset, source),
        None => Location::start(),
    }
}

/// Resolve a byte offset into `source` to its line/column.
///
/// Offsets past the end of the source, or inside a multi-byte character,
/// are clamped down to the nearest valid boundary.
pub fn offset_to_location(offset: usize, source: &str) -> Location {
    let mut end = offset.min(source.len());
    while end > 0 && !source.is_char_boundary(end) {
        end -= 1;
    }
    let prefix = &source[..end];

    let line = prefix.bytes().filter(|&b| b == b'\n').count() + 1;
    let line_start = prefix.rfind('\n').map_or(0, |pos| pos + 1);
    let column = prefix[line_start..].chars().count();

    Location { line, column }
}

/// Find the first `position N` offset in an error message
fn extract_offset(message: &str) -> Option<usize> {
    let lowered = message.to_lowercase();
    let mut rest = lowered.as_str();

    while let Some(found) = rest.find("position") {
        let after = &rest[found + "position".len()..];
        let digits = after.trim_start();
        // the keyword must be separated from the digits by whitespace
        if digits.len() < after.len() {
            let number: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
            if let Ok(offset) = number.parse() {
                return Some(offset);
            }
        }
        rest = after;
    }

    None
}
