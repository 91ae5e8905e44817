//! Error types shared by the formatting and conversion pipeline

use std::fmt;

/// A parse failure with the position the parser reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    /// 1-based line of the first error
    pub line: usize,
    /// 1-based column of the first error
    pub column: usize,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // serde_json messages already carry their own "at line L column C"
        // suffix, so the position fields are not repeated here
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

/// Errors surfaced by the document operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The input was empty or contained only whitespace
    #[error("no JSON input provided")]
    EmptyInput,

    /// The input was not valid JSON
    #[error(transparent)]
    ParseFailure(#[from] Diagnostic),

    /// The requested target format is not one of xml, yaml, csv
    #[error("unsupported target format: {format}")]
    UnsupportedFormat { format: String },
}

impl ConvertError {
    pub fn parse(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::ParseFailure(Diagnostic::new(message, line, column))
    }

    pub fn unsupported(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => "Please enter some JSON to process".to_string(),
            Self::ParseFailure(diag) => format!(
                "Invalid JSON: {}\nAt line {}, column {}",
                diag.message, diag.line, diag.column
            ),
            Self::UnsupportedFormat { format } => {
                format!("Conversion to {} is not supported", format)
            }
        }
    }
}

/// Result type for document operations
pub type ConvertResult<T> = Result<T, ConvertError>;
