//! Configuration options for JSON conversion

use std::fmt;

use crate::conversion::xml::DEFAULT_ROOT;

/// Output formats a JSON document can be converted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    /// Element-per-key XML with a configurable root element
    Xml,
    /// Block-style YAML
    Yaml,
    /// Comma-separated values, one row per array element
    Csv,
}

impl TargetFormat {
    /// Every supported format, for help text and error messages
    pub const ALL: [TargetFormat; 3] = [Self::Xml, Self::Yaml, Self::Csv];

    /// Parse a format name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "xml" => Some(Self::Xml),
            "yaml" => Some(Self::Yaml),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }

    /// File extension for converted output
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Format the output is rendered in
    pub format: TargetFormat,
    /// Root element name wrapped around XML output
    pub xml_root: String,
}

impl ConversionConfig {
    /// Create a configuration with the default XML root element
    pub fn new(format: TargetFormat) -> Self {
        Self {
            format,
            xml_root: DEFAULT_ROOT.to_string(),
        }
    }

    /// Override the XML root element name
    pub fn with_xml_root(mut self, root: impl Into<String>) -> Self {
        self.xml_root = root.into();
        self
    }

    /// Check the configuration for values the renderers cannot emit
    pub fn validate(&self) -> Result<(), String> {
        if !is_valid_element_name(&self.xml_root) {
            return Err(format!(
                "Invalid XML root element name '{}'. Use letters, digits, '-', '_' or '.', starting with a letter or '_'",
                self.xml_root
            ));
        }
        Ok(())
    }
}

/// XML element names start with a letter or underscore and continue with
/// letters, digits, hyphens, underscores or dots
fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
