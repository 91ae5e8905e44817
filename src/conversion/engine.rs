//! Conversion engine wiring parsing, format dispatch and rendering together

use std::time::Instant;

use serde_json::Value;

use crate::conversion::config::{ConversionConfig, TargetFormat};
use crate::conversion::csv::render_csv;
use crate::conversion::xml::{render_xml, render_xml_with_root};
use crate::conversion::yaml::render_yaml;
use crate::error::{ConvertError, ConvertResult};
use crate::parser::parse_str;

/// Rendered output together with facts about the run
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl ConversionOutput {
    pub fn new(content: String, metadata: ConversionMetadata) -> Self {
        Self { content, metadata }
    }

    /// Get the rendered text
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Facts about a single conversion run
#[derive(Debug, Clone, Copy)]
pub struct ConversionMetadata {
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub processing_time_ms: u64,
}

/// Drives conversions under one configuration
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Render an already-parsed value in the configured format
    pub fn render(&self, value: &Value) -> String {
        match self.config.format {
            TargetFormat::Xml => render_xml_with_root(value, &self.config.xml_root),
            TargetFormat::Yaml => render_yaml(value),
            TargetFormat::Csv => render_csv(value),
        }
    }

    /// Parse a JSON document and render it in the configured format
    pub fn convert_str(&self, source: &str) -> ConvertResult<ConversionOutput> {
        let started = Instant::now();
        let value = parse_str(source)?;
        let content = self.render(&value);

        let metadata = ConversionMetadata {
            input_bytes: source.len() as u64,
            output_bytes: content.len() as u64,
            processing_time_ms: started.elapsed().as_millis() as u64,
        };
        Ok(ConversionOutput::new(content, metadata))
    }
}

/// Convert a JSON document to the format named by `format`.
///
/// Outcomes are checked in a fixed order: empty input is reported before a
/// parse failure, and a parse failure before an unknown format name.
pub fn convert(source: &str, format: &str) -> ConvertResult<String> {
    let value = parse_str(source)?;
    let target =
        TargetFormat::from_name(format).ok_or_else(|| ConvertError::unsupported(format))?;
    Ok(render(&value, target))
}

/// Render an already-parsed value with default settings
pub fn render(value: &Value, format: TargetFormat) -> String {
    match format {
        TargetFormat::Xml => render_xml(value),
        TargetFormat::Yaml => render_yaml(value),
        TargetFormat::Csv => render_csv(value),
    }
}

/// Convert with a full configuration, collecting run metadata
pub fn convert_with_config(
    source: &str,
    config: &ConversionConfig,
) -> ConvertResult<ConversionOutput> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_str(source)
}
