//! JSON conversion module
//!
//! This module contains the format renderers, dispatch logic, configuration
//! and statistics.

pub mod config;
pub mod csv;
pub mod engine;
pub mod escape;
pub mod number;
pub mod stats;
pub mod xml;
pub mod yaml;

pub use config::{ConversionConfig, TargetFormat};

pub use engine::{
    convert, convert_with_config, render, ConversionEngine, ConversionMetadata, ConversionOutput,
};

pub use csv::render_csv;
pub use escape::escape_xml;
pub use stats::{format_file_size, ConversionStatistics};
pub use xml::{render_xml, render_xml_with_root};
pub use yaml::render_yaml;
