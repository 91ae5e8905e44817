//! Command-line interface module

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::TargetFormat;
use crate::view::ViewMode;

pub mod input;
pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "jsonfmt")]
#[command(about = "Format, validate and convert JSON to XML, YAML and CSV")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert JSON to XML, YAML or CSV
    Convert(ConvertArgs),
    /// Pretty-print JSON
    Format(FormatArgs),
    /// Collapse JSON onto a single line
    Minify(MinifyArgs),
    /// Check JSON syntax without converting
    Validate(ValidateArgs),
    /// Render JSON in an alternative view
    View(ViewArgs),
}

/// Arguments for `jsonfmt convert`
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Input JSON (inline document, file, or directory)
    pub input: Option<String>,

    /// Target format
    #[arg(short, long, value_enum)]
    pub format: OutputFormat,

    /// Root element name for XML documents
    #[arg(long, default_value = "root")]
    pub root: String,

    /// Output file or directory (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read JSON from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Recursively process directories
    #[arg(long)]
    pub recursive: bool,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,
}

/// Arguments for `jsonfmt format`
#[derive(clap::Args, Debug, Clone)]
pub struct FormatArgs {
    /// Input JSON (inline document or file)
    pub input: Option<String>,

    /// Spaces per indentation level (0-8) or "tab"
    #[arg(long, default_value = "2")]
    pub indent: String,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read JSON from standard input
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for `jsonfmt minify`
#[derive(clap::Args, Debug, Clone)]
pub struct MinifyArgs {
    /// Input JSON (inline document or file)
    pub input: Option<String>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read JSON from standard input
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for `jsonfmt validate`
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Input path (inline document, file, or directory)
    pub input: Option<String>,

    /// Read JSON from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Recursively validate directories
    #[arg(long)]
    pub recursive: bool,
}

/// Arguments for `jsonfmt view`
#[derive(clap::Args, Debug, Clone)]
pub struct ViewArgs {
    /// Input JSON (inline document or file)
    pub input: Option<String>,

    /// View to render
    #[arg(short, long, value_enum, default_value = "text")]
    pub mode: ViewStyle,

    /// Indent for the text and code views (0-8 or "tab")
    #[arg(long, default_value = "2")]
    pub indent: String,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read JSON from standard input
    #[arg(long)]
    pub stdin: bool,
}

/// Target formats for the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Xml,
    Yaml,
    Csv,
}

impl From<OutputFormat> for TargetFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Xml => TargetFormat::Xml,
            OutputFormat::Yaml => TargetFormat::Yaml,
            OutputFormat::Csv => TargetFormat::Csv,
        }
    }
}

/// View modes for the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStyle {
    Text,
    Code,
    Table,
    Tree,
}

impl From<ViewStyle> for ViewMode {
    fn from(style: ViewStyle) -> Self {
        match style {
            ViewStyle::Text => ViewMode::Text,
            ViewStyle::Code => ViewMode::Code,
            ViewStyle::Table => ViewMode::Table,
            ViewStyle::Tree => ViewMode::Tree,
        }
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }
}
