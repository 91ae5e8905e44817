use clap::Parser;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;

use jsonfmt::cli::input::InputKind;
use jsonfmt::cli::{
    path_mapping, Args, CliUtils, Command, ConvertArgs, FormatArgs, MinifyArgs, ValidateArgs,
    ViewArgs,
};
use jsonfmt::conversion::{
    ConversionConfig, ConversionEngine, ConversionOutput, ConversionStatistics,
};
use jsonfmt::error::ConvertError;
use jsonfmt::formatter::{format_str, minify_str, IndentStyle};
use jsonfmt::parser::directory::find_json_files;
use jsonfmt::parser::{parse_str, validate_str};
use jsonfmt::view::{render_view, ViewMode};

fn main() -> Result<()> {
    let args = Args::parse();
    let quiet = args.quiet;

    match &args.command {
        Command::Convert(convert) => handle_convert(convert, quiet),
        Command::Format(format) => handle_format(format, quiet),
        Command::Minify(minify) => handle_minify(minify, quiet),
        Command::Validate(validate) => handle_validate(validate, quiet),
        Command::View(view) => handle_view(view, quiet),
    }
}

fn handle_convert(args: &ConvertArgs, quiet: bool) -> Result<()> {
    let config = ConversionConfig::new(args.format.into()).with_xml_root(args.root.as_str());
    config
        .validate()
        .map_err(|message| anyhow::anyhow!(message))?;

    let source = InputKind::resolve(args.input.as_deref(), args.stdin)?;
    if let InputKind::Directory(input_dir) = &source {
        return convert_directory(input_dir, args, &config, quiet);
    }

    let content = source.read_content()?;
    let engine = ConversionEngine::new(config);
    let output = engine
        .convert_str(&content)
        .map_err(|error| anyhow::anyhow!(error.user_message()))?;

    write_output(args.output.as_deref(), output.as_str(), quiet)?;

    if args.stats {
        let stats = ConversionStatistics::for_conversion(
            output.metadata.input_bytes,
            output.metadata.output_bytes,
            Duration::from_millis(output.metadata.processing_time_ms),
        );
        show_statistics(&stats, quiet);
    }

    Ok(())
}

fn convert_directory(
    input_dir: &Path,
    args: &ConvertArgs,
    config: &ConversionConfig,
    quiet: bool,
) -> Result<()> {
    let output_dir = args
        .output
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Output directory required for directory conversion"))?;

    std::fs::create_dir_all(output_dir)?;

    let json_files = find_json_files(input_dir, args.recursive)?;
    if json_files.is_empty() {
        CliUtils::show_warning(
            &format!("No JSON files found in {}", input_dir.display()),
            quiet,
        );
        return Ok(());
    }

    if !quiet {
        println!("Found {} JSON files", json_files.len());
    }

    // The bar draws on stderr, so only show it on an interactive terminal
    let progress = if atty::is(atty::Stream::Stderr) && !quiet {
        Some(CliUtils::create_progress_bar(json_files.len() as u64))
    } else {
        None
    };

    let engine = ConversionEngine::new(config.clone());
    let mut totals = ConversionStatistics::new();
    let mut failures = 0usize;
    let started = Instant::now();

    for json_file in &json_files {
        let relative = json_file.strip_prefix(input_dir).unwrap_or(json_file);
        let output_file = path_mapping::map_input_to_output(
            input_dir,
            json_file,
            output_dir,
            config.format.extension(),
        );

        if let Some(parent) = output_file.parent() {
            std::fs::create_dir_all(parent)?;
        }

        if let Some(pb) = &progress {
            pb.set_message(relative.display().to_string());
        }

        match convert_single_file(&engine, json_file, &output_file) {
            Ok(output) => {
                totals.combine(&ConversionStatistics::for_conversion(
                    output.metadata.input_bytes,
                    output.metadata.output_bytes,
                    Duration::from_millis(output.metadata.processing_time_ms),
                ));
                if let Some(pb) = &progress {
                    pb.inc(1);
                } else if !quiet {
                    println!("✓ {} -> {}", relative.display(), output_file.display());
                }
            }
            Err(error) => {
                failures += 1;
                if let Some(pb) = &progress {
                    pb.inc(1);
                }
                CliUtils::show_error(&format!(
                    "Error converting {}: {}",
                    relative.display(),
                    error
                ));
                if !args.continue_on_error {
                    if let Some(pb) = &progress {
                        pb.finish_and_clear();
                    }
                    return Err(anyhow::anyhow!("Aborting due to conversion error: {}", error));
                }
            }
        }
    }

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    CliUtils::show_success(
        &format!(
            "Converted {} of {} files in {}",
            json_files.len() - failures,
            json_files.len(),
            CliUtils::format_duration(started.elapsed())
        ),
        quiet,
    );

    if args.stats {
        show_statistics(&totals, quiet);
    }

    Ok(())
}

fn convert_single_file(
    engine: &ConversionEngine,
    input_path: &Path,
    output_path: &Path,
) -> Result<ConversionOutput> {
    let content = std::fs::read_to_string(input_path)?;
    let output = engine
        .convert_str(&content)
        .map_err(|error| anyhow::anyhow!(error.user_message()))?;
    std::fs::write(output_path, output.as_str())?;
    Ok(output)
}

fn handle_format(args: &FormatArgs, quiet: bool) -> Result<()> {
    let style = IndentStyle::from_str(&args.indent).map_err(|message| anyhow::anyhow!(message))?;

    let source = InputKind::resolve(args.input.as_deref(), args.stdin)?;
    let content = source.read_content()?;
    let formatted =
        format_str(&content, style).map_err(|error| anyhow::anyhow!(error.user_message()))?;

    write_output(args.output.as_deref(), &formatted, quiet)
}

fn handle_minify(args: &MinifyArgs, quiet: bool) -> Result<()> {
    let source = InputKind::resolve(args.input.as_deref(), args.stdin)?;
    let content = source.read_content()?;
    let minified = minify_str(&content).map_err(|error| anyhow::anyhow!(error.user_message()))?;

    write_output(args.output.as_deref(), &minified, quiet)
}

fn handle_validate(args: &ValidateArgs, quiet: bool) -> Result<()> {
    let source = InputKind::resolve(args.input.as_deref(), args.stdin)?;

    if let InputKind::Directory(dir) = &source {
        return validate_directory(dir, args.recursive);
    }

    let content = source.read_content()?;
    validate_str(&content).map_err(|error| anyhow::anyhow!(error.user_message()))?;
    CliUtils::show_success("Valid JSON", quiet);
    Ok(())
}

fn validate_directory(dir: &Path, recursive: bool) -> Result<()> {
    let json_files = find_json_files(dir, recursive)?;

    for json_file in &json_files {
        let relative = json_file.strip_prefix(dir).unwrap_or(json_file);

        match std::fs::read_to_string(json_file) {
            Ok(content) => match validate_str(&content) {
                Ok(()) => println!("✓ {}", relative.display()),
                Err(error) => {
                    CliUtils::show_error(&format!("{}: {}", relative.display(), error))
                }
            },
            Err(error) => CliUtils::show_error(&format!("{}: {}", relative.display(), error)),
        }
    }

    Ok(())
}

fn handle_view(args: &ViewArgs, quiet: bool) -> Result<()> {
    let style = IndentStyle::from_str(&args.indent).map_err(|message| anyhow::anyhow!(message))?;
    let mode = ViewMode::from(args.mode);

    let source = InputKind::resolve(args.input.as_deref(), args.stdin)?;
    let content = source.read_content()?;

    let rendered = match parse_str(&content) {
        Ok(value) => {
            if matches!(mode, ViewMode::Table | ViewMode::Tree)
                && !value.is_object()
                && !value.is_array()
            {
                return Err(anyhow::anyhow!(
                    "Cannot display as {}: not an object or array",
                    mode
                ));
            }
            render_view(&value, mode, style)
        }
        // The text and code views show content that is not JSON as-is
        Err(ConvertError::ParseFailure(_))
            if matches!(mode, ViewMode::Text | ViewMode::Code) =>
        {
            content.clone()
        }
        Err(error) => return Err(anyhow::anyhow!(error.user_message())),
    };

    write_output(args.output.as_deref(), &rendered, quiet)
}

fn write_output(output: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
            CliUtils::show_success(&format!("Written to: {}", path.display()), quiet);
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn show_statistics(stats: &ConversionStatistics, quiet: bool) {
    if quiet {
        return;
    }
    println!("\n{}", stats.summary());
}
