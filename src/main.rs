use anyhow::{anyhow, bail, Result};
use clap::Parser;
use std::fs;
use std::io::IsTerminal;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use keycase::cli::{self, path_mapping, Args, CliConfig, CliUtils};
use keycase::conversion::{RewriteEngine, RewriteOutput, RewriteStats};
use keycase::error::{ConversionErrorKind, KeyCaseError, KeyCaseResult};
use keycase::parser::directory::find_json_files;
use keycase::parser::JsonSource;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        match e.downcast_ref::<KeyCaseError>() {
            Some(err) => cli::handle_error(err),
            None => CliUtils::show_error(&format!("{:#}", e)),
        }
        std::process::exit(1);
    }
}

/// Log to stderr so stdout only ever carries JSON. RUST_LOG wins over --verbose.
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "keycase=debug" } else { "keycase=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    let cli_config = CliConfig::from_args(args)?;
    let engine = RewriteEngine::new(cli_config.rewrite_config.clone())?;

    tracing::debug!(
        input = %cli_config.input_description(),
        output = %cli_config.output_description(),
        direction = %engine.config().direction,
        "starting rewrite"
    );

    handle_rewrite(&cli_config, &engine)
}

fn handle_rewrite(cli_config: &CliConfig, engine: &RewriteEngine) -> Result<()> {
    let args = &cli_config.args;
    if args.stdin {
        return rewrite_single(&JsonSource::Stdin, cli_config, engine);
    }

    let Some(input) = &args.input else {
        bail!("No input provided. Use --stdin or provide an input path");
    };

    // Check if input looks like JSON string (starts with { or [)
    let trimmed = input.trim();
    if (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
    {
        return rewrite_single(&JsonSource::String(input.clone()), cli_config, engine);
    }

    let path = PathBuf::from(input);
    if path.is_file() {
        rewrite_single(&JsonSource::File(path), cli_config, engine)
    } else if path.is_dir() {
        rewrite_directory(&path, cli_config, engine)
    } else {
        Err(anyhow!("Input path does not exist: {}", input))
    }
}

fn rewrite_single(source: &JsonSource, cli_config: &CliConfig, engine: &RewriteEngine) -> Result<()> {
    let output = engine.rewrite_source(source)?;

    match &cli_config.args.output {
        Some(output_path) => {
            write_output(&output, output_path)?;
            CliUtils::show_success(
                &format!("Rewrote to: {}", output_path.display()),
                cli_config.is_quiet(),
            );
        }
        None => println!("{}", output.content),
    }

    if cli_config.want_stats() {
        print_statistics(&output.stats, output.processing_time_ms, cli_config.is_quiet());
    }

    Ok(())
}

fn rewrite_directory(input_dir: &Path, cli_config: &CliConfig, engine: &RewriteEngine) -> Result<()> {
    let quiet = cli_config.is_quiet();
    let output_dir = cli_config
        .args
        .output
        .as_ref()
        .ok_or_else(|| anyhow!("Output directory required for directory input"))?;

    fs::create_dir_all(output_dir)?;

    let json_files = find_json_files(input_dir, cli_config.args.recursive)
        .map_err(|e| anyhow!("Failed finding JSON files: {}", e))?;

    if json_files.is_empty() {
        CliUtils::show_warning(
            &format!("No JSON files found in {}", input_dir.display()),
            quiet,
        );
        return Ok(());
    }

    if !quiet {
        eprintln!("Found {} JSON files", json_files.len());
    }

    let mut totals = RewriteStats::default();
    let mut elapsed_ms = 0;
    let mut failures = 0;

    for json_file in &json_files {
        let relative_path = json_file.strip_prefix(input_dir).unwrap_or(json_file);
        let output_file = path_mapping::map_input_to_output(input_dir, json_file, output_dir);

        match rewrite_file(json_file, &output_file, engine) {
            Ok(output) => {
                totals.combine(&output.stats);
                elapsed_ms += output.processing_time_ms;
                CliUtils::show_success(
                    &format!("{} -> {}", relative_path.display(), output_file.display()),
                    quiet,
                );
            }
            Err(e) => {
                failures += 1;
                CliUtils::show_error(&format!(
                    "Error rewriting {}: {}",
                    relative_path.display(),
                    e.user_message()
                ));
                if !cli_config.continue_on_error() {
                    bail!("Aborting due to rewrite error in {}", relative_path.display());
                }
            }
        }
    }

    if failures > 0 {
        CliUtils::show_warning(
            &format!("{} of {} files failed", failures, json_files.len()),
            quiet,
        );
    }

    if cli_config.want_stats() {
        print_statistics(&totals, elapsed_ms, quiet);
    }

    Ok(())
}

fn rewrite_file(input_path: &Path, output_path: &Path, engine: &RewriteEngine) -> KeyCaseResult<RewriteOutput> {
    let output = engine.rewrite_source(&JsonSource::File(input_path.to_path_buf()))?;
    write_output(&output, output_path)?;
    Ok(output)
}

fn write_output(output: &RewriteOutput, output_path: &Path) -> KeyCaseResult<()> {
    let io_error = |e: std::io::Error| {
        KeyCaseError::conversion(ConversionErrorKind::io(
            format!("Failed to write output: {}", e),
            Some(output_path.to_path_buf()),
        ))
    };

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(output_path, format!("{}\n", output.content)).map_err(io_error)
}

fn print_statistics(stats: &RewriteStats, elapsed_ms: u64, quiet: bool) {
    if quiet {
        return;
    }

    eprintln!("\nRewrite Statistics:");
    eprintln!("Mappings: {}", stats.mappings);
    eprintln!("Sequences: {}", stats.sequences);
    eprintln!("Keys: {} ({} renamed)", stats.output_keys(), stats.renamed_keys);
    if stats.collided_keys > 0 {
        eprintln!("Collided keys: {} (later value kept)", stats.collided_keys);
    }
    if stats.preserved_mappings > 0 {
        eprintln!("Preserved mappings: {}", stats.preserved_mappings);
    }
    eprintln!("Max depth: {}", stats.max_depth);
    eprintln!(
        "Processing time: {}",
        CliUtils::format_duration(Duration::from_millis(elapsed_ms))
    );
}
