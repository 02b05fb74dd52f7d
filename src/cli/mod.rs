//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::RewriteConfig;
use crate::error::{ConversionErrorKind, KeyCaseError, KeyCaseResult};
use crate::rewrite::Direction;

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "keycase")]
#[command(about = "Rewrite JSON mapping keys between snake_case and camelCase")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Input JSON source (inline JSON, file, or directory)
    #[arg()]
    pub input: Option<String>,

    /// Target key style
    #[arg(long, value_enum, default_value_t = Case::Camel)]
    pub to: Case,

    /// Output file path, or output directory for directory input (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read JSON from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Recursively process directories
    #[arg(long)]
    pub recursive: bool,

    /// JSON pointer of a mapping whose own keys are kept (repeatable)
    #[arg(long = "preserve", value_name = "POINTER")]
    pub preserve: Vec<String>,

    /// Spaces per indentation level (0-8, default: 2)
    #[arg(long)]
    pub indent: Option<u8>,

    /// Compact single-line output
    #[arg(long)]
    pub plain: bool,

    /// Maximum nesting depth (default: 1000)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Maximum input file size (e.g., 10MB, default: 100MB)
    #[arg(long)]
    pub max_input_size: Option<String>,

    /// Print rewrite statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,

    /// Continue rewriting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,
}

/// Key styles for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    #[value(name = "camel", alias = "camelCase")]
    Camel,
    #[value(name = "snake", alias = "snake_case")]
    Snake,
}

impl From<Case> for Direction {
    fn from(case: Case) -> Self {
        match case {
            Case::Camel => Direction::ToCamel,
            Case::Snake => Direction::ToSnake,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub rewrite_config: RewriteConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> KeyCaseResult<Self> {
        let rewrite_config = Self::create_rewrite_config(&args)?;

        Ok(Self {
            args,
            rewrite_config,
        })
    }

    /// Create rewrite configuration from CLI arguments
    fn create_rewrite_config(args: &Args) -> KeyCaseResult<RewriteConfig> {
        let defaults = RewriteConfig::default();
        let max_input_bytes = match &args.max_input_size {
            Some(limit) => parse_size_limit(limit)?,
            None => defaults.max_input_bytes,
        };

        let config = RewriteConfig {
            direction: args.to.into(),
            pretty: !args.plain,
            indent_size: args.indent.unwrap_or(defaults.indent_size),
            preserve: args.preserve.clone(),
            max_depth: args.max_depth.or(defaults.max_depth),
            max_input_bytes,
        };

        // Validate configuration
        config
            .validate()
            .map_err(|e| KeyCaseError::conversion(ConversionErrorKind::configuration(e)))?;

        Ok(config)
    }

    /// Check if we should continue on error
    pub fn continue_on_error(&self) -> bool {
        self.args.continue_on_error
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        if self.args.stdin {
            "standard input".to_string()
        } else if let Some(input) = &self.args.input {
            format!("'{}'", input)
        } else {
            "no input specified".to_string()
        }
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        if let Some(output) = &self.args.output {
            format!("'{}'", output.display())
        } else {
            "standard output".to_string()
        }
    }
}

/// Parse a size limit string (e.g., "100MB", "1GB", "500KB", "2048")
pub fn parse_size_limit(limit: &str) -> KeyCaseResult<usize> {
    let limit_str = limit.trim().to_uppercase();
    let invalid = || {
        KeyCaseError::conversion(ConversionErrorKind::Configuration {
            message: format!("Invalid size limit: {}", limit_str),
        })
    };

    let (number, multiplier) = if let Some(n) = limit_str.strip_suffix("GB") {
        (n, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(n) = limit_str.strip_suffix("MB") {
        (n, 1024.0 * 1024.0)
    } else if let Some(n) = limit_str.strip_suffix("KB") {
        (n, 1024.0)
    } else if let Some(n) = limit_str.strip_suffix('B') {
        (n, 1.0)
    } else {
        (limit_str.as_str(), 1.0)
    };

    let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok((value * multiplier) as usize)
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

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("✓ {}", message);
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

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &KeyCaseError) {
    CliUtils::show_error(&error.user_message());

    match error {
        KeyCaseError::ParseError(err) => {
            if let Some(preview) = &err.input_preview {
                eprintln!("\n{}", preview);
            }
        }
        KeyCaseError::Conversion {
            kind: ConversionErrorKind::InputTooLarge { .. },
        } => {
            eprintln!("\nTip: Use --max-input-size to raise the limit");
        }
        KeyCaseError::Conversion {
            kind: ConversionErrorKind::PointerNotFound { .. },
        } => {
            eprintln!("\nTip: --preserve takes a JSON pointer such as /meta/labels");
        }
        _ => {}
    }

    eprintln!("\nTry 'keycase --help' for usage information.");
}
