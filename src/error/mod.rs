//! Error types for key rewriting and the JSON document pipeline

use std::fmt;
use std::path::PathBuf;

/// Failure kinds raised outside of parsing
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("Cannot preserve keys of a {found}: only mappings carry keys")]
    NotAMapping { found: &'static str },

    #[error("No value at JSON pointer '{pointer}'")]
    PointerNotFound { pointer: String },

    #[error("Nesting depth {depth} exceeds limit of {limit}")]
    DepthExceeded { depth: usize, limit: usize },

    #[error("Input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge { size: u64, limit: usize },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConversionErrorKind {
    pub fn not_a_mapping(found: &'static str) -> Self {
        Self::NotAMapping { found }
    }

    pub fn pointer_not_found(pointer: impl Into<String>) -> Self {
        Self::PointerNotFound {
            pointer: pointer.into(),
        }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for the crate
#[derive(Debug, thiserror::Error)]
pub enum KeyCaseError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{kind}")]
    Conversion { kind: ConversionErrorKind },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KeyCaseError {
    pub fn parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::ParseError(ParseError::new(message, location))
    }

    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind }
    }

    pub fn kind(&self) -> Option<&ConversionErrorKind> {
        match self {
            Self::Conversion { kind } => Some(kind),
            _ => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => {
                if let Some((line, col)) = err.location {
                    format!(
                        "JSON parse error at line {}, column {}: {}",
                        line, col, err.message
                    )
                } else {
                    format!("JSON parse error: {}", err.message)
                }
            }
            Self::Serialize(err) => format!("Cannot write output as JSON: {}", err),
            Self::Conversion { kind } => match kind {
                ConversionErrorKind::DepthExceeded { depth, limit } => format!(
                    "Input nests {} levels deep (limit: {}); raise --max-depth to allow it",
                    depth, limit
                ),
                ConversionErrorKind::Io {
                    message,
                    path: Some(path),
                } => format!("{} ({})", message, path.display()),
                _ => kind.to_string(),
            },
            Self::Other(err) => format!("Unexpected error: {}", err),
        }
    }
}

impl From<ConversionErrorKind> for KeyCaseError {
    fn from(kind: ConversionErrorKind) -> Self {
        Self::conversion(kind)
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub input_preview: Option<String>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            input_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.input_preview = Some(preview);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for crate operations
pub type KeyCaseResult<T> = Result<T, KeyCaseError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
