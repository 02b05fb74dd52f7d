//! JSON input sources and parsing

pub mod directory;
pub mod filter;

use crate::error::{ParseError, ParseResult};
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;

/// Source for parsing operations
#[derive(Debug, Clone, PartialEq)]
pub enum JsonSource {
    /// Raw JSON string input
    String(String),
    /// Single JSON file path
    File(PathBuf),
    /// Standard input stream
    Stdin,
}

impl JsonSource {
    /// Parse JSON from this source. Nesting depth is not bounded here.
    pub fn parse(&self) -> ParseResult<serde_json::Value> {
        parse_from_string(&self.read()?)
    }

    /// Read the raw text of this source
    pub fn read(&self) -> ParseResult<String> {
        self.read_content().map_err(|e| {
            let what = match self {
                JsonSource::Stdin => "stdin",
                _ => "file",
            };
            ParseError::new(format!("Failed to read {}: {}", what, e), None)
        })
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            JsonSource::String(_) => "string input".to_string(),
            JsonSource::File(path) => format!("file: {}", path.display()),
            JsonSource::Stdin => "standard input".to_string(),
        }
    }

    /// Get the estimated size of the source in bytes (if known)
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            JsonSource::String(s) => Some(s.len() as u64),
            JsonSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            JsonSource::Stdin => None, // Unknown until read
        }
    }

    /// Read content as string
    pub fn read_content(&self) -> Result<String, std::io::Error> {
        match self {
            JsonSource::String(content) => Ok(content.clone()),
            JsonSource::File(path) => std::fs::read_to_string(path),
            JsonSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

/// Parse JSON from a string.
///
/// serde_json's recursion limit is lifted so that depth is governed by the
/// caller's own limit; check [`nesting_depth`] first on untrusted input.
pub fn parse_from_string(content: &str) -> ParseResult<serde_json::Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new("Empty JSON string".to_string(), None));
    }

    let mut deserializer = serde_json::Deserializer::from_str(trimmed);
    deserializer.disable_recursion_limit();
    serde_json::Value::deserialize(&mut deserializer)
        .and_then(|value| deserializer.end().map(|()| value))
        .map_err(|e| {
            let location = error_location(&e);
            let mut err = ParseError::new(format!("Invalid JSON: {}", e), location);
            if let Some(preview) = location.and_then(|loc| error_preview(trimmed, loc)) {
                err = err.with_preview(preview);
            }
            err
        })
}

/// Deepest container nesting in raw JSON text, without parsing it.
///
/// Brackets inside strings are skipped. Counts containers the same way
/// [`RewriteStats`](crate::conversion::RewriteStats) does: `{}` is 1, a bare
/// scalar is 0.
pub fn nesting_depth(content: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in content.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}

/// Line and column reported by serde_json; (0, 0) means unknown
fn error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    match (error.line(), error.column()) {
        (0, _) => None,
        (line, column) => Some((line, column)),
    }
}

/// The offending line with a caret under the reported column
fn error_preview(content: &str, (line, column): (usize, usize)) -> Option<String> {
    let error_line = content.lines().nth(line - 1)?;
    let caret = column.saturating_sub(1).min(error_line.chars().count());
    Some(format!("{}\n{}^", error_line, " ".repeat(caret)))
}
