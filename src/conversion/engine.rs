//! Document pipeline: parse, mark preserved mappings, rewrite, serialize

use crate::conversion::config::RewriteConfig;
use crate::conversion::limits;
use crate::conversion::stats::RewriteStats;
use crate::error::{ConversionErrorKind, KeyCaseError, KeyCaseResult};
use crate::parser::{self, JsonSource};
use crate::preserve::mark_pointer_preserved;
use crate::rewrite::rewrite;
use crate::value::Value;
use serde::Serialize;
use std::time::Instant;

/// Result of rewriting one JSON document
#[derive(Debug, Clone)]
pub struct RewriteOutput {
    /// Rewritten value
    pub value: Value,
    /// Rewritten value serialized per the configuration
    pub content: String,
    pub stats: RewriteStats,
    pub processing_time_ms: u64,
}

impl RewriteOutput {
    /// Get the serialized output
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the output is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Rewrites documents according to a validated [`RewriteConfig`]
#[derive(Debug, Clone)]
pub struct RewriteEngine {
    config: RewriteConfig,
}

impl RewriteEngine {
    /// Create a new engine, rejecting inconsistent configuration
    pub fn new(config: RewriteConfig) -> KeyCaseResult<Self> {
        config
            .validate()
            .map_err(|message| KeyCaseError::conversion(ConversionErrorKind::configuration(message)))?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RewriteConfig {
        &self.config
    }

    /// Apply the configured preservation marks and depth limit, then rewrite.
    ///
    /// Nothing is serialized, so values holding opaque scalars are fine here.
    pub fn rewrite_value(&self, mut value: Value) -> KeyCaseResult<(Value, RewriteStats)> {
        for pointer in &self.config.preserve {
            mark_pointer_preserved(&mut value, pointer)?;
        }

        let stats = RewriteStats::collect(&value, self.config.direction);
        limits::check_depth(&stats, &self.config)?;

        let rewritten = rewrite(&value, self.config.direction);
        Ok((rewritten, stats))
    }

    /// Rewrite a parsed JSON document
    pub fn rewrite_json(&self, json: &serde_json::Value) -> KeyCaseResult<RewriteOutput> {
        let start_time = Instant::now();

        let (value, stats) = self.rewrite_value(Value::from(json))?;
        let content = self.render(&value)?;
        let processing_time_ms = start_time.elapsed().as_millis() as u64;

        tracing::debug!(
            direction = %self.config.direction,
            mappings = stats.mappings,
            keys = stats.keys,
            renamed = stats.renamed_keys,
            depth = stats.max_depth,
            elapsed_ms = processing_time_ms,
            "rewrote document"
        );

        Ok(RewriteOutput {
            value,
            content,
            stats,
            processing_time_ms,
        })
    }

    /// Rewrite JSON read from a source
    pub fn rewrite_source(&self, source: &JsonSource) -> KeyCaseResult<RewriteOutput> {
        // Check source size before reading to avoid loading very large files
        limits::check_source_size_before_read(source, &self.config)?;

        tracing::debug!(source = %source.description(), "reading JSON");
        let content = source.read()?;
        limits::check_text_depth(&content, &self.config)?;
        let json = parser::parse_from_string(&content)?;
        self.rewrite_json(&json)
    }

    /// Rewrite a JSON string
    pub fn rewrite_string(&self, json_str: &str) -> KeyCaseResult<RewriteOutput> {
        let source = JsonSource::String(json_str.to_string());
        self.rewrite_source(&source)
    }

    /// Serialize a value using the configured layout
    pub fn render(&self, value: &Value) -> KeyCaseResult<String> {
        if !self.config.pretty {
            return Ok(serde_json::to_string(value)?);
        }

        let indent = vec![b' '; self.config.indent_size as usize];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        value.serialize(&mut serializer)?;

        String::from_utf8(buffer).map_err(|e| KeyCaseError::Other(e.into()))
    }
}

/// Rewrite a parsed JSON document with the given configuration
pub fn rewrite_json_value(
    json: &serde_json::Value,
    config: &RewriteConfig,
) -> KeyCaseResult<RewriteOutput> {
    RewriteEngine::new(config.clone())?.rewrite_json(json)
}

/// Rewrite a JSON string with the given configuration
pub fn rewrite_json_string(json_str: &str, config: &RewriteConfig) -> KeyCaseResult<RewriteOutput> {
    RewriteEngine::new(config.clone())?.rewrite_string(json_str)
}

/// Rewrite JSON read from any reader
pub fn rewrite_stream<R: std::io::Read>(
    reader: R,
    config: &RewriteConfig,
) -> KeyCaseResult<RewriteOutput> {
    let content = std::io::read_to_string(reader).map_err(|e| {
        KeyCaseError::conversion(ConversionErrorKind::io(
            format!("Failed to read stream: {}", e),
            None,
        ))
    })?;

    rewrite_json_string(&content, config)
}
