use crate::conversion::config::RewriteConfig;
use crate::conversion::stats::RewriteStats;
use crate::error::{ConversionErrorKind, KeyCaseError, KeyCaseResult};
use crate::parser::{self, JsonSource};

/// Check the source size before attempting to read or parse the JSON.
/// This avoids loading very large files into memory if the user-configured
/// limit is smaller than the file.
pub fn check_source_size_before_read(
    source: &JsonSource,
    config: &RewriteConfig,
) -> KeyCaseResult<()> {
    if let Some(size) = source.estimated_size() {
        if size > config.max_input_bytes as u64 {
            return Err(KeyCaseError::conversion(ConversionErrorKind::InputTooLarge {
                size,
                limit: config.max_input_bytes,
            }));
        }
    }

    Ok(())
}

/// Reject values nested deeper than the configured limit.
pub fn check_depth(stats: &RewriteStats, config: &RewriteConfig) -> KeyCaseResult<()> {
    check_depth_value(stats.max_depth, config)
}

/// Reject raw JSON text nested deeper than the configured limit.
/// Runs before parsing, which no longer caps recursion itself.
pub fn check_text_depth(content: &str, config: &RewriteConfig) -> KeyCaseResult<()> {
    if config.max_depth.is_none() {
        return Ok(());
    }
    check_depth_value(parser::nesting_depth(content), config)
}

fn check_depth_value(depth: usize, config: &RewriteConfig) -> KeyCaseResult<()> {
    match config.max_depth {
        Some(limit) if depth > limit => Err(KeyCaseError::conversion(
            ConversionErrorKind::DepthExceeded { depth, limit },
        )),
        _ => Ok(()),
    }
}
