//! Configuration options for rewriting JSON documents

use crate::rewrite::Direction;

/// Rewrite configuration options
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Target naming convention for mapping keys
    pub direction: Direction,
    /// Pretty-print output (vs compact)
    pub pretty: bool,
    /// Spaces per indentation level (0-8)
    pub indent_size: u8,
    /// JSON pointers of mappings whose own keys are left as-is
    pub preserve: Vec<String>,
    /// Maximum nesting depth, checked on the raw text before parsing.
    /// `None` lifts the limit entirely, parsing included.
    pub max_depth: Option<usize>,
    /// Maximum input size in bytes for file sources
    pub max_input_bytes: usize,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            direction: Direction::ToCamel,
            pretty: true,
            indent_size: 2,
            preserve: Vec::new(),
            max_depth: Some(1000), // Rewriting recurses once per level
            max_input_bytes: 100 * 1024 * 1024, // 100MB
        }
    }
}

impl RewriteConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Camelize keys, compact output; the shape an API response layer wants
    pub fn api_response() -> Self {
        Self {
            direction: Direction::ToCamel,
            pretty: false,
            ..Default::default()
        }
    }

    /// Underscore keys, compact output; for incoming request bodies
    pub fn api_request() -> Self {
        Self {
            direction: Direction::ToSnake,
            pretty: false,
            ..Default::default()
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set indentation size
    pub fn with_indent_size(mut self, size: u8) -> Result<Self, String> {
        if size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }
        self.indent_size = size;
        Ok(self)
    }

    /// Enable/disable pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Add a JSON pointer whose mapping keeps its keys
    pub fn with_preserved(mut self, pointer: impl Into<String>) -> Self {
        self.preserve.push(pointer.into());
        self
    }

    /// Set maximum nesting depth
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = limit;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }

        if self.max_input_bytes < 1024 {
            return Err("Input size limit must be at least 1KB".to_string());
        }

        if self.max_depth == Some(0) {
            return Err("Max depth must be at least 1".to_string());
        }

        if let Some(bad) = self
            .preserve
            .iter()
            .find(|p| !p.is_empty() && !p.starts_with('/'))
        {
            return Err(format!(
                "Invalid JSON pointer '{}': must be empty or start with '/'",
                bad
            ));
        }

        Ok(())
    }
}
