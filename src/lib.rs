//! Key-case rewriting for nested data
//!
//! Rewrites the keys of nested mappings between snake_case and lowerCamelCase
//! so an API boundary can speak camelCase while internal data stays
//! snake_case. Individual mappings can be marked so their own keys survive
//! the rewrite while everything nested inside them is still processed.
//!
//! ```
//! use keycase::{mark_keys_preserved, to_camel_case, to_snake_case, Value};
//! use serde_json::json;
//!
//! let mut data = Value::from(json!({"user_id": 7, "labels": {"env_name": "prod"}}));
//! keycase::mark_pointer_preserved(&mut data, "/labels").unwrap();
//!
//! let camel = to_camel_case(&data);
//! assert_eq!(
//!     camel.to_json().unwrap(),
//!     json!({"userId": 7, "labels": {"env_name": "prod"}})
//! );
//! assert_eq!(to_snake_case(&camel), data);
//!
//! assert!(mark_keys_preserved(Value::from(json!([1, 2]))).is_err());
//! ```

pub mod casing;
pub mod cli;
pub mod conversion;
pub mod error;
pub mod parser;
pub mod preserve;
pub mod rewrite;
pub mod value;

// Re-export commonly used types
pub use conversion::{RewriteConfig, RewriteEngine, RewriteOutput, RewriteStats};
pub use error::{ConversionErrorKind, KeyCaseError, KeyCaseResult, ParseError};
pub use parser::JsonSource;
pub use preserve::{mark_keys_preserved, mark_pointer_preserved};
pub use rewrite::{rewrite, to_camel_case, to_snake_case, Direction};
pub use value::{Entries, Key, Opaque, Tag, Tagged, Value};

/// Rewrite a JSON document to camelCase keys with default formatting
pub fn camelize_json(json: &serde_json::Value) -> KeyCaseResult<String> {
    let config = RewriteConfig::default().with_direction(Direction::ToCamel);
    Ok(conversion::rewrite_json_value(json, &config)?.content)
}

/// Rewrite a JSON document to snake_case keys with default formatting
pub fn underscorize_json(json: &serde_json::Value) -> KeyCaseResult<String> {
    let config = RewriteConfig::default().with_direction(Direction::ToSnake);
    Ok(conversion::rewrite_json_value(json, &config)?.content)
}
