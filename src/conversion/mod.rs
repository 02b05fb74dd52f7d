//! JSON document rewriting
//!
//! Wraps the core rewriter with parsing, configured preservation pointers,
//! a depth limit, output formatting and statistics.

pub mod batch;
pub mod config;
pub mod engine;
pub mod limits;
pub mod stats;

pub use config::RewriteConfig;
pub use engine::{
    rewrite_json_string, rewrite_json_value, rewrite_stream, RewriteEngine, RewriteOutput,
};
pub use stats::RewriteStats;
