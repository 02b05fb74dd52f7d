use crate::conversion::engine::{RewriteEngine, RewriteOutput};
use crate::conversion::RewriteConfig;
use crate::error::KeyCaseResult;
use crate::parser::JsonSource;

/// Batch rewrite multiple JsonSource inputs. Optionally continue on errors.
pub fn rewrite_batch_sources(
    sources: Vec<JsonSource>,
    config: &RewriteConfig,
    continue_on_error: bool,
) -> KeyCaseResult<Vec<(JsonSource, RewriteOutput)>> {
    let engine = RewriteEngine::new(config.clone())?;
    let mut results = Vec::new();

    for src in sources {
        match engine.rewrite_source(&src) {
            Ok(output) => results.push((src, output)),
            Err(e) if continue_on_error => {
                tracing::error!(source = %src.description(), "{}", e.user_message());
            }
            Err(e) => return Err(e),
        }
    }

    Ok(results)
}
