//! Marking mappings whose own keys must survive a rewrite
//!
//! There are two marks. A plain mapping becomes the [`Value::Preserved`]
//! variant; a tagged mapping keeps its shape and gets its `preserve_keys`
//! flag set. The rewriter honours both the same way, and neither reaches
//! into nested containers.

use crate::error::{ConversionErrorKind, KeyCaseError, KeyCaseResult};
use crate::value::Value;

/// Mark a mapping so the rewriter leaves its own keys alone.
///
/// Marking an already preserved mapping returns it unchanged. Anything that
/// is not a mapping is rejected.
pub fn mark_keys_preserved(value: Value) -> KeyCaseResult<Value> {
    match value {
        Value::Map(entries) => Ok(Value::Preserved(entries)),
        Value::Preserved(_) => Ok(value),
        Value::TaggedMap { map, .. } => Ok(Value::TaggedMap {
            map,
            preserve_keys: true,
        }),
        other => Err(not_a_mapping(&other)),
    }
}

/// Mark the mapping found at `pointer` inside `root`, in place.
pub fn mark_pointer_preserved(root: &mut Value, pointer: &str) -> KeyCaseResult<()> {
    let slot = root.pointer_mut(pointer).ok_or_else(|| {
        KeyCaseError::conversion(ConversionErrorKind::pointer_not_found(pointer))
    })?;

    if !slot.is_mapping() {
        return Err(not_a_mapping(slot));
    }

    let marked = mark_keys_preserved(std::mem::take(slot))?;
    *slot = marked;
    tracing::debug!(pointer, "marked mapping keys as preserved");
    Ok(())
}

fn not_a_mapping(value: &Value) -> KeyCaseError {
    KeyCaseError::conversion(ConversionErrorKind::not_a_mapping(value.kind_name()))
}
