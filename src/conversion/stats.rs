//! Shape statistics for rewrite operations

use crate::rewrite::Direction;
use crate::value::Value;
use serde::Serialize;
use std::collections::HashSet;

/// Counts gathered from one walk over a value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteStats {
    /// Mapping containers of any variant
    pub mappings: usize,
    /// Sequence containers of any variant
    pub sequences: usize,
    /// Mapping keys in the input
    pub keys: usize,
    /// Input keys whose rewritten form differs from the original
    pub renamed_keys: usize,
    /// Input keys whose rewritten form repeats an earlier key of the same
    /// mapping; the output has `keys - collided_keys` keys
    pub collided_keys: usize,
    /// Mappings whose own keys are exempt from renaming
    pub preserved_mappings: usize,
    /// Containers carrying a tag
    pub tagged_containers: usize,
    /// Containers on the deepest path; 0 for a scalar
    pub max_depth: usize,
}

impl RewriteStats {
    /// Walk `value` and count what a rewrite towards `direction` would touch
    pub fn collect(value: &Value, direction: Direction) -> Self {
        let mut stats = Self::default();
        stats.max_depth = stats.visit(value, direction, 1);
        stats
    }

    fn visit(&mut self, value: &Value, direction: Direction, depth: usize) -> usize {
        if value.tag().is_some() {
            self.tagged_containers += 1;
        }

        if let Some(entries) = value.as_entries() {
            self.mappings += 1;
            let preserved = value.is_keys_preserved();
            if preserved {
                self.preserved_mappings += 1;
            }

            let mut deepest = depth;
            let mut seen = HashSet::with_capacity(entries.len());
            for (key, child) in entries {
                self.keys += 1;
                let new_key = if preserved {
                    key.to_text_key()
                } else {
                    direction.convert_key(key)
                };
                if &new_key != key {
                    self.renamed_keys += 1;
                }
                if !seen.insert(new_key) {
                    self.collided_keys += 1;
                }
                deepest = deepest.max(self.visit(child, direction, depth + 1));
            }
            return deepest;
        }

        if let Some(items) = value.as_items() {
            self.sequences += 1;
            return items
                .iter()
                .map(|child| self.visit(child, direction, depth + 1))
                .fold(depth, usize::max);
        }

        depth - 1
    }

    /// Combine statistics from multiple documents
    pub fn combine(&mut self, other: &Self) {
        self.mappings += other.mappings;
        self.sequences += other.sequences;
        self.keys += other.keys;
        self.renamed_keys += other.renamed_keys;
        self.collided_keys += other.collided_keys;
        self.preserved_mappings += other.preserved_mappings;
        self.tagged_containers += other.tagged_containers;
        self.max_depth = self.max_depth.max(other.max_depth);
    }

    /// Keys left after colliding keys merge
    pub fn output_keys(&self) -> usize {
        self.keys - self.collided_keys
    }

    /// Human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} mappings, {} sequences, {} keys ({} renamed, {} collided, {} preserved mappings), depth {}",
            self.mappings,
            self.sequences,
            self.output_keys(),
            self.renamed_keys,
            self.collided_keys,
            self.preserved_mappings,
            self.max_depth
        )
    }
}
