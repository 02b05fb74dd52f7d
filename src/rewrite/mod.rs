//! Recursive key rewriting
//!
//! [`rewrite`] copies every mapping and sequence in a value, renaming mapping
//! keys on the way. Scalars are cloned as-is. Preserved mappings keep their
//! own keys (integer keys still become strings), but their values are
//! rewritten like everything else. Tags and the preservation flag are copied
//! onto the new container; children do not inherit them.
//!
//! When two keys of one mapping convert to the same name, the later value
//! wins and the key keeps the position of the first.

use crate::value::{Entries, Key, Tagged, Value};
use std::fmt;

/// Which naming convention to rewrite keys into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// snake_case to lowerCamelCase
    #[default]
    ToCamel,
    /// camelCase to snake_case
    ToSnake,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::ToCamel => "camel",
            Direction::ToSnake => "snake",
        }
    }

    /// Rename a single key
    pub fn convert_key(&self, key: &Key) -> Key {
        match self {
            Direction::ToCamel => key.to_camel(false),
            Direction::ToSnake => key.to_snake(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rewrite every mapping key in `value` towards `direction`
pub fn rewrite(value: &Value, direction: Direction) -> Value {
    match value {
        Value::Map(entries) => Value::Map(rewrite_entries(entries, direction, false)),
        Value::Preserved(entries) => Value::Preserved(rewrite_entries(entries, direction, true)),
        Value::TaggedMap { map, preserve_keys } => Value::TaggedMap {
            map: Tagged::new(
                map.tag.clone(),
                rewrite_entries(&map.inner, direction, *preserve_keys),
            ),
            preserve_keys: *preserve_keys,
        },
        Value::List(items) => Value::List(rewrite_items(items, direction)),
        Value::Tuple(items) => Value::Tuple(items.iter().map(|v| rewrite(v, direction)).collect()),
        Value::TaggedList(list) => Value::TaggedList(Tagged::new(
            list.tag.clone(),
            rewrite_items(&list.inner, direction),
        )),
        scalar => scalar.clone(),
    }
}

/// Rewrite keys to lowerCamelCase
pub fn to_camel_case(value: &Value) -> Value {
    rewrite(value, Direction::ToCamel)
}

/// Rewrite keys to snake_case
pub fn to_snake_case(value: &Value) -> Value {
    rewrite(value, Direction::ToSnake)
}

fn rewrite_entries(entries: &Entries, direction: Direction, preserve_keys: bool) -> Entries {
    let mut rewritten = Entries::with_capacity(entries.len());
    for (key, value) in entries {
        let new_key = if preserve_keys {
            key.to_text_key()
        } else {
            direction.convert_key(key)
        };
        if let Some(_replaced) = rewritten.insert(new_key, rewrite(value, direction)) {
            tracing::warn!(key = %key, %direction, "rewritten key collides with an earlier key; keeping the later value");
        }
    }
    rewritten
}

fn rewrite_items(items: &[Value], direction: Direction) -> Vec<Value> {
    items.iter().map(|v| rewrite(v, direction)).collect()
}
