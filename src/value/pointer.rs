//! JSON pointer (RFC 6901) lookup into a [`Value`]
//!
//! A reference token is matched against string keys first and then, if it
//! is a decimal integer, against integer keys. Sequence elements are
//! addressed by index.

use super::{Entries, Key, Value};

impl Value {
    /// Look up a value by JSON pointer. `""` refers to the whole value.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        let mut target = self;
        for token in parse_tokens(pointer)? {
            target = match target {
                Value::Map(_) | Value::Preserved(_) | Value::TaggedMap { .. } => {
                    lookup(target.as_entries()?, &token)?
                }
                Value::List(_) | Value::Tuple(_) | Value::TaggedList(_) => {
                    target.as_items()?.get(parse_index(&token)?)?
                }
                _ => return None,
            };
        }
        Some(target)
    }

    /// Mutable variant of [`Value::pointer`]
    pub fn pointer_mut(&mut self, pointer: &str) -> Option<&mut Value> {
        let mut target = self;
        for token in parse_tokens(pointer)? {
            target = if target.is_mapping() {
                lookup_mut(target.as_entries_mut()?, &token)?
            } else {
                target.as_items_mut()?.get_mut(parse_index(&token)?)?
            };
        }
        Some(target)
    }
}

fn parse_tokens(pointer: &str) -> Option<Vec<String>> {
    if pointer.is_empty() {
        return Some(Vec::new());
    }
    if !pointer.starts_with('/') {
        return None;
    }
    Some(
        pointer
            .split('/')
            .skip(1)
            .map(|t| t.replace("~1", "/").replace("~0", "~"))
            .collect(),
    )
}

fn parse_index(token: &str) -> Option<usize> {
    if token.starts_with('+') || (token.len() > 1 && token.starts_with('0')) {
        return None;
    }
    token.parse().ok()
}

fn integer_key(token: &str) -> Option<Key> {
    token.parse::<i64>().ok().map(Key::Int)
}

fn lookup<'a>(entries: &'a Entries, token: &str) -> Option<&'a Value> {
    entries
        .get(&Key::from(token))
        .or_else(|| entries.get(&integer_key(token)?))
}

fn lookup_mut<'a>(entries: &'a mut Entries, token: &str) -> Option<&'a mut Value> {
    let key = Key::from(token);
    if entries.contains_key(&key) {
        return entries.get_mut(&key);
    }
    entries.get_mut(&integer_key(token)?)
}
