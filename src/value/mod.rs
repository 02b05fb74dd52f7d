//! Container model walked by the rewriter
//!
//! Values are a closed set of shapes: scalars, three mapping variants (plain,
//! preserved, tagged) and three sequence variants (list, tuple, tagged list).
//! Tagged containers carry an opaque [`Tag`] that is copied by reference and
//! never inspected.

pub mod json;
pub mod pointer;

use crate::casing;
use indexmap::IndexMap;
use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Ordered key/value storage shared by every mapping variant
pub type Entries = IndexMap<Key, Value>;

/// A mapping key: a string or an integer
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Str(String),
    Int(i64),
}

impl Key {
    /// Decimal text of an integer key, or the string itself
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Key::Str(s) => Cow::Borrowed(s),
            Key::Int(i) => Cow::Owned(i.to_string()),
        }
    }

    /// The same key with integers coerced to their string form
    pub fn to_text_key(&self) -> Key {
        match self {
            Key::Str(_) => self.clone(),
            Key::Int(i) => Key::Str(i.to_string()),
        }
    }

    pub fn to_camel(&self, capitalize_first: bool) -> Key {
        Key::Str(casing::to_camel(&self.as_text(), capitalize_first))
    }

    pub fn to_snake(&self) -> Key {
        Key::Str(casing::to_snake(&self.as_text()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) => f.write_str(s),
            Key::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

/// Reference-counted handle to a value the rewriter never looks into.
///
/// Equality is identity: two handles are equal only when they point at the
/// same allocation.
#[derive(Clone)]
pub struct Opaque(Arc<dyn Any + Send + Sync>);

/// Opaque value attached to a tagged container
pub type Tag = Opaque;

impl Opaque {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn from_arc(inner: Arc<dyn Any + Send + Sync>) -> Self {
        Self(inner)
    }

    /// True when both handles refer to the same allocation
    pub fn same_as(&self, other: &Opaque) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque({:p})", Arc::as_ptr(&self.0) as *const ())
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

/// A container payload paired with its tag
#[derive(Debug, Clone)]
pub struct Tagged<T> {
    pub tag: Tag,
    pub inner: T,
}

impl<T> Tagged<T> {
    pub fn new(tag: Tag, inner: T) -> Self {
        Self { tag, inner }
    }
}

/// A value the rewriter can walk
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    /// Unsigned integer above `i64::MAX`
    UInt(u64),
    Float(f64),
    Str(String),
    Opaque(Opaque),
    /// Plain mapping; keys are renamed
    Map(Entries),
    /// Mapping whose own keys are never renamed
    Preserved(Entries),
    /// Mapping with a tag; `preserve_keys` is the attached preservation mark
    TaggedMap {
        map: Tagged<Entries>,
        preserve_keys: bool,
    },
    /// Growable ordered sequence
    List(Vec<Value>),
    /// Fixed-length sequence
    Tuple(Box<[Value]>),
    /// Ordered sequence with a tag
    TaggedList(Tagged<Vec<Value>>),
}

impl Value {
    /// Build a plain mapping from key/value pairs
    pub fn map<K, I>(entries: I) -> Value
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn tuple<I: IntoIterator<Item = Value>>(items: I) -> Value {
        Value::Tuple(items.into_iter().collect())
    }

    pub fn tagged_map(tag: Tag, entries: Entries) -> Value {
        Value::TaggedMap {
            map: Tagged::new(tag, entries),
            preserve_keys: false,
        }
    }

    pub fn tagged_list(tag: Tag, items: Vec<Value>) -> Value {
        Value::TaggedList(Tagged::new(tag, items))
    }

    /// Short description of the value's shape, for messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) | Value::UInt(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Opaque(_) => "opaque value",
            Value::Map(_) => "mapping",
            Value::Preserved(_) => "preserved mapping",
            Value::TaggedMap { .. } => "tagged mapping",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::TaggedList(_) => "tagged list",
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(
            self,
            Value::Map(_) | Value::Preserved(_) | Value::TaggedMap { .. }
        )
    }

    pub fn is_sequence(&self) -> bool {
        matches!(
            self,
            Value::List(_) | Value::Tuple(_) | Value::TaggedList(_)
        )
    }

    pub fn is_scalar(&self) -> bool {
        !self.is_mapping() && !self.is_sequence()
    }

    /// Whether this mapping's own keys are exempt from renaming
    pub fn is_keys_preserved(&self) -> bool {
        match self {
            Value::Preserved(_) => true,
            Value::TaggedMap { preserve_keys, .. } => *preserve_keys,
            _ => false,
        }
    }

    /// Entries of any mapping variant
    pub fn as_entries(&self) -> Option<&Entries> {
        match self {
            Value::Map(entries) | Value::Preserved(entries) => Some(entries),
            Value::TaggedMap { map, .. } => Some(&map.inner),
            _ => None,
        }
    }

    pub fn as_entries_mut(&mut self) -> Option<&mut Entries> {
        match self {
            Value::Map(entries) | Value::Preserved(entries) => Some(entries),
            Value::TaggedMap { map, .. } => Some(&mut map.inner),
            _ => None,
        }
    }

    /// Elements of any sequence variant
    pub fn as_items(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            Value::Tuple(items) => Some(items),
            Value::TaggedList(list) => Some(&list.inner),
            _ => None,
        }
    }

    pub fn as_items_mut(&mut self) -> Option<&mut [Value]> {
        match self {
            Value::List(items) => Some(items),
            Value::Tuple(items) => Some(items),
            Value::TaggedList(list) => Some(&mut list.inner),
            _ => None,
        }
    }

    /// Tag of a tagged container
    pub fn tag(&self) -> Option<&Tag> {
        match self {
            Value::TaggedMap { map, .. } => Some(&map.tag),
            Value::TaggedList(list) => Some(&list.tag),
            _ => None,
        }
    }

    /// Look up a string key in a mapping
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_entries()?.get(&Key::from(key))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Structural equality.
///
/// Mapping variants compare equal to each other when their entries match,
/// ignoring order. Lists and tagged lists compare as lists; tuples only equal
/// tuples. Tags take no part in the comparison, opaque scalars compare by
/// identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Int(i), Value::UInt(u)) | (Value::UInt(u), Value::Int(i)) => {
                u64::try_from(*i).is_ok_and(|i| i == *u)
            }
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Opaque(a), Value::Opaque(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Tuple(_), _) | (_, Value::Tuple(_)) => false,
            (a, b) if a.is_mapping() && b.is_mapping() => a.as_entries() == b.as_entries(),
            (a, b) if a.is_sequence() && b.is_sequence() => a.as_items() == b.as_items(),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        match i64::try_from(u) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::UInt(u),
        }
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Opaque> for Value {
    fn from(opaque: Opaque) -> Self {
        Value::Opaque(opaque)
    }
}
