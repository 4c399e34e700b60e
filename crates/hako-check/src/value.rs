//! Tagged runtime values and their closed category set.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::check::Index;

/// Closed enumeration of the semantic categories a [`Value`] can belong to.
///
/// Constraints are expressed as membership in a set of categories, so the
/// whole universe of "types" a check can mention is this enum. `Custom`
/// carries an application-chosen tag for values outside the built-in set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    Int,
    Float,
    Str,
    Bytes,
    Bool,
    Seq,
    Map,
    Null,
    Custom(String),
}

impl Category {
    /// Canonical short name, used verbatim in error messages.
    pub fn name(&self) -> &str {
        match self {
            Category::Int => "int",
            Category::Float => "float",
            Category::Str => "str",
            Category::Bytes => "bytes",
            Category::Bool => "bool",
            Category::Seq => "seq",
            Category::Map => "map",
            Category::Null => "null",
            Category::Custom(tag) => tag,
        }
    }

    /// Custom category from an application tag.
    pub fn custom(tag: impl Into<String>) -> Self { Category::Custom(tag.into()) }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// A runtime value tagged with its category.
///
/// One variant per [`Category`]. `Tagged` wraps an inner value under a
/// custom tag; its category is `Category::Custom` with that tag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Bool(bool),
    Seq(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Null,
    Tagged(String, Box<Value>),
}

impl Value {
    /// The category this value belongs to.
    pub fn category(&self) -> Category {
        match self {
            Value::Int(_) => Category::Int,
            Value::Float(_) => Category::Float,
            Value::Str(_) => Category::Str,
            Value::Bytes(_) => Category::Bytes,
            Value::Bool(_) => Category::Bool,
            Value::Seq(_) => Category::Seq,
            Value::Map(_) => Category::Map,
            Value::Null => Category::Null,
            Value::Tagged(tag, _) => Category::Custom(tag.clone()),
        }
    }

    /// True for `Int` only. A `Bool` is not an int.
    pub fn is_int(&self) -> bool { matches!(self, Value::Int(_)) }

    pub fn is_float(&self) -> bool { matches!(self, Value::Float(_)) }

    pub fn is_str(&self) -> bool { matches!(self, Value::Str(_)) }

    pub fn is_bool(&self) -> bool { matches!(self, Value::Bool(_)) }

    pub fn is_null(&self) -> bool { matches!(self, Value::Null) }

    /// Element count for sized values: chars of a `Str`, bytes of a
    /// `Bytes`, elements of a `Seq`, entries of a `Map`. `None` otherwise.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::Bytes(b) => Some(b.len()),
            Value::Seq(items) => Some(items.len()),
            Value::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// True when [`Value::len`] reports zero.
    pub fn is_empty(&self) -> bool { self.len() == Some(0) }

    /// Iterate the elements of an iterable value: the items of a `Seq` or
    /// the values of a `Map`. `None` for everything else.
    pub fn elements(&self) -> Option<Box<dyn Iterator<Item = &Value> + '_>> {
        match self {
            Value::Seq(items) => Some(Box::new(items.iter())),
            Value::Map(entries) => Some(Box::new(entries.values())),
            _ => None,
        }
    }

    /// One level of nested access: a position into a `Seq` or a key into a
    /// `Map`. Any other combination resolves to `None`.
    pub fn get(&self, index: &Index) -> Option<&Value> {
        match (self, index) {
            (Value::Seq(items), Index::Pos(i)) => items.get(*i),
            (Value::Map(entries), Index::Key(k)) => entries.get(k.as_str()),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self { Value::Int(v) }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self { Value::Float(v) }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self { Value::Bool(v) }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self { Value::Str(v.to_string()) }
}

impl From<String> for Value {
    fn from(v: String) -> Self { Value::Str(v) }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self { Value::Bytes(v) }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self { Value::Seq(v) }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self { Value::Map(v) }
}
