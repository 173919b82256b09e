//! Literal values used as defaults for constants, properties and arguments.

use indexmap::IndexMap;

/// Key of an array literal entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayKey {
    Index(i64),
    Name(String),
}

impl From<i64> for ArrayKey {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for ArrayKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ArrayKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// A scalar or array value that can be written as a source literal.
///
/// Arrays are ordered maps so both lists and keyed arrays keep their
/// declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(IndexMap<ArrayKey, Literal>),
}

impl Literal {
    /// An array without entries.
    pub fn empty_array() -> Self {
        Self::Array(IndexMap::new())
    }

    /// A list with sequential keys starting at 0.
    pub fn list<T: Into<Literal>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (ArrayKey::Index(index as i64), item.into()))
                .collect(),
        )
    }

    /// A keyed array in the given order.
    pub fn map<K: Into<ArrayKey>, V: Into<Literal>>(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self::Array(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Check if this is an array without entries.
    pub fn is_empty_array(&self) -> bool {
        matches!(self, Self::Array(entries) if entries.is_empty())
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for Literal {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::list(items),
            Value::Object(entries) => Self::map(entries),
        }
    }
}
