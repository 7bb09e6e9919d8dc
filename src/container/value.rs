//! A dynamic value for heterogeneous nested data.

use std::collections::{BTreeMap, BTreeSet};

use super::Container;
use crate::error::{OpticsError, Result};

/// A dynamically shaped value: scalars, sequences, tuples, maps and sets.
///
/// Maps and sets are ordered, so iterating them is deterministic.
///
/// # Example
///
/// ```
/// use lenskit::{Value, atom};
///
/// let user = Value::map([
///     (atom("name"), Value::from("Alice")),
///     (atom("tags"), Value::list([atom("admin"), atom("ops")])),
/// ]);
/// assert_eq!(user.kind(), "map");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// The absence marker.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A symbolic constant, typically used as a map key.
    Atom(String),
    /// A string.
    Str(String),
    /// An ordered, growable sequence.
    List(Vec<Value>),
    /// A fixed-arity tuple. Indexed, but not enumerable.
    Tuple(Vec<Value>),
    /// An ordered map.
    Map(BTreeMap<Value, Value>),
    /// An ordered set. Enumerable, but neither keyed nor indexed.
    Set(BTreeSet<Value>),
}

/// Shorthand for [`Value::Atom`].
pub fn atom(name: impl Into<String>) -> Value {
    Value::Atom(name.into())
}

impl Value {
    /// Creates a [`Value::Atom`].
    pub fn atom(name: impl Into<String>) -> Self {
        Self::Atom(name.into())
    }

    /// Creates a [`Value::List`] from any iterator of convertible values.
    pub fn list<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::List(elements.into_iter().map(Into::into).collect())
    }

    /// Creates a [`Value::Tuple`] from any iterator of convertible values.
    pub fn tuple<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Tuple(elements.into_iter().map(Into::into).collect())
    }

    /// Creates a [`Value::Map`] from key/value pairs.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Self>,
        V: Into<Self>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Creates a [`Value::Set`] from any iterator of convertible values.
    pub fn set<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Set(elements.into_iter().map(Into::into).collect())
    }

    /// Returns the name of this value's shape, as used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Atom(_) => "atom",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Map(_) => "map",
            Self::Set(_) => "set",
        }
    }

    /// Returns `true` for [`Value::Nil`].
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the integer payload, if any.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::List(elements)
    }
}

impl Container for Value {
    type Key = Self;

    fn absent() -> Self {
        Self::Nil
    }

    // Reading through nil yields nothing, mirroring nested lookups on
    // missing branches. Writing into nil is still a mismatch.
    fn fetch_by_key(&self, key: &Self) -> Result<Option<Self>> {
        match self {
            Self::Map(entries) => Ok(entries.get(key).cloned()),
            Self::Nil => Ok(None),
            other => Err(OpticsError::mismatch("fetch_by_key", "map", other.kind())),
        }
    }

    fn put_by_key(self, key: &Self, value: Self) -> Result<Self> {
        match self {
            Self::Map(mut entries) => {
                entries.insert(key.clone(), value);
                Ok(Self::Map(entries))
            }
            other => Err(OpticsError::mismatch("put_by_key", "map", other.kind())),
        }
    }

    fn fetch_by_index(&self, index: usize) -> Result<Self> {
        match self {
            Self::List(elements) | Self::Tuple(elements) => {
                elements
                    .get(index)
                    .cloned()
                    .ok_or(OpticsError::IndexOutOfRange {
                        index,
                        length: elements.len(),
                    })
            }
            other => Err(OpticsError::mismatch(
                "fetch_by_index",
                "list or tuple",
                other.kind(),
            )),
        }
    }

    fn put_by_index(self, index: usize, value: Self) -> Result<Self> {
        let (mut elements, rewrap): (Vec<Self>, fn(Vec<Self>) -> Self) = match self {
            Self::List(elements) => (elements, Self::List),
            Self::Tuple(elements) => (elements, Self::Tuple),
            other => {
                return Err(OpticsError::mismatch(
                    "put_by_index",
                    "list or tuple",
                    other.kind(),
                ));
            }
        };
        let length = elements.len();
        let slot = elements
            .get_mut(index)
            .ok_or(OpticsError::IndexOutOfRange { index, length })?;
        *slot = value;
        Ok(rewrap(elements))
    }

    fn iterate(self) -> Result<Vec<Self>> {
        match self {
            Self::List(elements) => Ok(elements),
            Self::Map(entries) => Ok(entries
                .into_iter()
                .map(|(key, value)| Self::pair(key, value))
                .collect()),
            Self::Set(elements) => Ok(elements.into_iter().collect()),
            other => Err(OpticsError::mismatch("iterate", "enumerable", other.kind())),
        }
    }

    fn rebuild(elements: Vec<Self>) -> Self {
        Self::List(elements)
    }

    fn pair(first: Self, second: Self) -> Self {
        Self::Tuple(vec![first, second])
    }

    fn empty_map() -> Self {
        Self::Map(BTreeMap::new())
    }

    fn collect_into(self, target: Self) -> Result<Self> {
        let elements = self.iterate()?;
        match target {
            Self::List(mut collected) => {
                collected.extend(elements);
                Ok(Self::List(collected))
            }
            Self::Set(mut collected) => {
                collected.extend(elements);
                Ok(Self::Set(collected))
            }
            Self::Map(mut collected) => {
                for element in elements {
                    match element {
                        Self::Tuple(entry) if entry.len() == 2 => {
                            let mut entry = entry.into_iter();
                            if let (Some(key), Some(value)) = (entry.next(), entry.next()) {
                                collected.insert(key, value);
                            }
                        }
                        other => {
                            return Err(OpticsError::mismatch(
                                "collect_into",
                                "two-element tuple",
                                other.kind(),
                            ));
                        }
                    }
                }
                Ok(Self::Map(collected))
            }
            other => Err(OpticsError::mismatch(
                "collect_into",
                "collectable",
                other.kind(),
            )),
        }
    }

    fn length(&self) -> Result<usize> {
        match self {
            Self::List(elements) => Ok(elements.len()),
            Self::Map(entries) => Ok(entries.len()),
            Self::Set(elements) => Ok(elements.len()),
            other => Err(OpticsError::mismatch("length", "enumerable", other.kind())),
        }
    }
}
