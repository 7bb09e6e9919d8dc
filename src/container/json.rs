//! [`Container`] adapter for `serde_json::Value`.
//!
//! Objects are keyed by `String`, arrays are indexed and enumerable, and
//! `null` is the absence marker. JSON has no tuples, so map entries and
//! context foci are two-element arrays.

use serde_json::{Map, Value as Json};

use super::Container;
use crate::error::{OpticsError, Result};

const fn kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

impl Container for Json {
    type Key = String;

    fn absent() -> Self {
        Self::Null
    }

    fn fetch_by_key(&self, key: &String) -> Result<Option<Self>> {
        match self {
            Self::Object(entries) => Ok(entries.get(key).cloned()),
            Self::Null => Ok(None),
            other => Err(OpticsError::mismatch("fetch_by_key", "object", kind(other))),
        }
    }

    fn put_by_key(self, key: &String, value: Self) -> Result<Self> {
        match self {
            Self::Object(mut entries) => {
                entries.insert(key.clone(), value);
                Ok(Self::Object(entries))
            }
            other => Err(OpticsError::mismatch("put_by_key", "object", kind(&other))),
        }
    }

    fn fetch_by_index(&self, index: usize) -> Result<Self> {
        match self {
            Self::Array(elements) => {
                elements
                    .get(index)
                    .cloned()
                    .ok_or(OpticsError::IndexOutOfRange {
                        index,
                        length: elements.len(),
                    })
            }
            other => Err(OpticsError::mismatch("fetch_by_index", "array", kind(other))),
        }
    }

    fn put_by_index(self, index: usize, value: Self) -> Result<Self> {
        match self {
            Self::Array(mut elements) => {
                let length = elements.len();
                let slot = elements
                    .get_mut(index)
                    .ok_or(OpticsError::IndexOutOfRange { index, length })?;
                *slot = value;
                Ok(Self::Array(elements))
            }
            other => Err(OpticsError::mismatch("put_by_index", "array", kind(&other))),
        }
    }

    fn iterate(self) -> Result<Vec<Self>> {
        match self {
            Self::Array(elements) => Ok(elements),
            Self::Object(entries) => Ok(entries
                .into_iter()
                .map(|(key, value)| Self::pair(Self::String(key), value))
                .collect()),
            other => Err(OpticsError::mismatch("iterate", "array or object", kind(&other))),
        }
    }

    fn rebuild(elements: Vec<Self>) -> Self {
        Self::Array(elements)
    }

    fn pair(first: Self, second: Self) -> Self {
        Self::Array(vec![first, second])
    }

    fn empty_map() -> Self {
        Self::Object(Map::new())
    }

    fn collect_into(self, target: Self) -> Result<Self> {
        let elements = self.iterate()?;
        match target {
            Self::Array(mut collected) => {
                collected.extend(elements);
                Ok(Self::Array(collected))
            }
            Self::Object(mut collected) => {
                for element in elements {
                    let entry = match element {
                        Self::Array(entry) if entry.len() == 2 => entry,
                        other => {
                            return Err(OpticsError::mismatch(
                                "collect_into",
                                "[key, value] array",
                                kind(&other),
                            ));
                        }
                    };
                    let mut entry = entry.into_iter();
                    match (entry.next(), entry.next()) {
                        (Some(Self::String(key)), Some(value)) => {
                            collected.insert(key, value);
                        }
                        (Some(other), _) => {
                            return Err(OpticsError::mismatch(
                                "collect_into",
                                "string key",
                                kind(&other),
                            ));
                        }
                        _ => {}
                    }
                }
                Ok(Self::Object(collected))
            }
            other => Err(OpticsError::mismatch(
                "collect_into",
                "array or object",
                kind(&other),
            )),
        }
    }

    fn length(&self) -> Result<usize> {
        match self {
            Self::Array(elements) => Ok(elements.len()),
            Self::Object(entries) => Ok(entries.len()),
            other => Err(OpticsError::mismatch("length", "array or object", kind(other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fetch_and_put_by_key() {
        let data = json!({"name": "Alice"});
        assert_eq!(
            data.fetch_by_key(&"name".to_string()),
            Ok(Some(json!("Alice")))
        );
        let updated = data.put_by_key(&"age".to_string(), json!(30)).unwrap();
        assert_eq!(updated, json!({"name": "Alice", "age": 30}));
    }

    #[test]
    fn test_key_on_array_is_mismatch() {
        let result = json!([1, 2]).fetch_by_key(&"a".to_string());
        assert_eq!(
            result,
            Err(OpticsError::mismatch("fetch_by_key", "object", "array"))
        );
    }

    #[test]
    fn test_iterate_object_yields_pairs() {
        let data = json!({"a": 1});
        assert_eq!(data.iterate(), Ok(vec![json!(["a", 1])]));
    }

    #[test]
    fn test_collect_pairs_into_object() {
        let pairs = json!([["a", 1], ["b", 2]]);
        assert_eq!(
            pairs.collect_into(Json::empty_map()),
            Ok(json!({"a": 1, "b": 2}))
        );
    }

    #[test]
    fn test_collect_rejects_non_string_key() {
        let pairs = json!([[1, 2]]);
        assert_eq!(
            pairs.collect_into(Json::empty_map()),
            Err(OpticsError::mismatch("collect_into", "string key", "number"))
        );
    }
}
