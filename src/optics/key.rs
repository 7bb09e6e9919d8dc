//! Keyed access with a choice of existence policy.
//!
//! The three constructors share read and write mechanics and differ only in
//! what happens when the key is absent:
//!
//! | Constructor | Absent key |
//! |---|---|
//! | [`key`] | visits the absence marker; the write inserts the key |
//! | [`key_required`] | fails with [`OpticsError::MissingKey`] |
//! | [`key_optional`] | no focus; the data is unchanged |
//!
//! A key that is present but holds the absence marker is still present.
//!
//! # Examples
//!
//! ```
//! use lenskit::optics::{Traversal, key, key_optional, key_required};
//! use lenskit::{Container, OpticsError, Value, atom};
//!
//! let empty = Value::empty_map();
//!
//! assert_eq!(key(atom("x")).to_list(empty.clone()), Ok(vec![Value::Nil]));
//! assert_eq!(key_optional(atom("x")).to_list(empty.clone()), Ok(vec![]));
//! assert!(matches!(
//!     key_required(atom("x")).to_list(empty),
//!     Err(OpticsError::MissingKey { .. })
//! ));
//! ```

use std::fmt;

use super::compose::multiple;
use super::traversal::{Lens, Traversal, Visit, Visitor};
use crate::container::Container;
use crate::error::{OpticsError, Result};

/// What a [`Key`] does when its key is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPolicy {
    /// Visit the absence marker and insert the replacement.
    Default,
    /// Fail with [`OpticsError::MissingKey`].
    Required,
    /// Visit nothing.
    Optional,
}

/// A traversal focusing on the value stored under one key.
///
/// The key may be any type convertible into the container's key type, so
/// `key("name")` works against both `Value` maps and JSON objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key<K> {
    key: K,
    policy: KeyPolicy,
}

impl<K> Key<K> {
    /// Creates a keyed traversal with an explicit policy.
    #[must_use]
    pub const fn new(key: K, policy: KeyPolicy) -> Self {
        Self { key, policy }
    }

    /// Returns the existence policy.
    pub const fn policy(&self) -> KeyPolicy {
        self.policy
    }
}

impl<D, K> Traversal<D> for Key<K>
where
    D: Container,
    K: Clone + fmt::Debug + Into<D::Key>,
{
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        let key: D::Key = self.key.clone().into();
        let focus = match data.fetch_by_key(&key)? {
            Some(focus) => focus,
            None => match self.policy {
                KeyPolicy::Default => D::absent(),
                KeyPolicy::Required => return Err(OpticsError::missing_key(&key, &data)),
                KeyPolicy::Optional => return Ok(data),
            },
        };
        let replacement = visit.visit(focus)?;
        data.put_by_key(&key, replacement)
    }
}

/// Focuses on the value under `key`, presenting the absence marker when the
/// key is missing.
#[must_use]
pub const fn key<K>(key: K) -> Key<K> {
    Key::new(key, KeyPolicy::Default)
}

/// Focuses on the value under `key`, failing when the key is missing.
#[must_use]
pub const fn key_required<K>(key: K) -> Key<K> {
    Key::new(key, KeyPolicy::Required)
}

/// Focuses on the value under `key` when present, and on nothing otherwise.
#[must_use]
pub const fn key_optional<K>(key: K) -> Key<K> {
    Key::new(key, KeyPolicy::Optional)
}

fn keys_with_policy<D, K, I>(keys: I, policy: KeyPolicy) -> Lens<D>
where
    D: Container,
    I: IntoIterator<Item = K>,
    K: Clone + fmt::Debug + Into<D::Key> + Send + Sync + 'static,
{
    let lenses: Vec<Lens<D>> = keys
        .into_iter()
        .map(|key| Lens::new(Key::new(key, policy)))
        .collect();
    multiple(lenses)
}

/// Focuses on each listed key in list order, with [`key`] semantics.
pub fn keys<D, K, I>(keys: I) -> Lens<D>
where
    D: Container,
    I: IntoIterator<Item = K>,
    K: Clone + fmt::Debug + Into<D::Key> + Send + Sync + 'static,
{
    keys_with_policy(keys, KeyPolicy::Default)
}

/// Focuses on each listed key in list order, with [`key_required`]
/// semantics.
pub fn keys_required<D, K, I>(keys: I) -> Lens<D>
where
    D: Container,
    I: IntoIterator<Item = K>,
    K: Clone + fmt::Debug + Into<D::Key> + Send + Sync + 'static,
{
    keys_with_policy(keys, KeyPolicy::Required)
}

/// Focuses on each listed key that is present, in list order.
pub fn keys_optional<D, K, I>(keys: I) -> Lens<D>
where
    D: Container,
    I: IntoIterator<Item = K>,
    K: Clone + fmt::Debug + Into<D::Key> + Send + Sync + 'static,
{
    keys_with_policy(keys, KeyPolicy::Optional)
}
