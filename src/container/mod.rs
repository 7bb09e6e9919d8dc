//! The capability contract every traversable data model implements.
//!
//! Traversals never inspect data directly. Keyed access, indexed access,
//! iteration and rebuilding all go through [`Container`], so the same
//! traversal value works against any data model with an adapter.
//!
//! Two adapters ship with the crate:
//!
//! - [`Value`]: a dynamic value with maps, lists, tuples and sets
//! - `serde_json::Value` (with the `json` feature)
//!
//! # Example
//!
//! ```
//! use lenskit::{Container, Value, atom};
//!
//! let data = Value::map([(atom("a"), Value::from(1))]);
//! assert_eq!(data.fetch_by_key(&atom("a")), Ok(Some(Value::from(1))));
//! assert_eq!(data.fetch_by_key(&atom("b")), Ok(None));
//! ```

#[cfg(feature = "json")]
mod json;
mod value;

pub use value::Value;
pub use value::atom;

use std::fmt;

use crate::error::Result;

/// The minimal interface a data model must expose to be traversable.
///
/// Implementations dispatch on the runtime shape of the value and report
/// [`OpticsError::CapabilityMismatch`](crate::OpticsError::CapabilityMismatch)
/// when a capability is requested from a shape that does not support it.
///
/// Values are passed by ownership: `put_*` and `insert_at` consume the
/// container and return the rebuilt one.
pub trait Container: Clone + fmt::Debug + Send + Sync + Sized + 'static {
    /// The key type used by keyed containers.
    type Key: Clone + fmt::Debug + Send + Sync + 'static;

    /// The absence marker presented for missing keys and gap foci.
    fn absent() -> Self;

    /// Looks up `key`, returning `None` when it is absent.
    ///
    /// # Errors
    ///
    /// Returns `CapabilityMismatch` when the value is not keyed.
    fn fetch_by_key(&self, key: &Self::Key) -> Result<Option<Self>>;

    /// Stores `value` under `key`, inserting the key when it is absent.
    ///
    /// # Errors
    ///
    /// Returns `CapabilityMismatch` when the value is not keyed.
    fn put_by_key(self, key: &Self::Key, value: Self) -> Result<Self>;

    /// Reads the element at `index` of a sequence or tuple.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` past the end and `CapabilityMismatch` for
    /// values that are not indexed.
    fn fetch_by_index(&self, index: usize) -> Result<Self>;

    /// Replaces the element at `index` of a sequence or tuple.
    ///
    /// # Errors
    ///
    /// Same as [`Container::fetch_by_index`].
    fn put_by_index(self, index: usize, value: Self) -> Result<Self>;

    /// Returns the elements in iteration order.
    ///
    /// Keyed containers yield their entries as [`Container::pair`]s of key
    /// and value.
    ///
    /// # Errors
    ///
    /// Returns `CapabilityMismatch` when the value is not enumerable.
    fn iterate(self) -> Result<Vec<Self>>;

    /// Builds the default ordered sequence from `elements`.
    fn rebuild(elements: Vec<Self>) -> Self;

    /// Builds the two-element value used for map entries and context foci.
    fn pair(first: Self, second: Self) -> Self;

    /// Returns an empty keyed container.
    fn empty_map() -> Self;

    /// Pours the elements of `self` into `target`.
    ///
    /// # Errors
    ///
    /// Returns `CapabilityMismatch` when `self` is not enumerable, when
    /// `target` cannot collect, or when an element has the wrong shape for
    /// `target` (for example a non-pair collected into a map).
    fn collect_into(self, target: Self) -> Result<Self>;

    /// Returns the number of elements [`Container::iterate`] would yield.
    ///
    /// # Errors
    ///
    /// Same as [`Container::iterate`].
    fn length(&self) -> Result<usize> {
        self.clone().iterate().map(|elements| elements.len())
    }

    /// Inserts `value` before position `index`, clamped to the length.
    ///
    /// The result is always the default ordered sequence.
    ///
    /// # Errors
    ///
    /// Same as [`Container::iterate`].
    fn insert_at(self, index: usize, value: Self) -> Result<Self> {
        let mut elements = self.iterate()?;
        let position = index.min(elements.len());
        elements.insert(position, value);
        Ok(Self::rebuild(elements))
    }
}
