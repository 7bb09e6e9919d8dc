//! Element-wise traversal of enumerable containers.
//!
//! [`All`] focuses on every element in iteration order and rebuilds the
//! default ordered sequence, even when the input was a map or a set. Use
//! [`into_container`](super::Traversal::into_container) to rebuild into
//! another container, or [`map_values`]/[`map_keys`] to update a map in
//! place.
//!
//! # Examples
//!
//! ```
//! use lenskit::optics::{Traversal, all, map_values};
//! use lenskit::{Value, atom};
//!
//! let prices = Value::map([(atom("apple"), 3), (atom("pear"), 5)]);
//!
//! // `all` presents map entries as (key, value) tuples and rebuilds a list.
//! assert_eq!(
//!     all().to_list(prices.clone()),
//!     Ok(vec![
//!         Value::tuple([atom("apple"), Value::from(3)]),
//!         Value::tuple([atom("pear"), Value::from(5)]),
//!     ])
//! );
//!
//! let doubled = map_values().map(prices, |price| Value::Int(price.as_int().unwrap_or(0) * 2));
//! assert_eq!(doubled, Ok(Value::map([(atom("apple"), 6), (atom("pear"), 10)])));
//! ```

use super::index::at;
use super::traversal::{Lens, Traversal, Visit, Visitor};
use crate::container::Container;
use crate::error::Result;

/// A traversal focusing on every element of an enumerable container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct All;

impl<D: Container> Traversal<D> for All {
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        let updated = data
            .iterate()?
            .into_iter()
            .map(|focus| visit.visit(focus))
            .collect::<Result<Vec<D>>>()?;
        Ok(D::rebuild(updated))
    }
}

/// Creates an [`All`] traversal.
#[must_use]
pub const fn all() -> All {
    All
}

/// Focuses on every value of a map, rebuilding a map.
pub fn map_values<D: Container>() -> Lens<D> {
    all().into_container(D::empty_map()).compose(at(1)).boxed()
}

/// Focuses on every key of a map, rebuilding a map.
///
/// Keys that collide after replacement collapse into one entry.
pub fn map_keys<D: Container>() -> Lens<D> {
    all().into_container(D::empty_map()).compose(at(0)).boxed()
}
