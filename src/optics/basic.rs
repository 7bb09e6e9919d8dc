//! Structural primitives: [`Empty`], [`Const`], [`Root`] and [`Match`].
//!
//! # Examples
//!
//! ```
//! use lenskit::optics::{Traversal, const_value, empty, root};
//! use lenskit::Value;
//!
//! let data = Value::list([1, 2]);
//!
//! assert_eq!(empty().to_list(data.clone()), Ok(vec![]));
//! assert_eq!(root().to_list(data.clone()), Ok(vec![data.clone()]));
//!
//! // A constant focus is detached from the data: replacing it changes nothing.
//! let constant = const_value(Value::from(5));
//! assert_eq!(constant.to_list(data.clone()), Ok(vec![Value::from(5)]));
//! assert_eq!(constant.map(data.clone(), |_| Value::Nil), Ok(data));
//! ```

use std::fmt;

use super::traversal::{Lens, Traversal, Visit, Visitor};
use crate::container::Container;
use crate::error::Result;

// =============================================================================
// Empty
// =============================================================================

/// A traversal with no foci.
///
/// The visitor is never invoked and the data is returned unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl<D: Container> Traversal<D> for Empty {
    fn traverse(&self, data: D, _visit: &mut Visit<'_, D>) -> Result<D> {
        Ok(data)
    }
}

/// Creates an [`Empty`] traversal.
#[must_use]
pub const fn empty() -> Empty {
    Empty
}

// =============================================================================
// Const
// =============================================================================

/// A traversal with one synthetic focus holding a fixed value.
///
/// The replacement produced for the focus is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Const<D> {
    value: D,
}

impl<D: Container> Traversal<D> for Const<D> {
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        visit.visit(self.value.clone())?;
        Ok(data)
    }
}

/// Creates a [`Const`] traversal focusing on `value`.
#[must_use]
pub const fn const_value<D: Container>(value: D) -> Const<D> {
    Const { value }
}

// =============================================================================
// Root
// =============================================================================

/// A traversal focusing on the whole data value, exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Root;

impl<D: Container> Traversal<D> for Root {
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        visit.visit(data)
    }
}

/// Creates a [`Root`] traversal.
#[must_use]
pub const fn root() -> Root {
    Root
}

// =============================================================================
// Match
// =============================================================================

/// A traversal chosen at apply time from the data itself.
///
/// The selector inspects the data and returns the traversal to delegate to.
///
/// # Example
///
/// ```
/// use lenskit::optics::{Lens, Traversal, all, at, matching};
/// use lenskit::Value;
///
/// // Tuples focus on their second element, lists on every element.
/// let payload = matching(|data: &Value| match data {
///     Value::Tuple(_) => at(1).boxed(),
///     _ => all().boxed(),
/// });
///
/// assert_eq!(
///     payload.to_list(Value::tuple([Value::atom("ok"), Value::from(1)])),
///     Ok(vec![Value::from(1)])
/// );
/// assert_eq!(
///     payload.to_list(Value::list([2, 3])),
///     Ok(vec![Value::from(2), Value::from(3)])
/// );
/// ```
pub struct Match<F> {
    selector: F,
}

impl<F: Clone> Clone for Match<F> {
    fn clone(&self) -> Self {
        Self {
            selector: self.selector.clone(),
        }
    }
}

impl<F> fmt::Debug for Match<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Match").finish_non_exhaustive()
    }
}

impl<D, F> Traversal<D> for Match<F>
where
    D: Container,
    F: Fn(&D) -> Lens<D>,
{
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        (self.selector)(&data).traverse(data, visit)
    }
}

/// Creates a [`Match`] traversal from a selector.
#[must_use]
pub const fn matching<D, F>(selector: F) -> Match<F>
where
    D: Container,
    F: Fn(&D) -> Lens<D>,
{
    Match { selector }
}
